use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const HEADERS: [&str; 5] = ["name", "employer", "location", "position type", "core competency"];

const SENIORITY: &[&str] = &["Junior", "Mid-Level", "Senior", "Lead", "Principal"];
const ROLES: &[&str] = &[
    "Web Developer",
    "Data Analyst",
    "Software Engineer",
    "QA Tester",
    "Systems Administrator",
    "Mobile Developer",
];
const EMPLOYERS: &[&str] = &[
    "LaunchCode",
    "Cozy, Inc.",
    "Enterprise Holdings, Inc",
    "Bayer",
    "Mastercard",
    "Square",
    "Hackery \"Labs\"",
];
const LOCATIONS: &[&str] = &["St. Louis", "Kansas City", "Miami", "Tampa", "Boston"];
const POSITION_TYPES: &[&str] = &[
    "Web - Back End",
    "Web - Front End",
    "Data Scientist / Business Intelligence",
    "Embedded",
];
const COMPETENCIES: &[&str] = &[
    "Java",
    "Ruby",
    "JavaScript",
    "Python",
    "SQL",
    "Rust",
    "Statistical Analysis",
];

/// Default output, next to where the generator runs; the bundled
/// `resources/job_data.csv` is never overwritten unless asked for.
const DEFAULT_OUTPUT: &str = "sample_job_data.csv";

/// Write the header and `n_rows` random jobs.
fn write_sample<W: io::Write>(
    writer: &mut csv::Writer<W>,
    n_rows: usize,
    rng: &mut SimpleRng,
) -> Result<()> {
    writer.write_record(HEADERS).context("writing header")?;
    for _ in 0..n_rows {
        let name = format!("{} {}", rng.pick(SENIORITY), rng.pick(ROLES));
        let row = [
            name.as_str(),
            rng.pick(EMPLOYERS),
            rng.pick(LOCATIONS),
            rng.pick(POSITION_TYPES),
            rng.pick(COMPETENCIES),
        ];
        writer.write_record(row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;
    Ok(())
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let n_rows: usize = 100;

    if let Some(dir) = output_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    write_sample(&mut writer, n_rows, &mut SimpleRng::new(42))?;

    println!("Wrote {n_rows} jobs to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use techjobs::data::loader::read_csv;

    use super::*;

    fn generate(n_rows: usize, seed: u64) -> Vec<u8> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        write_sample(&mut writer, n_rows, &mut SimpleRng::new(seed)).unwrap();
        writer.into_inner().unwrap()
    }

    #[test]
    fn generated_sample_loads_back() {
        let dataset = read_csv(generate(40, 42).as_slice()).unwrap();

        assert_eq!(dataset.column_names, HEADERS);
        assert_eq!(dataset.len(), 40);
        for record in &dataset.records {
            assert!(EMPLOYERS.contains(&record.get("employer").unwrap()));
            assert!(POSITION_TYPES.contains(&record.get("position type").unwrap()));
        }
    }

    #[test]
    fn quoted_employers_survive() {
        // Enough rows that every employer, including the quoted ones, shows up.
        let dataset = read_csv(generate(500, 7).as_slice()).unwrap();
        let employers: Vec<&str> = dataset
            .records
            .iter()
            .map(|r| r.get("employer").unwrap())
            .collect();

        assert!(employers.contains(&"Cozy, Inc."));
        assert!(employers.contains(&"Hackery \"Labs\""));
    }

    #[test]
    fn same_seed_same_output() {
        assert_eq!(generate(20, 42), generate(20, 42));
        assert_ne!(generate(20, 42), generate(20, 43));
    }

    #[test]
    fn default_output_is_not_bundled_sample() {
        assert_ne!(DEFAULT_OUTPUT, techjobs::config::DEFAULT_SOURCE);
    }
}
