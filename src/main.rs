use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use techjobs::{DatasetStore, Record, StoreConfig};

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Look up job listings in a CSV dataset.
#[derive(Debug, Parser)]
#[command(name = "techjobs", version, about, long_about = None)]
struct Cli {
    /// CSV source file (overrides the config file)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// JSON config file, e.g. {"source": "resources/job_data.csv"}
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Distinct values of a column
    List {
        #[arg(value_name = "COLUMN")]
        column: String,
    },

    /// Every job
    All,

    /// Jobs whose column contains the term, ignoring case
    Search {
        #[arg(value_name = "COLUMN")]
        column: String,
        #[arg(value_name = "TERM")]
        term: String,
    },

    /// Jobs with the term in any column, ignoring case
    SearchAll {
        #[arg(value_name = "TERM")]
        term: String,
    },
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One `*****` block per job, fields in header order.
fn render_records(records: &[Record], columns: &[String]) -> String {
    if records.is_empty() {
        return "No Results\n".to_string();
    }
    let mut out = String::new();
    for record in records {
        out.push_str("*****\n");
        for column in columns {
            if let Some(value) = record.get(column) {
                out.push_str(&format!("{column}: {value}\n"));
            }
        }
        out.push_str("*****\n\n");
    }
    out
}

fn print_records(store: &DatasetStore, records: &[Record], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records).context("encoding results")?);
    } else {
        print!("{}", render_records(records, &store.column_names()));
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StoreConfig::from_json_file(path)?,
        None => StoreConfig::default(),
    };
    if let Some(source) = cli.source {
        config.source = source;
    }

    let store = DatasetStore::new(config);

    match &cli.command {
        Command::List { column } => {
            let values = store
                .list_distinct_values(column)
                .with_context(|| format!("listing '{column}'"))?;
            if cli.json {
                let json = serde_json::to_string_pretty(&values).context("encoding results")?;
                println!("{json}");
            } else if values.is_empty() {
                println!("No Results");
            } else {
                println!("\n*** All {column} Values ***");
                for value in values {
                    println!("{value}");
                }
            }
        }
        Command::All => print_records(&store, &store.find_all_records(), cli.json)?,
        Command::Search { column, term } => {
            let found = store
                .search_column(column, term)
                .with_context(|| format!("searching '{column}'"))?;
            print_records(&store, &found, cli.json)?;
        }
        Command::SearchAll { term } => {
            print_records(&store, &store.search_all(term), cli.json)?;
        }
    }

    Ok(())
}
