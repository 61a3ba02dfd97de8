use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{StoreError, StoreResult};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the job dataset from a CSV file.
///
/// Layout: RFC-4180 CSV, header row with column names, then one record per
/// row with values aligned positionally to the headers. Quoted fields may
/// contain commas, doubled quotes and newlines.
///
/// A parse error anywhere in the file fails the whole load; rows read before
/// the error are discarded.
pub fn load_csv(path: &Path) -> StoreResult<Dataset> {
    let file = File::open(path).map_err(|source| StoreError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    read_csv(file).map_err(|source| StoreError::MalformedSource {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV from any reader. Ragged rows are rejected.
pub fn read_csv<R: Read>(input: R) -> Result<Dataset, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(input);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(column, value)| (column.as_str(), value))
            .collect();
        records.push(record);
    }

    Ok(Dataset::new(headers, records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn reads_rows_in_file_order() {
        let csv = "name,employer\nJunior Dev,Acme\nSenior Dev,Globex\nTester,Initech\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(dataset.column_names, vec!["name", "employer"]);
        assert_eq!(dataset.len(), 3);
        let names: Vec<&str> = dataset
            .records
            .iter()
            .map(|r| r.get("name").unwrap())
            .collect();
        assert_eq!(names, vec!["Junior Dev", "Senior Dev", "Tester"]);
    }

    #[test]
    fn honours_rfc4180_quoting() {
        let csv = "name,employer\n\"Dev, Backend\",\"The \"\"Best\"\" Co\"\n\"Multi\nLine\",Acme\n";
        let dataset = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(dataset.records[0].get("name"), Some("Dev, Backend"));
        assert_eq!(dataset.records[0].get("employer"), Some("The \"Best\" Co"));
        assert_eq!(dataset.records[1].get("name"), Some("Multi\nLine"));
    }

    #[test]
    fn header_only_file_is_empty() {
        let dataset = read_csv("name,employer\n".as_bytes()).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.column_names.len(), 2);
    }

    #[test]
    fn ragged_row_is_rejected() {
        let csv = "name,employer\nJunior Dev,Acme\nOrphan\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, StoreError::SourceUnavailable { .. }));
    }

    #[test]
    fn ragged_file_is_malformed_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name,employer\nJunior Dev,Acme\nx,y,z\n").unwrap();

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedSource { .. }));
    }
}
