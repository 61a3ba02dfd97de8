use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::error::{StoreError, StoreResult};

/// Default location of the job data, relative to the working directory.
pub const DEFAULT_SOURCE: &str = "resources/job_data.csv";

/// Where the store reads its data from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the CSV source file.
    pub source: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl StoreConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a JSON config file of the form `{"source": "path/to/jobs.csv"}`.
    /// A missing `source` key keeps the default.
    pub fn from_json_file(path: &Path) -> StoreResult<Self> {
        let parsed = std::fs::read_to_string(path)
            .context("reading config file")
            .and_then(|text| serde_json::from_str(&text).context("parsing config JSON"));

        parsed.map_err(|source| StoreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_points_at_resources() {
        assert_eq!(StoreConfig::default().source, PathBuf::from("resources/job_data.csv"));
    }

    #[test]
    fn reads_source_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"source": "/data/jobs.csv"}}"#).unwrap();

        let cfg = StoreConfig::from_json_file(file.path()).unwrap();
        assert_eq!(cfg, StoreConfig::new("/data/jobs.csv"));
    }

    #[test]
    fn empty_object_keeps_default() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let cfg = StoreConfig::from_json_file(file.path()).unwrap();
        assert_eq!(cfg, StoreConfig::default());
    }

    #[test]
    fn invalid_json_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "source = jobs.csv").unwrap();

        let err = StoreConfig::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Config { .. }));
    }
}
