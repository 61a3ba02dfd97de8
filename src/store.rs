use std::sync::OnceLock;

use crate::config::StoreConfig;
use crate::data::loader::load_csv;
use crate::data::model::{Dataset, Record};
use crate::data::query;
use crate::error::{error_chain, StoreError, StoreResult};

// ---------------------------------------------------------------------------
// Dataset store
// ---------------------------------------------------------------------------

/// Outcome of the one-time load.
#[derive(Debug)]
struct Loaded {
    dataset: Dataset,
    /// Why the load failed; the dataset is empty when this is set.
    error: Option<StoreError>,
}

/// Owns the job dataset and answers read-only queries over it.
///
/// The source is read on first use and never again. A failed load is logged
/// and leaves the store empty; queries then see zero records. Every query
/// returns owned copies, so callers cannot reach the stored records.
#[derive(Debug)]
pub struct DatasetStore {
    config: StoreConfig,
    loaded: OnceLock<Loaded>,
}

impl DatasetStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            loaded: OnceLock::new(),
        }
    }

    /// A store that is already loaded with `dataset`; the source is never read.
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            config: StoreConfig::default(),
            loaded: OnceLock::from(Loaded {
                dataset,
                error: None,
            }),
        }
    }

    /// Load the source if that has not happened yet. Safe to call from
    /// several threads; the file is parsed at most once.
    pub fn ensure_loaded(&self) {
        self.dataset();
    }

    /// Whether the one-time load has run (successfully or not).
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// The error from a failed load, if any.
    pub fn load_error(&self) -> Option<&StoreError> {
        self.loaded.get().and_then(|l| l.error.as_ref())
    }

    /// Column names in header order. Empty if the load failed.
    pub fn column_names(&self) -> Vec<String> {
        self.dataset().column_names.clone()
    }

    /// Distinct values of `column`, sorted by code point.
    pub fn list_distinct_values(&self, column: &str) -> StoreResult<Vec<String>> {
        let values = query::distinct_values(self.dataset(), column)?;
        log::debug!("{} distinct values for column '{column}'", values.len());
        Ok(values)
    }

    /// Every record in file order.
    pub fn find_all_records(&self) -> Vec<Record> {
        self.dataset().records.clone()
    }

    /// Records whose `column` contains `value`, ignoring case.
    pub fn search_column(&self, column: &str, value: &str) -> StoreResult<Vec<Record>> {
        let found = query::search_column(self.dataset(), column, value)?;
        log::debug!("'{value}' in column '{column}': {} records", found.len());
        Ok(found)
    }

    /// Records with `value` in any column, ignoring case.
    pub fn search_all(&self, value: &str) -> Vec<Record> {
        let found = query::search_all(self.dataset(), value);
        log::debug!("'{value}' in any column: {} records", found.len());
        found
    }

    fn dataset(&self) -> &Dataset {
        &self.loaded.get_or_init(|| self.load()).dataset
    }

    fn load(&self) -> Loaded {
        let path = &self.config.source;
        match load_csv(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} job records from {} with columns {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.column_names
                );
                Loaded {
                    dataset,
                    error: None,
                }
            }
            Err(e) => {
                log::error!("Failed to load job data: {}", error_chain(&e));
                Loaded {
                    dataset: Dataset::default(),
                    error: Some(e),
                }
            }
        }
    }
}

impl Default for DatasetStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
