//! In-memory lookup over a CSV dataset of job listings.
//!
//! The [`DatasetStore`] reads the source once, on first use, and answers
//! read-only queries by linear scan:
//!
//! ```no_run
//! use techjobs::{DatasetStore, StoreConfig};
//!
//! let store = DatasetStore::new(StoreConfig::new("resources/job_data.csv"));
//! let employers = store.list_distinct_values("employer")?;
//! let rust_jobs = store.search_all("rust");
//! # Ok::<(), techjobs::StoreError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use data::model::{Dataset, Record};
pub use error::{StoreError, StoreResult};
pub use store::DatasetStore;
