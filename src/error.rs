use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the job data or answering a query.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The source file could not be opened (missing, permissions).
    #[error("cannot open job data source {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source file opened but is not valid header-delimited CSV.
    #[error("malformed job data source {}", .path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A query named a column the records do not have.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// The store configuration file could not be read or parsed.
    #[error("invalid store configuration {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// `err` and all of its sources, joined with `": "`.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
