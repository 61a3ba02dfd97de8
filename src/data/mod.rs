//! Data layer: core types, loading, and querying.
//!
//! Architecture:
//! ```text
//!   job_data.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  Vec<Record>, header column names
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  query   │  linear scans → distinct values / matching records
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod query;
