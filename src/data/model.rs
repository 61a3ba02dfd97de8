use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one row of the job listings
// ---------------------------------------------------------------------------

/// A single job listing: column_name → value.
///
/// Fields iterate in column-name order, which is the same for every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Value of `column`, if the record has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Set `column` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.fields.insert(column.into(), value.into())
    }

    /// `(column, value)` pairs in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field values in column-name order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (column, value) in self.iter() {
            writeln!(f, "{column}: {value}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset, rows in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records (rows).
    pub records: Vec<Record>,
    /// Column names in header order.
    pub column_names: Vec<String>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, records: Vec<Record>) -> Self {
        Dataset {
            records,
            column_names,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
