use std::collections::BTreeSet;

use crate::error::{StoreError, StoreResult};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Distinct values
// ---------------------------------------------------------------------------

/// Distinct values of `column` across all records, in code-point order
/// (so "Z" sorts before "a"). Uniqueness is exact, not case-folded.
pub fn distinct_values(dataset: &Dataset, column: &str) -> StoreResult<Vec<String>> {
    check_column(dataset, column)?;
    let mut values = BTreeSet::new();
    for record in &dataset.records {
        values.insert(field(record, column)?.to_string());
    }
    Ok(values.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Containment search
// ---------------------------------------------------------------------------

/// Records whose `column` contains `query`, ignoring case. File order.
pub fn search_column(
    dataset: &Dataset,
    column: &str,
    query: &str,
) -> StoreResult<Vec<Record>> {
    check_column(dataset, column)?;
    let needle = query.to_lowercase();
    let mut matches = Vec::new();
    for record in &dataset.records {
        if field(record, column)?.to_lowercase().contains(&needle) {
            matches.push(record.clone());
        }
    }
    Ok(matches)
}

/// Records where any field contains `query`, ignoring case. Each record
/// appears at most once, in file order. An empty query matches everything.
pub fn search_all(dataset: &Dataset, query: &str) -> Vec<Record> {
    let needle = query.to_lowercase();
    dataset
        .records
        .iter()
        .filter(|record| record.values().any(|v| v.to_lowercase().contains(&needle)))
        .cloned()
        .collect()
}

/// Reject a column missing from the header. A dataset without a header
/// (empty or failed load) has no schema to check against.
fn check_column(dataset: &Dataset, column: &str) -> StoreResult<()> {
    if dataset.column_names.is_empty() || dataset.column_names.iter().any(|c| c == column) {
        Ok(())
    } else {
        Err(StoreError::ColumnNotFound(column.to_string()))
    }
}

fn field<'a>(record: &'a Record, column: &str) -> StoreResult<&'a str> {
    record
        .get(column)
        .ok_or_else(|| StoreError::ColumnNotFound(column.to_string()))
}
