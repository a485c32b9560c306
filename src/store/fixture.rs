//! JSON row fixtures for the offline renderer and tests

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::InMemoryStore;
use crate::domain::date::ReportDate;
use crate::domain::identifiers::TableId;
use crate::domain::record::RowData;
use crate::Result;

/// One raw row as written in a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct RowFixture {
    pub table: TableId,
    pub date: ReportDate,
    pub data: RowData,
}

/// Load a JSON array of rows into `store`; returns the number loaded
///
/// Rows are upserted in file order, so duplicate `(table, date)` entries
/// resolve last-writer-wins like any other write path.
pub fn load_rows(path: &Path, store: &InMemoryStore) -> Result<usize> {
    let raw = fs::read(path)?;
    let rows: Vec<RowFixture> = serde_json::from_slice(&raw)?;
    for row in &rows {
        store.upsert_row(row.table, row.date, row.data.clone());
    }
    debug!(path = %path.display(), count = rows.len(), "loaded row fixture");
    Ok(rows.len())
}
