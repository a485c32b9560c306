//! In-memory reference store
//!
//! Mirrors the upsert discipline the engine assumes of the production
//! storage collaborator: atomic insert-or-replace keyed by
//! `(table, date)`, whole-payload replacement, monotonic version bump,
//! last writer wins. Fetches see the latest committed snapshot.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::DayRecordStore;
use crate::domain::date::ReportDate;
use crate::domain::identifiers::{RowVersion, TableId};
use crate::domain::record::{DayRecord, RowData};
use crate::Result;

#[derive(Debug, Clone)]
struct StoredRow {
    data: RowData,
    version: RowVersion,
    updated_at: DateTime<Utc>,
}

/// Thread-safe in-memory row store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: RwLock<BTreeMap<(TableId, ReportDate), StoredRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the row for `(table, date)`
    ///
    /// Replacement is whole-payload and bumps the row version. Returns the
    /// committed row.
    pub fn upsert_row(&self, table: TableId, date: ReportDate, data: RowData) -> DayRecord {
        let mut rows = self.rows.write();
        let now = Utc::now();
        let stored = match rows.entry((table, date)) {
            Entry::Occupied(mut occupied) => {
                let row = occupied.get_mut();
                row.data = data;
                row.version = row.version.bumped();
                row.updated_at = now;
                row.clone()
            }
            Entry::Vacant(vacant) => vacant
                .insert(StoredRow {
                    data,
                    version: RowVersion::initial(),
                    updated_at: now,
                })
                .clone(),
        };
        DayRecord {
            table,
            date,
            data: stored.data,
            version: stored.version,
            updated_at: stored.updated_at,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.read().len()
    }
}

#[async_trait]
impl DayRecordStore for InMemoryStore {
    async fn fetch_day_records(
        &self,
        table: TableId,
        from: ReportDate,
        to: ReportDate,
    ) -> Result<Vec<DayRecord>> {
        if from > to {
            return Ok(Vec::new());
        }
        let rows = self.rows.read();
        Ok(rows
            .range((table, from)..=(table, to))
            .map(|(&(_, date), stored)| DayRecord {
                table,
                date,
                data: stored.data.clone(),
                version: stored.version,
                updated_at: stored.updated_at,
            })
            .collect())
    }
}
