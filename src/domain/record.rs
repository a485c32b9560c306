//! Raw and augmented day records

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::date::ReportDate;
use crate::domain::fields::FieldKey;
use crate::domain::identifiers::{RowVersion, TableId};
use crate::domain::value::CellValue;

/// Open-ended row payload: field key to tagged value
///
/// Unrecognized keys are preserved unchanged; the column set belongs to
/// the template collaborator and evolves without this crate's knowledge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowData(BTreeMap<FieldKey, CellValue>);

impl RowData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &FieldKey) -> Option<&CellValue> {
        self.0.get(key)
    }

    /// Coerced numeric view of one field; absent fields are unknown
    pub fn coerced(&self, key: &FieldKey) -> Option<f64> {
        self.0.get(key).and_then(CellValue::coerce)
    }

    pub fn insert(&mut self, key: FieldKey, value: CellValue) {
        self.0.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &CellValue)> {
        self.0.iter()
    }
}

impl FromIterator<(FieldKey, CellValue)> for RowData {
    fn from_iter<I: IntoIterator<Item = (FieldKey, CellValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One calendar day's raw data for a reporting table
///
/// Uniquely keyed by `(table, date)`. The engine treats records as
/// immutable inputs; augmentation always builds a new copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub table: TableId,
    pub date: ReportDate,
    pub data: RowData,
    pub version: RowVersion,
    pub updated_at: DateTime<Utc>,
}

/// A day record whose payload carries derived month-to-date fields
///
/// Never persisted: recomputed on every read, with no lifecycle beyond
/// the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AugmentedDayRecord {
    pub table: TableId,
    pub date: ReportDate,
    pub data: RowData,
    pub version: RowVersion,
    pub updated_at: DateTime<Utc>,
}

impl AugmentedDayRecord {
    /// Augmented copy of `record` carrying the extended payload
    pub fn from_record(record: &DayRecord, data: RowData) -> Self {
        Self {
            table: record.table,
            date: record.date,
            data,
            version: record.version,
            updated_at: record.updated_at,
        }
    }
}
