//! Storage collaborator boundary
//!
//! Row persistence belongs to an external collaborator; this crate only
//! consumes a range fetch over committed rows. Fetch failures propagate to
//! the caller unchanged; retry policy, if any, lives behind the trait.

use async_trait::async_trait;

use crate::domain::date::ReportDate;
use crate::domain::identifiers::TableId;
use crate::domain::record::DayRecord;
use crate::Result;

pub mod fixture;
pub mod memory;

pub use memory::InMemoryStore;

/// Read side of the row storage collaborator
///
/// Implementations may return rows in any order; the aggregation engine
/// re-sorts defensively before its running pass.
#[async_trait]
pub trait DayRecordStore: Send + Sync {
    /// All committed rows for `table` with dates in `[from, to]` inclusive
    async fn fetch_day_records(
        &self,
        table: TableId,
        from: ReportDate,
        to: ReportDate,
    ) -> Result<Vec<DayRecord>>;
}
