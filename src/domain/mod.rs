//! Domain types for report rows and tracked metrics
//!
//! Newtypes at every boundary: dates, identifiers, field keys and cell
//! values are distinct types, so malformed input is either rejected at
//! construction or deliberately tolerated, at well-defined places.

pub mod date;
pub mod fields;
pub mod identifiers;
pub mod record;
pub mod value;

pub use date::{DateRange, ReportDate};
pub use fields::{FieldKey, MetricName, MetricSpec};
pub use identifiers::{RowVersion, TableId};
pub use record::{AugmentedDayRecord, DayRecord, RowData};
pub use value::CellValue;
