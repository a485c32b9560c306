//! Month-to-date report assembly
//!
//! Composes the storage fetch, the progressive aggregation pass and the
//! window filter into the read API consumed by view callers. The fetch
//! always starts at the first day of the window's month: cumulative
//! figures must never be computed from a mid-month suffix of the data, or
//! month-to-date totals would silently shrink for late windows.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::date::DateRange;
use crate::domain::fields::MetricSpec;
use crate::domain::identifiers::TableId;
use crate::domain::record::AugmentedDayRecord;
use crate::engine;
use crate::store::DayRecordStore;
use crate::Result;

/// Read-side service producing augmented month-to-date rows
///
/// Stateless between calls: every request re-reads the latest committed
/// snapshot and recomputes from scratch.
pub struct ReportService {
    store: Arc<dyn DayRecordStore>,
    metrics: Vec<MetricSpec>,
}

impl ReportService {
    pub fn new(store: Arc<dyn DayRecordStore>, metrics: Vec<MetricSpec>) -> Self {
        Self { store, metrics }
    }

    /// Service with the standard production/overburden metrics
    pub fn with_default_metrics(store: Arc<dyn DayRecordStore>) -> Self {
        Self::new(store, MetricSpec::defaults())
    }

    /// Service configured from loaded settings
    pub fn from_settings(store: Arc<dyn DayRecordStore>, settings: &Settings) -> Result<Self> {
        Ok(Self::new(store, settings.metric_specs()?))
    }

    /// Augmented rows for `table` covering exactly `window`
    ///
    /// A request over a range containing bad historical data still returns
    /// the complete row set; affected derived fields come back as
    /// explicit unknowns instead of failing the call.
    #[instrument(skip(self))]
    pub async fn month_to_date(
        &self,
        table: TableId,
        window: DateRange,
    ) -> Result<Vec<AugmentedDayRecord>> {
        let records = self
            .store
            .fetch_day_records(table, window.aggregation_start(), window.to_date())
            .await?;
        debug!(fetched = records.len(), "aggregating day records");
        let full_month = engine::aggregate(records, &self.metrics);
        Ok(engine::restrict_to_window(full_month, &window))
    }
}
