//! Progressive month-to-date aggregation
//!
//! The orchestrator of the engine. Records are sorted by date (storage
//! ordering is not trusted), then walked once while per-metric running
//! state accumulates:
//!
//! - the month plan figure resolves from the first payload that carries a
//!   usable number for it, and stays fixed for the rest of the month;
//! - unknown per-day facts count as zero in the running fact sum, but the
//!   deviation and percentage stay unknown while the plan is unresolved;
//!   an unknown plan must not silently become a zero plan for those
//!   derived figures;
//! - running totals and the plan resolution reset whenever the calendar
//!   month changes, keeping multi-month ranges month-to-date per month.
//!
//! The pass emits one augmented record per input record and keeps no state
//! between calls; a fresh call recomputes everything from scratch.

use tracing::debug;

use crate::domain::fields::MetricSpec;
use crate::domain::record::{AugmentedDayRecord, DayRecord};
use crate::domain::value::CellValue;
use crate::engine::{calc, plan};

/// Running per-metric state for one calendar month
#[derive(Debug, Default)]
struct MetricState {
    /// First usable month plan seen in date order; sticky for the month
    month_plan: Option<f64>,
    fact_to_date: f64,
    plan_to_date: f64,
}

impl MetricState {
    /// Plan total usable for deviation and percentage
    ///
    /// Unresolved means unknown here, even though it counts as zero in the
    /// running sums. A plan that resolved to exactly zero is treated the
    /// same as an absent one.
    fn known_plan_to_date(&self) -> Option<f64> {
        self.month_plan
            .filter(|total| *total != 0.0)
            .map(|_| self.plan_to_date)
    }
}

fn fresh_states(metrics: &[MetricSpec]) -> Vec<MetricState> {
    metrics.iter().map(|_| MetricState::default()).collect()
}

/// Aggregate a record sequence into augmented month-to-date records
///
/// The input is expected to start at the first stored day of the earliest
/// month it covers; callers wanting a mid-month window must aggregate the
/// whole month first and trim afterwards (see
/// [`restrict_to_window`](crate::engine::restrict_to_window)).
pub fn aggregate(mut records: Vec<DayRecord>, metrics: &[MetricSpec]) -> Vec<AugmentedDayRecord> {
    records.sort_by_key(|record| record.date);

    let mut states = fresh_states(metrics);
    let mut current_month: Option<(i32, u32)> = None;
    let mut augmented = Vec::with_capacity(records.len());

    for record in &records {
        let month = (record.date.year(), record.date.month());
        if current_month != Some(month) {
            states = fresh_states(metrics);
            current_month = Some(month);
        }

        let mut data = record.data.clone();
        for (metric, state) in metrics.iter().zip(states.iter_mut()) {
            // Unknown facts count as zero in the sum only; they stay
            // unknown for the derived figures below.
            let day_fact = data.coerced(&metric.fact_per_day);

            if state.month_plan.is_none() {
                state.month_plan = data.coerced(&metric.plan_month);
                if let Some(total) = state.month_plan {
                    debug!(metric = %metric.name, date = %record.date, total, "resolved month plan");
                }
            }

            let increment = plan::daily_plan_increment(state.month_plan, record.date);
            state.fact_to_date += day_fact.unwrap_or(0.0);
            state.plan_to_date += increment;

            let fact_to_date = Some(state.fact_to_date);
            let plan_to_date = state.known_plan_to_date();

            // from_optional_number guards the emitted copy: a sum that
            // overflowed to an infinity degrades to the unknown marker
            // instead of leaking a non-finite number to callers.
            data.insert(
                metric.plan_per_day.clone(),
                CellValue::from_optional_number(Some(calc::round2(increment))),
            );
            data.insert(
                metric.fact_to_date.clone(),
                CellValue::from_optional_number(Some(calc::round2(state.fact_to_date))),
            );
            data.insert(
                metric.plan_to_date.clone(),
                CellValue::from_optional_number(Some(calc::round2(state.plan_to_date))),
            );
            data.insert(
                metric.deviation.clone(),
                CellValue::from_optional_number(
                    calc::deviation(fact_to_date, plan_to_date).map(calc::round2),
                ),
            );
            data.insert(
                metric.percent_of_plan.clone(),
                CellValue::from_optional_number(
                    calc::percentage_of_plan(fact_to_date, plan_to_date).map(calc::round2),
                ),
            );
        }

        augmented.push(AugmentedDayRecord::from_record(record, data));
    }

    augmented
}
