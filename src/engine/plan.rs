//! Uniform distribution of a month-level plan across calendar days

use chrono::NaiveDate;

use crate::domain::date::ReportDate;

/// Exact number of calendar days in the month containing `date`
pub fn days_in_month(date: ReportDate) -> u32 {
    let first = date.first_of_month();
    let (next_year, next_month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    // Day 1 exists in every month
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    next_first
        .signed_duration_since(first.into_inner())
        .num_days() as u32
}

/// Constant per-day share of the month plan
///
/// An unresolved month plan contributes nothing: the increment is zero, so
/// the running plan total stays at zero for every day rather than leaving
/// gaps in later cumulative sums.
pub fn daily_plan_increment(month_plan: Option<f64>, date: ReportDate) -> f64 {
    match month_plan {
        Some(total) => total / f64::from(days_in_month(date)),
        None => 0.0,
    }
}
