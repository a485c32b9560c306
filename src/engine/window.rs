//! Restriction of a full-month pass to the requested window

use crate::domain::date::DateRange;
use crate::domain::record::AugmentedDayRecord;

/// Keep only records inside the inclusive window, preserving order
///
/// This runs strictly *after* full-month aggregation: cumulative values on
/// the retained records were computed from the first day of the month, so
/// a window opening mid-month still shows true month-to-date figures.
pub fn restrict_to_window(
    records: Vec<AugmentedDayRecord>,
    window: &DateRange,
) -> Vec<AugmentedDayRecord> {
    records
        .into_iter()
        .filter(|record| window.contains(record.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::date::ReportDate;
    use crate::domain::fields::MetricSpec;
    use crate::domain::identifiers::{RowVersion, TableId};
    use crate::domain::record::{DayRecord, RowData};
    use crate::engine::aggregate;
    use chrono::Utc;

    fn date(day: u32) -> ReportDate {
        ReportDate::from_ymd(2024, 2, day).unwrap()
    }

    fn rows_for_february() -> Vec<AugmentedDayRecord> {
        let records = (1..=20)
            .map(|day| DayRecord {
                table: TableId::from(1),
                date: date(day),
                data: RowData::new(),
                version: RowVersion::initial(),
                updated_at: Utc::now(),
            })
            .collect();
        aggregate(records, &MetricSpec::defaults())
    }

    #[test]
    fn keeps_exactly_the_inclusive_window() {
        let window = DateRange::new(date(10), date(15)).unwrap();
        let kept = restrict_to_window(rows_for_february(), &window);
        let days: Vec<u32> = kept.iter().map(|row| row.date.day()).collect();
        assert_eq!(days, vec![10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn trimming_does_not_touch_the_retained_records() {
        let full = rows_for_february();
        let window = DateRange::new(date(5), date(20)).unwrap();
        let kept = restrict_to_window(full.clone(), &window);
        for row in &kept {
            let original = full.iter().find(|r| r.date == row.date).unwrap();
            assert_eq!(row, original);
        }
    }

    #[test]
    fn window_outside_the_data_is_empty() {
        let window = DateRange::new(date(21), date(29)).unwrap();
        assert!(restrict_to_window(rows_for_february(), &window).is_empty());
    }
}
