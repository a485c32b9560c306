//! Field keys and metric definitions
//!
//! A reporting table stores open-ended row payloads; the engine only
//! interprets the handful of keys named by a [`MetricSpec`]. Everything
//! else passes through untouched.

use nutype::nutype;

/// Key of one field inside a row payload
///
/// Keys are owned by the template collaborator; we only require that they
/// are non-empty and of sane length so they can be indexed and logged.
#[nutype(
    validate(not_empty, len_char_max = 200),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct FieldKey(String);

/// Name of a tracked metric (`production`, `overburden`, ...)
#[nutype(
    validate(not_empty, len_char_max = 100, regex = r"^[a-z][a-z0-9_]*$"),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct MetricName(String);

/// Input and output keys of one tracked metric
///
/// Two keys are read: the per-day fact and the month-level plan target
/// (which may sit on any day's payload). Five keys are written onto the
/// augmented copy of each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSpec {
    pub name: MetricName,
    /// Raw fact entered for a single day
    pub fact_per_day: FieldKey,
    /// Month-level cumulative plan target
    pub plan_month: FieldKey,
    /// Uniform per-day share of the month plan
    pub plan_per_day: FieldKey,
    /// Running fact total from day 1 of the month
    pub fact_to_date: FieldKey,
    /// Running plan total from day 1 of the month
    pub plan_to_date: FieldKey,
    /// `fact_to_date - plan_to_date`
    pub deviation: FieldKey,
    /// `100 * fact_to_date / plan_to_date`
    pub percent_of_plan: FieldKey,
}

impl MetricSpec {
    /// Daily coal production, tonnes
    pub fn production() -> Self {
        Self {
            name: MetricName::try_new("production".to_string()).unwrap(),
            fact_per_day: key("prod_fact_per_day_t"),
            plan_month: key("prod_plan_month_t"),
            plan_per_day: key("prod_plan_per_day_t"),
            fact_to_date: key("prod_fact_to_date_t"),
            plan_to_date: key("prod_plan_to_date_t"),
            deviation: key("prod_dev_to_date_t"),
            percent_of_plan: key("prod_pct_to_date"),
        }
    }

    /// Daily overburden removal, cubic metres
    pub fn overburden() -> Self {
        Self {
            name: MetricName::try_new("overburden".to_string()).unwrap(),
            fact_per_day: key("ovb_fact_per_day_m3"),
            plan_month: key("ovb_plan_month_m3"),
            plan_per_day: key("ovb_plan_per_day_m3"),
            fact_to_date: key("ovb_fact_to_date_m3"),
            plan_to_date: key("ovb_plan_to_date_m3"),
            deviation: key("ovb_dev_to_date_m3"),
            percent_of_plan: key("ovb_pct_to_date"),
        }
    }

    /// The standard report metrics
    pub fn defaults() -> Vec<Self> {
        vec![Self::production(), Self::overburden()]
    }
}

fn key(raw: &str) -> FieldKey {
    FieldKey::try_new(raw.to_string()).unwrap()
}
