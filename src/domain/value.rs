//! Tagged cell values for the open per-day payload
//!
//! Row payloads are schema-less: the template collaborator owns the column
//! set and may evolve it at any time, so every value is carried as a tagged
//! [`CellValue`]. Conversion to a number is *total*: bad input degrades to
//! unknown instead of failing the aggregation pass that reads it. Row-write
//! paths that want to reject bad input must do so before the value ever
//! lands in a row; by the time the engine sees it, tolerance wins.

use serde::{Deserialize, Serialize};

/// One value inside a row payload
///
/// The serialized form is plain JSON; unknown derived values serialize as
/// `null`, never as `NaN` or an infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum CellValue {
    /// Explicit null, also the wire form of an unknown derived value
    Null,
    #[from]
    Bool(bool),
    #[from]
    Number(f64),
    #[from]
    Text(String),
    /// Anything else the schema owner stores (arrays, nested objects).
    /// Carried through unmodified.
    Other(serde_json::Value),
}

impl CellValue {
    /// Tolerant conversion to a number
    ///
    /// - numbers pass through (non-finite degrades to unknown)
    /// - text is trimmed and parsed as a decimal number; blank or
    ///   unparseable text is unknown
    /// - everything else is unknown
    pub fn coerce(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number).filter(|n| n.is_finite()),
            Self::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            Self::Null | Self::Bool(_) | Self::Other(_) => None,
        }
    }

    /// A known finite number, or the explicit unknown marker
    pub fn from_optional_number(value: Option<f64>) -> Self {
        match value {
            Some(number) if number.is_finite() => Self::Number(number),
            _ => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for CellValue {
    fn from(raw: &str) -> Self {
        Self::Text(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::integer(CellValue::Number(42.0), Some(42.0))]
    #[case::fraction(CellValue::Number(17.25), Some(17.25))]
    #[case::numeric_text(CellValue::from("117.5"), Some(117.5))]
    #[case::padded_text(CellValue::from("  42.5  "), Some(42.5))]
    #[case::negative_text(CellValue::from("-3"), Some(-3.0))]
    #[case::empty_text(CellValue::from(""), None)]
    #[case::blank_text(CellValue::from("   "), None)]
    #[case::garbage_text(CellValue::from("n/a"), None)]
    #[case::null(CellValue::Null, None)]
    #[case::boolean(CellValue::from(true), None)]
    #[case::nested(CellValue::Other(serde_json::json!({"a": 1})), None)]
    fn coercion_is_total(#[case] value: CellValue, #[case] expected: Option<f64>) {
        assert_eq!(value.coerce(), expected);
    }

    #[test]
    fn non_finite_numbers_are_unknown() {
        assert_eq!(CellValue::Number(f64::NAN).coerce(), None);
        assert_eq!(CellValue::from("inf").coerce(), None);
        assert_eq!(CellValue::from("NaN").coerce(), None);
    }

    #[test]
    fn unknown_serializes_as_null() {
        let value = CellValue::from_optional_number(None);
        assert_eq!(serde_json::to_value(&value).unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn non_finite_results_become_the_unknown_marker() {
        assert!(CellValue::from_optional_number(Some(f64::INFINITY)).is_null());
        assert!(CellValue::from_optional_number(Some(f64::NAN)).is_null());
    }

    #[test]
    fn json_round_trip_preserves_every_shape() {
        let raw = serde_json::json!({
            "fraction": 2.5,
            "text": "hello",
            "flag": true,
            "missing": null,
            "nested": {"keep": [1, 2, 3]}
        });
        let values: std::collections::BTreeMap<String, CellValue> =
            serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&values).unwrap(), raw);
        assert_eq!(values["missing"], CellValue::Null);
        assert!(matches!(values["nested"], CellValue::Other(_)));
    }

    #[test]
    fn json_integers_land_as_numbers() {
        let value: CellValue = serde_json::from_str("5").unwrap();
        assert_eq!(value, CellValue::Number(5.0));
    }
}
