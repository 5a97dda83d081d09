//! Scalar cell values

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Largest magnitude rendered in positional notation
const POSITIONAL_MAX: f64 = 1e21;
/// Smallest non-zero magnitude rendered in positional notation
const POSITIONAL_MIN: f64 = 1e-6;

/// A single cell: text, number, or absent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Number(Number),
    Text(String),
}

impl CellValue {
    /// Convert a JSON value taken from a result row.
    ///
    /// Booleans, arrays and objects have no scalar form in a table cell and
    /// are carried as their compact JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::Number(n) => CellValue::Number(n.clone()),
            Value::String(s) => CellValue::Text(s.clone()),
            Value::Bool(b) => CellValue::Text(b.to_string()),
            nested @ (Value::Array(_) | Value::Object(_)) => {
                tracing::warn!("nested value in cell stored as JSON text");
                CellValue::Text(nested.to_string())
            }
        }
    }

    /// Check if the value is absent
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text form used for export; absent values render as the empty string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed(""),
            CellValue::Number(n) => Cow::Owned(format_number(n)),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

/// Render a number in plain decimal form.
///
/// Integers keep their exact digits. Floats use the shortest round-trip
/// representation, positional within `[1e-6, 1e21)` and exponent form outside.
fn format_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            let magnitude = f.abs();
            if magnitude == 0.0 || (POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude) {
                return f.to_string();
            }
        }
    }
    n.to_string()
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Number(i.into())
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        // JSON has no NaN or infinity
        Number::from_f64(f).map_or(CellValue::Null, CellValue::Number)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(CellValue::from_json(&json!(null)), CellValue::Null);
        assert_eq!(CellValue::from_json(&json!("Hà Nội")), CellValue::from("Hà Nội"));
        assert_eq!(CellValue::from_json(&json!(1000)), CellValue::from(1000));
        assert_eq!(CellValue::from_json(&json!(true)), CellValue::from("true"));
    }

    #[test]
    fn test_nested_values_become_json_text() {
        assert_eq!(
            CellValue::from_json(&json!([1, 2])).display(),
            "[1,2]"
        );
        assert_eq!(
            CellValue::from_json(&json!({"a": "b"})).display(),
            r#"{"a":"b"}"#
        );
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(CellValue::from(1000).display(), "1000");
        assert_eq!(CellValue::from(-42).display(), "-42");
        assert_eq!(CellValue::from(1.5).display(), "1.5");
        assert_eq!(CellValue::from(0.1).display(), "0.1");
        assert_eq!(CellValue::from(1000.0).display(), "1000");
        assert_eq!(CellValue::from(0.0).display(), "0");
        assert_eq!(CellValue::from_json(&json!(u64::MAX)).display(), u64::MAX.to_string());
    }

    #[test]
    fn test_display_null_is_empty() {
        assert_eq!(CellValue::Null.display(), "");
        assert!(CellValue::Null.is_null());
        assert!(!CellValue::from("").is_null());
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(CellValue::from(f64::NAN), CellValue::Null);
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<CellValue> = serde_json::from_str(r#"[null, 7, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![CellValue::Null, CellValue::from(7), CellValue::from("x")]
        );
    }
}
