//! Locate the row sequence inside an extraction result

use serde_json::Value;

use crate::error::{json_kind, ExtractError, Result};
use crate::model::Row;

/// Where the row sequence was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSource {
    /// The result itself is an array
    TopLevel,
    /// The array sits under this key of a wrapper object
    Wrapped(String),
}

/// Resolve a parsed result into rows.
///
/// Accepts a bare array of objects or an object wrapping such an array under
/// any key (`{"data": [...]}`). Fails on the first element that is not an
/// object; no partial result is returned.
pub fn resolve_rows(value: &Value) -> Result<Vec<Row>> {
    resolve_rows_with_source(value).map(|(rows, _)| rows)
}

/// Like [`resolve_rows`], also reporting where the rows came from
pub fn resolve_rows_with_source(value: &Value) -> Result<(Vec<Row>, RowSource)> {
    let (elements, source) = locate_sequence(value)?;
    if let RowSource::Wrapped(key) = &source {
        tracing::debug!(key = %key, "unwrapped row sequence from wrapper object");
    }

    let rows = elements
        .iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::Object(object) => Ok(Row::from_object(object)),
            other => Err(ExtractError::InvalidRowShape {
                index,
                found: json_kind(other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(rows = rows.len(), "resolved extraction result");
    Ok((rows, source))
}

/// Find the array holding the rows.
///
/// When several members of a wrapper object are arrays, the first one in key
/// order wins. Nested objects are not searched.
fn locate_sequence(value: &Value) -> Result<(&[Value], RowSource)> {
    match value {
        Value::Array(elements) => Ok((elements.as_slice(), RowSource::TopLevel)),
        Value::Object(members) => members
            .iter()
            .find_map(|(key, member)| match member {
                Value::Array(elements) => {
                    Some((elements.as_slice(), RowSource::Wrapped(key.clone())))
                }
                _ => None,
            })
            .ok_or(ExtractError::InvalidResultShape { found: "object" }),
        other => Err(ExtractError::InvalidResultShape {
            found: json_kind(other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{derive_schema, CellValue};
    use serde_json::json;

    fn schema_names(rows: &[Row]) -> Vec<String> {
        derive_schema(rows).names().map(str::to_string).collect()
    }

    #[test]
    fn test_top_level_array() {
        let (rows, source) =
            resolve_rows_with_source(&json!([{"A": "1"}, {"A": "2"}])).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(source, RowSource::TopLevel);
        assert_eq!(schema_names(&rows), vec!["A"]);
        assert_eq!(rows[1].get("A"), &CellValue::from("2"));
    }

    #[test]
    fn test_wrapped_array() {
        let (rows, source) =
            resolve_rows_with_source(&json!({"table": [{"A": "1", "B": "2"}]})).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(source, RowSource::Wrapped("table".to_string()));
        assert_eq!(schema_names(&rows), vec!["A", "B"]);
    }

    #[test]
    fn test_object_without_array() {
        let err = resolve_rows(&json!({"A": "1"})).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidResultShape { found: "object" }));
    }

    #[test]
    fn test_non_object_row() {
        let err = resolve_rows(&json!([{"A": "1"}, "not-an-object"])).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidRowShape { index: 1, found: "string" }
        ));
    }

    #[test]
    fn test_first_array_member_wins() {
        let value = json!({
            "title": "Báo cáo",
            "rows": [{"A": "first"}],
            "more": [{"A": "second"}]
        });
        let (rows, source) = resolve_rows_with_source(&value).unwrap();
        assert_eq!(source, RowSource::Wrapped("rows".to_string()));
        assert_eq!(rows[0].get("A"), &CellValue::from("first"));
    }

    #[test]
    fn test_nested_objects_are_not_searched() {
        let err = resolve_rows(&json!({"outer": {"rows": [{"A": "1"}]}})).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidResultShape { .. }));
    }

    #[test]
    fn test_wrapped_array_elements_are_checked() {
        let err = resolve_rows(&json!({"data": [[1, 2]]})).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidRowShape { index: 0, found: "array" }
        ));
    }

    #[test]
    fn test_scalar_results() {
        for value in [json!(null), json!(3), json!("text"), json!(false)] {
            assert!(matches!(
                resolve_rows(&value),
                Err(ExtractError::InvalidResultShape { .. })
            ));
        }
    }

    #[test]
    fn test_empty_array_resolves_to_no_rows() {
        assert!(resolve_rows(&json!([])).unwrap().is_empty());
        assert!(resolve_rows(&json!({"data": []})).unwrap().is_empty());
    }
}
