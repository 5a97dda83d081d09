//! Row and Table data structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::schema::Schema;
use super::value::CellValue;
use crate::error::{ExtractError, Result};

static ABSENT: CellValue = CellValue::Null;

/// One extracted record, keyed by column name in source key order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: IndexMap<String, CellValue>,
}

impl Row {
    /// Build a row from a JSON object, keeping its key order
    pub fn from_object(object: &Map<String, Value>) -> Self {
        object
            .iter()
            .map(|(key, value)| (key.clone(), CellValue::from_json(value)))
            .collect()
    }

    /// Value for a column; missing keys read as absent
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&ABSENT)
    }

    /// Column names in this row's key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Rows plus the schema derived from them.
///
/// A table always holds at least one row and is never mutated after
/// construction.
#[derive(Debug, Clone)]
pub struct Table {
    schema: Schema,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, deriving its schema.
    ///
    /// Fails with [`ExtractError::EmptyTable`] when `rows` is empty.
    pub fn new(rows: Vec<Row>) -> Result<Self> {
        if rows.is_empty() {
            return Err(ExtractError::EmptyTable);
        }
        let schema = Schema::derive(&rows);
        Ok(Self { schema, rows })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Cell at a row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.rows.get(row).map(|r| r.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_from_object_keeps_key_order() {
        let row = Row::from_object(&object(json!({"Z": 1, "A": "x", "M": null})));
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["Z", "A", "M"]);
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_missing_and_null_read_as_absent() {
        let row = Row::from_object(&object(json!({"A": null})));
        assert!(row.get("A").is_null());
        assert!(row.get("B").is_null());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(Table::new(Vec::new()), Err(ExtractError::EmptyTable)));
    }

    #[test]
    fn test_table_cells() {
        let rows = vec![
            Row::from_object(&object(json!({"A": "1"}))),
            Row::from_object(&object(json!({"B": 2}))),
        ];
        let table = Table::new(rows).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.cell(0, "A"), Some(&CellValue::from("1")));
        assert_eq!(table.cell(0, "B"), Some(&CellValue::Null));
        assert_eq!(table.cell(1, "B"), Some(&CellValue::from(2)));
        assert_eq!(table.cell(2, "A"), None);
    }

    #[test]
    fn test_every_schema_column_resolves() {
        let rows = vec![
            Row::from_object(&object(json!({"A": "1", "B": null}))),
            Row::from_object(&object(json!({"C": 3.5}))),
        ];
        let table = Table::new(rows).unwrap();
        for row in table.rows() {
            for column in table.schema().names() {
                let _ = row.get(column).display();
            }
        }
    }

    #[test]
    fn test_row_deserializes_from_scalar_object() {
        let row: Row = serde_json::from_str(r#"{"Tên": "An", "Số": 5, "X": null}"#).unwrap();
        assert_eq!(row.get("Tên"), &CellValue::from("An"));
        assert_eq!(row.get("Số"), &CellValue::from(5));
        assert!(row.get("X").is_null());
    }
}
