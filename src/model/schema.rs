//! Column schema inferred from heterogeneous rows

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use super::table::Row;

/// Ordered, duplicate-free column names
#[derive(Debug, Clone, Default)]
pub struct Schema {
    columns: IndexSet<String, FxBuildHasher>,
}

impl Schema {
    /// Collect column names in first-seen order.
    ///
    /// Rows are walked in order and each row's keys in its own key order;
    /// a name is recorded only the first time it appears.
    pub fn derive(rows: &[Row]) -> Self {
        let mut columns: IndexSet<String, FxBuildHasher> = IndexSet::default();
        for row in rows {
            for key in row.keys() {
                if !columns.contains(key) {
                    columns.insert(key.to_string());
                }
            }
        }
        Self { columns }
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Check if a column is part of the schema
    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Get column index by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }
}

// IndexSet equality ignores order; schemas are equal only in the same order.
impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.columns.iter().eq(other.columns.iter())
    }
}

impl Eq for Schema {}

/// Derive the column schema of a row sequence
pub fn derive_schema(rows: &[Row]) -> Schema {
    Schema::derive(rows)
}
