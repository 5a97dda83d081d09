//! End-to-end extraction pipeline: resolve, build table, encode

use serde_json::Value;

use crate::error::Result;
use crate::model::Table;
use crate::output::CsvExport;
use crate::parser::{parse_response, resolve_rows};

/// Build a table from a parsed extraction result.
///
/// Zero resolved rows is reported as `EmptyTable`, so an empty CSV is
/// never produced.
pub fn build_table(value: &Value) -> Result<Table> {
    let rows = resolve_rows(value)?;
    Table::new(rows)
}

/// Turn a parsed extraction result into a CSV export named after
/// `source_name`
pub fn extract_csv(value: &Value, source_name: &str) -> Result<CsvExport> {
    let table = build_table(value)?;
    Ok(CsvExport::from_table(&table, source_name))
}

/// Same as [`extract_csv`], starting from the raw service response text
pub fn extract_csv_from_text(text: &str, source_name: &str) -> Result<CsvExport> {
    let value = parse_response(text)?;
    extract_csv(&value, source_name)
}
