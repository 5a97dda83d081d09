//! extractcsv - Tabular export for document-extraction results
//!
//! Normalizes the JSON returned by a table-extraction service into rows,
//! infers a stable column schema and encodes the table as UTF-8 CSV that
//! spreadsheet applications open correctly.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod pipeline;

pub use config::Config;
pub use error::{ExtractError, Result};
pub use model::{derive_schema, CellValue, Row, Schema, Table};
pub use output::CsvExport;
pub use parser::{parse_response, resolve_rows};
pub use pipeline::{build_table, extract_csv, extract_csv_from_text};
