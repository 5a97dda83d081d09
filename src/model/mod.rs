//! Data model for extracted tables

mod schema;
mod table;
mod value;

pub use schema::{derive_schema, Schema};
pub use table::{Row, Table};
pub use value::CellValue;
