//! Export of tables as CSV files

mod csv;
mod file_name;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::Table;

pub use self::csv::{encode, encode_body, escape_cell, BOM};
pub use self::file_name::{base_name, suggested_file_name, DEFAULT_SOURCE_NAME};

/// A finished export: CSV payload plus the name to save it under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// Suggested file name, `<base name>_extracted.csv`
    pub file_name: String,
    /// CSV text with leading BOM
    pub payload: String,
    pub row_count: usize,
    pub column_count: usize,
}

impl CsvExport {
    /// Encode a table for a given source document name
    pub fn from_table(table: &Table, source_name: &str) -> Self {
        let export = Self {
            file_name: suggested_file_name(source_name),
            payload: encode(table),
            row_count: table.row_count(),
            column_count: table.column_count(),
        };
        tracing::info!(
            file = %export.file_name,
            rows = export.row_count,
            columns = export.column_count,
            "encoded CSV export"
        );
        export
    }

    /// UTF-8 bytes of the payload, BOM first
    pub fn bytes(&self) -> &[u8] {
        self.payload.as_bytes()
    }

    /// Write the payload to any writer
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        writer.write_all(self.bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write the payload to an explicit path
    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        fs::write(path, self.bytes())?;
        tracing::debug!(path = %path.display(), "wrote export file");
        Ok(())
    }

    /// Write the payload under its suggested name inside `dir`
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        self.write_to_path(&path)?;
        Ok(path)
    }
}
