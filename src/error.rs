//! Error types for the extraction pipeline

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

/// Everything that can stop a result from becoming a CSV export
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The service returned no text at all
    #[error("service response is empty")]
    EmptyResponse,

    /// The service text is not valid JSON
    #[error("service response is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// No top-level array and no array-valued member
    #[error("no row sequence found in result (top-level value is {found})")]
    InvalidResultShape { found: &'static str },

    /// An element of the row sequence is not an object
    #[error("row {index} is not an object (found {found})")]
    InvalidRowShape { index: usize, found: &'static str },

    /// The row sequence resolved to zero rows
    #[error("result contains no rows")]
    EmptyTable,

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Whether the service answered but did not produce a usable table.
    ///
    /// These are user-retryable conditions ("try a clearer document"),
    /// never crashes.
    pub fn is_no_table(&self) -> bool {
        matches!(
            self,
            ExtractError::InvalidResultShape { .. }
                | ExtractError::InvalidRowShape { .. }
                | ExtractError::EmptyTable
        )
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractError::InvalidResultShape { .. } | ExtractError::InvalidRowShape { .. } => {
                "No table found: the service did not return a usable table."
            }
            ExtractError::EmptyTable => {
                "No table data found in this document. Please try again with a clearer file."
            }
            ExtractError::EmptyResponse | ExtractError::MalformedJson(_) => {
                "The extraction service returned an unreadable response. Please try again."
            }
            ExtractError::Io(_) => "The export file could not be written.",
        }
    }
}

/// Name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
