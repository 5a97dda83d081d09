//! Parser layer: from service response text to rows

mod resolver;

use serde_json::Value;

use crate::error::{ExtractError, Result};

pub use self::resolver::{resolve_rows, resolve_rows_with_source, RowSource};

/// Parse the raw text returned by the extraction service.
///
/// A response with no text at all is reported as
/// [`ExtractError::EmptyResponse`] rather than as a JSON syntax error.
pub fn parse_response(text: &str) -> Result<Value> {
    let trimmed = text.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(ExtractError::EmptyResponse);
    }
    Ok(serde_json::from_str(trimmed)?)
}
