//! Export file naming

/// Name assumed for the source document when none is known
pub const DEFAULT_SOURCE_NAME: &str = "document.pdf";

const EXPORT_SUFFIX: &str = "_extracted.csv";

/// Base name of a source file: its final path component without the last
/// extension. A name starting with its only dot (`.pdf`) is kept whole.
pub fn base_name(source_name: &str) -> &str {
    let file_name = source_name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(source_name);
    match file_name.rfind('.') {
        Some(dot) if dot > 0 => &file_name[..dot],
        _ => file_name,
    }
}

/// Suggested export name: `<base name>_extracted.csv`
pub fn suggested_file_name(source_name: &str) -> String {
    let source_name = if source_name.trim().is_empty() {
        DEFAULT_SOURCE_NAME
    } else {
        source_name
    };
    format!("{}{}", base_name(source_name), EXPORT_SUFFIX)
}
