//! Spreadsheet-compatible CSV encoding

use std::borrow::Cow;

use crate::model::{Row, Schema, Table};

/// Byte-order mark prepended so spreadsheet applications detect UTF-8
pub const BOM: char = '\u{feff}';

const DELIMITER: char = ',';
const QUOTE: char = '"';
const LINE_BREAK: char = '\n';

/// Quote a cell if it contains a quote, comma or newline.
///
/// Quoted cells have every internal quote doubled; all other cells pass
/// through unchanged.
pub fn escape_cell(text: &str) -> Cow<'_, str> {
    if !text.contains(&[QUOTE, DELIMITER, LINE_BREAK][..]) {
        return Cow::Borrowed(text);
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(QUOTE);
    for ch in text.chars() {
        if ch == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(ch);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

/// Encode a table as CSV text, without the BOM.
///
/// One header line, then one line per row in input order. Lines are joined
/// by `\n` with no trailing newline.
pub fn encode_body(table: &Table) -> String {
    let schema = table.schema();
    let mut out = String::new();
    push_line(&mut out, schema.names());
    for row in table.rows() {
        out.push(LINE_BREAK);
        push_row(&mut out, row, schema);
    }
    out
}

/// Encode a table as the full export payload, BOM included
pub fn encode(table: &Table) -> String {
    let body = encode_body(table);
    let mut payload = String::with_capacity(body.len() + BOM.len_utf8());
    payload.push(BOM);
    payload.push_str(&body);
    payload
}

fn push_row(out: &mut String, row: &Row, schema: &Schema) {
    let cells: Vec<Cow<'_, str>> = schema.names().map(|name| row.get(name).display()).collect();
    push_line(out, cells.iter().map(|cell| cell.as_ref()));
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(&escape_cell(cell));
    }
}
