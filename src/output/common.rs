//! Common utilities for output renderers

use crate::document::DocumentExt;
use crate::projection::Record;

/// Quote a CSV cell when it holds a separator, quote or line break
pub fn escape_csv(value: &str) -> String {
    let needs_quotes = value.chars().any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if !needs_quotes {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Column header for a field name: first character upper-cased
pub fn header_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cell text for one column of a record. Null, failed and missing fields
/// all render as an empty cell.
pub fn cell(record: &Record, column: &str) -> String {
    record
        .value(column)
        .map(|value| value.cell_text())
        .unwrap_or_default()
}
