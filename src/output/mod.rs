//! Output rendering module
//!
//! Turns records into table, CSV, JSON or YAML text

mod common;
mod csv;
mod json;
mod table;

use crate::cli::OutputFormat;
use crate::document::{Document, DocumentExt};
use crate::error::Result;
use crate::projection::Record;

pub use self::common::{escape_csv, header_label};
pub use self::csv::CsvRenderer;
pub use self::json::{JsonRenderer, YamlRenderer};
pub use self::table::TableRenderer;

/// Trait for output renderers
pub trait Renderer {
    /// Render records, using `columns` for column order and headers
    fn render(&self, columns: &[&str], records: &[Record]) -> Result<String>;
}

/// Pick the renderer for an output format
pub fn renderer(format: OutputFormat, no_header: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Table => Box::new(TableRenderer { no_header }),
        OutputFormat::Csv => Box::new(CsvRenderer { no_header }),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Yaml => Box::new(YamlRenderer),
    }
}

/// Render records in the given format
pub fn render_records(
    format: OutputFormat,
    no_header: bool,
    columns: &[&str],
    records: &[Record],
) -> Result<String> {
    renderer(format, no_header).render(columns, records)
}

/// Render a bare document (the result of a non-projection query)
///
/// Table and CSV show the value the way a single cell would.
pub fn render_document(format: OutputFormat, document: &Document) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Yaml => Ok(serde_yml::to_string(document)?),
        OutputFormat::Table | OutputFormat::Csv => Ok(document.cell_text()),
    }
}
