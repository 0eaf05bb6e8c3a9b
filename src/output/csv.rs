//! CSV output renderer

use super::common::{cell, escape_csv};
use super::Renderer;
use crate::error::Result;
use crate::projection::Record;

/// Renderer for CSV output
pub struct CsvRenderer {
    pub no_header: bool,
}

impl Renderer for CsvRenderer {
    fn render(&self, columns: &[&str], records: &[Record]) -> Result<String> {
        let mut lines = Vec::with_capacity(records.len() + 1);

        if !self.no_header {
            lines.push(
                columns
                    .iter()
                    .map(|c| escape_csv(c))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        for record in records {
            lines.push(
                columns
                    .iter()
                    .map(|c| escape_csv(&cell(record, c)))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        Ok(lines.join("\n"))
    }
}
