//! Table output renderer

use comfy_table::{presets::NOTHING, Table};

use super::common::{cell, header_label};
use super::Renderer;
use crate::error::Result;
use crate::projection::Record;

/// Renderer for ASCII table output
pub struct TableRenderer {
    pub no_header: bool,
}

impl Renderer for TableRenderer {
    fn render(&self, columns: &[&str], records: &[Record]) -> Result<String> {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !self.no_header {
            table.set_header(columns.iter().map(|c| header_label(c)));
        }

        for record in records {
            table.add_row(columns.iter().map(|c| cell(record, c)));
        }

        Ok(table.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionSpec;
    use serde_json::json;

    fn records() -> (ProjectionSpec, Vec<Record>) {
        let spec = ProjectionSpec::compile("{ name: name, location: location, fqdn: fqdn }").unwrap();
        let records = vec![
            spec.apply(&json!({"name": "c1", "location": "eastus", "fqdn": "c1.example.com"})),
            spec.apply(&json!({"name": "c2", "location": "westus"})),
        ];
        (spec, records)
    }

    #[test]
    fn test_table_with_data() {
        let (spec, records) = records();
        let output = TableRenderer { no_header: false }
            .render(&spec.field_names(), &records)
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Name"));
        assert!(lines[0].contains("Location"));
        assert!(lines[0].contains("Fqdn"));
        assert!(lines[1].contains("c1.example.com"));
        assert!(lines[2].contains("westus"));
    }

    #[test]
    fn test_table_no_header() {
        let (spec, records) = records();
        let output = TableRenderer { no_header: true }
            .render(&spec.field_names(), &records)
            .unwrap();
        assert_eq!(output.lines().count(), 2);
        assert!(!output.contains("Name"));
    }

    #[test]
    fn test_table_empty() {
        let output = TableRenderer { no_header: false }
            .render(&["name"], &[])
            .unwrap();
        assert!(output.contains("Name"));
    }
}
