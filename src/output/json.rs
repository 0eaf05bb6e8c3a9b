//! JSON and YAML output renderers

use super::Renderer;
use crate::error::Result;
use crate::projection::Record;

/// Renderer for JSON output: a pretty-printed array of ordered objects
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, _columns: &[&str], records: &[Record]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}

/// Renderer for YAML output
pub struct YamlRenderer;

impl Renderer for YamlRenderer {
    fn render(&self, _columns: &[&str], records: &[Record]) -> Result<String> {
        Ok(serde_yml::to_string(records)?)
    }
}
