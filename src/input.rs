//! Reading input documents
//!
//! Documents come from a JSON file, or from stdin when the path is `-`.

use std::fs::File;
use std::io::{self, Read};

use log::debug;

use crate::config::defaults;
use crate::document::{Document, DocumentExt};
use crate::error::{AksError, Result};

/// Read and parse one JSON document from `path` (`-` for stdin)
pub fn read_document(path: &str) -> Result<Document> {
    let text = if path == defaults::INPUT {
        debug!("Reading document from stdin");
        io::read_to_string(io::stdin())?
    } else {
        debug!("Reading document from {}", path);
        let mut text = String::new();
        File::open(path)?.read_to_string(&mut text)?;
        text
    };
    parse_document(&text)
}

/// Parse JSON text into a document
pub fn parse_document(text: &str) -> Result<Document> {
    Ok(serde_json::from_str(text)?)
}

/// Unwrap a document that must be an array of documents
pub fn expect_array(document: Document) -> Result<Vec<Document>> {
    match document {
        Document::Array(items) => Ok(items),
        other => Err(AksError::Input(format!(
            "expected a JSON array, found {}",
            other.kind()
        ))),
    }
}
