//! Table formatting entry points
//!
//! Apply a projection to one document or to a batch. Single results are
//! still returned as a one-element vector so both paths share the same
//! rendering code.

use rayon::prelude::*;

use crate::document::Document;
use crate::projection::{ProjectionSpec, Record};

/// Format a single document as a one-row result
pub fn format_one(spec: &ProjectionSpec, document: &Document) -> Vec<Record> {
    vec![spec.apply(document)]
}

/// Format a batch of documents, one record per document, in input order
pub fn format_many(spec: &ProjectionSpec, documents: &[Document]) -> Vec<Record> {
    documents.iter().map(|d| spec.apply(d)).collect()
}

/// Same as [`format_many`], evaluating documents on the rayon thread pool
///
/// Output order still matches input order.
pub fn format_many_parallel(spec: &ProjectionSpec, documents: &[Document]) -> Vec<Record> {
    documents.par_iter().map(|d| spec.apply(d)).collect()
}
