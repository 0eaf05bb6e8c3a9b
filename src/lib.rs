//! aksfmt - Render managed Kubernetes cluster documents as tables
//!
//! A small query engine plus the fixed table layouts used to summarize
//! managed clusters and their upgrade profiles.
//!
//! # Features
//!
//! - Compile JMESPath-style path expressions once, evaluate them many times
//! - `{ key: expression }` projections that keep their declared column order
//! - Per-field type errors that never abort the rest of a row
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Summarize every cluster in a list
//! aksfmt list -f clusters.json
//!
//! # Summarize one cluster as JSON
//! aksfmt show -f cluster.json -o json
//!
//! # Show available upgrades from an upgrade profile read on stdin
//! cat profile.json | aksfmt get-versions
//!
//! # Ad-hoc projection over a list of clusters
//! aksfmt query -f clusters.json -q "{ n: name, v: properties.kubernetesVersion }"
//! ```

pub mod aks;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod input;
pub mod output;
pub mod projection;
pub mod query;

pub use aks::AksFormats;
pub use cli::{Cli, Command, OutputFormat};
pub use document::{Document, DocumentExt, Kind};
pub use error::{AksError, Result};
pub use format::{format_many, format_many_parallel, format_one};
pub use projection::{Field, ProjectionSpec, Record};
pub use query::{compile, compile_projection, CompileError, Compiler, Expression, TypeMismatch};
