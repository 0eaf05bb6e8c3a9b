//! Table layouts for managed Kubernetes clusters
//!
//! Both projections are compiled once in [`AksFormats::new`] and reused for
//! every document.

use log::debug;

use crate::config::projections;
use crate::document::Document;
use crate::format::{format_many, format_one};
use crate::projection::{ProjectionSpec, Record};
use crate::query::{CompileError, Compiler};

/// The compiled summary and upgrade-versions projections
#[derive(Debug, Clone)]
pub struct AksFormats {
    summary: ProjectionSpec,
    upgrade_versions: ProjectionSpec,
}

impl AksFormats {
    /// Compile both projections with the builtin function table
    pub fn new() -> Result<Self, CompileError> {
        Self::with_compiler(&Compiler::new())
    }

    pub fn with_compiler(compiler: &Compiler) -> Result<Self, CompileError> {
        let formats = Self {
            summary: compiler.compile_projection(projections::SUMMARY)?,
            upgrade_versions: compiler.compile_projection(projections::UPGRADE_VERSIONS)?,
        };
        debug!(
            "Compiled projections: summary={:?}, upgrade_versions={:?}",
            formats.summary.field_names(),
            formats.upgrade_versions.field_names()
        );
        Ok(formats)
    }

    /// `name, location, resourceGroup, kubernetesVersion, provisioningState, fqdn`
    pub fn summary(&self) -> &ProjectionSpec {
        &self.summary
    }

    /// `name, resourceGroup, masterVersion, masterUpgrades, nodeVersion, nodeUpgrades`
    pub fn upgrade_versions(&self) -> &ProjectionSpec {
        &self.upgrade_versions
    }

    /// Summary rows for a list of managed clusters
    pub fn list_table(&self, clusters: &[Document]) -> Vec<Record> {
        format_many(&self.summary, clusters)
    }

    /// Summary row for a single managed cluster
    pub fn show_table(&self, cluster: &Document) -> Vec<Record> {
        format_one(&self.summary, cluster)
    }

    /// Version row for an upgrade profile
    pub fn get_versions_table(&self, profile: &Document) -> Vec<Record> {
        format_one(&self.upgrade_versions, profile)
    }
}
