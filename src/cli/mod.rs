//! CLI argument parsing

mod commands;
mod common;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use commands::{execute, run};
pub use common::{InputArgs, OutputFormat};

/// Managed Kubernetes cluster table formatter
#[derive(Parser, Debug)]
#[command(name = "aksfmt")]
#[command(version)]
#[command(about = "Render managed Kubernetes cluster documents as tables", long_about = None)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, env = "AKSFMT_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit header lines from table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize a JSON array of managed clusters, one row per cluster
    List(InputArgs),

    /// Summarize a single managed cluster
    Show(InputArgs),

    /// Show current and available Kubernetes versions from an upgrade profile
    GetVersions(InputArgs),

    /// Evaluate an ad-hoc expression or { key: expression } projection
    Query(QueryArgs),
}

#[derive(clap::Args, Debug)]
pub struct QueryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Expression to evaluate against the input document
    #[arg(short, long)]
    pub query: String,
}
