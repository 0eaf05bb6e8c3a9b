//! Argument types shared by the subcommands

use clap::{Args, ValueEnum};

use crate::config::defaults;

/// How records are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a header row
    Table,
    /// One comma-separated line per record
    Csv,
    /// Pretty-printed array of objects
    Json,
    /// Sequence of mappings
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Where to read the input document from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file to read ("-" reads stdin)
    #[arg(short, long, default_value = defaults::INPUT)]
    pub file: String,
}
