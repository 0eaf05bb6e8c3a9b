//! aksfmt - Main entry point

use clap::Parser;
use log::{debug, info};

use aksfmt::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting aksfmt v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: output={}, no_header={}, command={:?}",
        cli.output, cli.no_header, cli.command
    );

    if let Err(e) = aksfmt::cli::run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("Completed successfully");
}
