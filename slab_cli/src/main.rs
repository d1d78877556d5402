//! # Slab Designer CLI
//!
//! Command-line front end for `slab_core`: collects inputs from flags or a
//! JSON file, runs the design, and prints or saves the report.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for reports and JSON
    let filter = if cli.verbose {
        EnvFilter::new("slab_core=debug,slab=debug")
    } else {
        EnvFilter::new("slab_core=info,slab=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Design(args) => commands::design::execute(args),
        Commands::Bars(args) => commands::bars::execute(args),
    }
}
