//! # mimedesc-gen
//!
//! Regenerates `src/data.rs` from the freedesktop.org shared-mime-info
//! database. Run from the crate root:
//!
//! ```text
//! cargo run --bin mimedesc-gen
//! cargo run --bin mimedesc-gen -- --input freedesktop.org.xml.in
//! ```
//!
//! Any failure is logged and exits with status 1; nothing is written in that
//! case.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    // RUST_LOG takes precedence over the flags.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("starting MIME description generator");
    match mimedesc::generator::run(&cli.config()) {
        Ok(summary) => {
            info!(
                entries = summary.entries,
                output = %summary.output.display(),
                "generator finished successfully"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
