//! `recstruct` command-line entry point.
//!
//! Run with: `recstruct -i schema.xml -o records.h`
//!
//! Diagnostics go to stderr; set `RUST_LOG=recstruct=debug` for pipeline
//! detail.

use clap::Parser;
use recstruct::cli::{Cli, error_kind, error_message, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "generation failed");
            eprintln!("error[{}]: {}", error_kind(&err), error_message(&err));
            ExitCode::FAILURE
        }
    }
}
