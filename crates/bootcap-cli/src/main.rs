//! bootcap command-line application
//!
//! Collects boot-log samples from a board on a serial console. Each sample
//! is one picocom session: the board is reset, its output recorded for a
//! fixed time, and picocom told to quit.
//!
//! ```bash
//! bootcap boot-logs.txt
//! ```

mod args;
mod commands;
mod console;
mod input;
mod signal_handler;

use std::process::ExitCode;

use clap::Parser;

use crate::args::Cli;
use crate::commands::{CaptureArgs, capture_execute};
use crate::console::CliConsole;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so they never split the progress line
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit here, before anything is spawned
    let cli = Cli::parse();

    match capture_execute(CaptureArgs { output: cli.output }).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            CliConsole::new().error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
