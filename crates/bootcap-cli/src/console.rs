//! CLI console utilities

use colored::*;
use std::io::{self, Write};

/// Console output for the capture loop.
///
/// Everything goes to stdout and is flushed immediately so the prompt and
/// the progress ticks show up without a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliConsole;

impl CliConsole {
    /// Create a new CLI console
    pub const fn new() -> Self {
        Self
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{} {}", "ℹ".blue().bold(), message);
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Print a prompt and leave the cursor after it
    pub fn prompt(&self, message: &str) {
        print!("{} {}", "?".blue().bold(), message);
        flush();
    }

    /// Print one progress tick (`1..`), ending the line after the last one
    pub fn progress_tick(&self, elapsed: u64, last: bool) {
        print!("{}", format!("{elapsed}..").dimmed());
        if last {
            println!();
        }
        flush();
    }

    /// Print an empty line
    pub fn blank_line(&self) {
        println!();
    }
}

fn flush() {
    // A closed stdout is not worth aborting a capture for
    let _ = io::stdout().flush();
}
