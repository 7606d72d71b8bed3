//! CLI argument definitions using clap
//!
//! - bootcap <OUTPUT>         # Capture samples until Ctrl+C, then write OUTPUT

use bootcap_core::parse_output_path;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bootcap")]
#[command(about = "Capture timed boot-log samples from a serial console through picocom")]
#[command(
    long_about = r#"Capture timed boot-log samples from a serial console through picocom

Each time Enter is pressed, picocom is started on /dev/ttyACM0 at 115200 baud,
the board is reset (C-a C-p) and its output is recorded for 10 seconds.
Press Ctrl+C at the prompt to stop; all samples are then written to OUTPUT,
separated by newlines, replacing any previous content.

Set RUST_LOG=debug for diagnostic logging on stderr."#
)]
#[command(version)]
pub struct Cli {
    /// File the collected samples are written to
    #[arg(value_name = "OUTPUT", value_parser = parse_output_path)]
    pub output: PathBuf,
}
