//! Capture configuration
//!
//! bootcap has no configuration file: the terminal program, serial device
//! and timings are compiled in. [`CaptureConfig::default`] is what the CLI
//! uses; tests build their own configs to shorten the timed wait.

mod capture_config;
pub mod defaults;

pub use capture_config::{CaptureConfig, TerminalConfig};
