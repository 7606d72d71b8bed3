//! CLI commands

pub mod capture;

pub use capture::{CaptureArgs, execute as capture_execute};
