//! bootcap core library
//!
//! Drives a serial terminal program through timed capture sessions and
//! persists the collected samples. The interactive loop lives in the
//! `bootcap-cli` crate.

pub mod capture;
pub mod config;
pub mod error;
pub mod sample;
pub mod terminal;

// Re-export commonly used types
pub use capture::{Capture, Shutdown, capture_sample};
pub use config::{CaptureConfig, TerminalConfig};
pub use error::{CaptureError, CaptureResult};
pub use sample::{Persisted, Sample, SampleLog, parse_output_path};
pub use terminal::{ControlSequence, PicocomLauncher, TerminalLauncher, TerminalSession};
