//! Error types for bootcap
//!
//! Every fallible operation in the core crate returns [`CaptureResult`].
//! Errors carry a stable code for programmatic handling plus an optional
//! context string describing where the failure happened.

mod constructors;
mod conversions;
mod types;

pub use types::{CaptureError, CaptureResult};
