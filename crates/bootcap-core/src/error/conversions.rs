//! From trait implementations for CaptureError conversions

use super::types::CaptureError;

impl From<std::io::Error> for CaptureError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

// Timeouts are not mapped here: only the session knows which wait timed out.
impl From<rexpect::error::Error> for CaptureError {
    fn from(error: rexpect::error::Error) -> Self {
        Self::terminal(error.to_string())
    }
}
