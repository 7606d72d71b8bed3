//! Core error type for bootcap

use std::time::Duration;
use thiserror::Error;

/// Result type alias for capture operations
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Main error type for bootcap
#[derive(Error, Debug, Clone)]
pub enum CaptureError {
    /// The tool was invoked incorrectly
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// The terminal program could not be started
    #[error("Failed to spawn '{program}': {message}")]
    Spawn {
        program: String,
        message: String,
        context: Option<String>,
    },

    /// Talking to a running terminal program failed
    #[error("Terminal error: {message}")]
    Terminal {
        message: String,
        context: Option<String>,
    },

    /// The terminal program did not exit after the quit sequence
    #[error("Terminal program did not exit within {} ms", .timeout.as_millis())]
    ExitTimeout { timeout: Duration },

    /// IO errors
    #[error(
        "IO error: {message}{}",
        .path.as_deref().map(|p| format!(" ({p})")).unwrap_or_default()
    )]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },
}

impl CaptureError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "BOOTCAP_USAGE",
            Self::Spawn { .. } => "BOOTCAP_SPAWN",
            Self::Terminal { .. } => "BOOTCAP_TERMINAL",
            Self::ExitTimeout { .. } => "BOOTCAP_EXIT_TIMEOUT",
            Self::Io { .. } => "BOOTCAP_IO",
        }
    }

    /// Optional context about where the error occurred
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Spawn { context, .. } => context.as_deref(),
            Self::Terminal { context, .. } => context.as_deref(),
            Self::Io { context, .. } => context.as_deref(),
            Self::Usage { .. } | Self::ExitTimeout { .. } => None,
        }
    }

    /// Add context to errors that carry it
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let ctx = Some(context.into());
        match &mut self {
            Self::Spawn { context: c, .. } => *c = ctx,
            Self::Terminal { context: c, .. } => *c = ctx,
            Self::Io { context: c, .. } => *c = ctx,
            Self::Usage { .. } | Self::ExitTimeout { .. } => {}
        }
        self
    }
}
