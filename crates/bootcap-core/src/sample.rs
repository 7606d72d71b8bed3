//! Captured samples and their persistence

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CaptureError, CaptureResult};

/// Separator written between consecutive samples
pub const SAMPLE_SEPARATOR: &str = "\n";

/// Text captured by one session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sample(String);

impl Sample {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate the target output path given on the command line
pub fn parse_output_path(raw: &str) -> CaptureResult<PathBuf> {
    if raw.is_empty() {
        return Err(CaptureError::usage("Must specify target output file!"));
    }
    Ok(PathBuf::from(raw))
}

/// What [`SampleLog::persist`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persisted {
    /// The file was (over)written
    Written {
        count: usize,
        bytes: usize,
        path: PathBuf,
    },
    /// Nothing was captured, the file was left alone
    NoSamples,
}

/// Samples collected during one run, in capture order
#[derive(Debug, Clone, Default)]
pub struct SampleLog {
    samples: Vec<Sample>,
}

impl SampleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples joined by [`SAMPLE_SEPARATOR`], no trailing separator
    pub fn joined(&self) -> String {
        self.samples
            .iter()
            .map(Sample::as_str)
            .collect::<Vec<_>>()
            .join(SAMPLE_SEPARATOR)
    }

    /// Write the joined samples to `path`, replacing any existing file.
    ///
    /// An empty log does not touch the file system.
    pub fn persist(self, path: &Path) -> CaptureResult<Persisted> {
        if self.is_empty() {
            return Ok(Persisted::NoSamples);
        }

        let contents = self.joined();
        fs::write(path, &contents).map_err(|e| {
            CaptureError::io_with_path(e.to_string(), path.display().to_string())
                .with_context("writing samples")
        })?;

        info!(count = self.len(), bytes = contents.len(), path = %path.display(), "samples persisted");
        Ok(Persisted::Written {
            count: self.len(),
            bytes: contents.len(),
            path: path.to_path_buf(),
        })
    }
}
