//! One capture session
//!
//! Spawn the terminal program, reset the board, let output accumulate for
//! the sample length, ask the program to quit and collect what it printed.
//! A program that does not quit in time still yields a sample.

use std::thread;

use tracing::{info, instrument, warn};

use crate::config::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};
use crate::sample::Sample;
use crate::terminal::{ControlSequence, TerminalLauncher, TerminalSession};

/// How the terminal program went away after the quit sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shutdown {
    /// Exited within the timeout
    Clean,
    /// Still running, or the wait failed; the sample may be truncated
    Abnormal { reason: String },
}

impl Shutdown {
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

/// Result of one capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub sample: Sample,
    pub shutdown: Shutdown,
}

/// Run one capture session.
///
/// `on_tick` is called with the elapsed tick count (starting at 1) after each
/// tick of the timed wait.
#[instrument(skip_all, fields(device = %config.terminal.device, ticks = config.total_ticks()))]
pub fn capture_sample<L, F>(
    launcher: &L,
    config: &CaptureConfig,
    mut on_tick: F,
) -> CaptureResult<Capture>
where
    L: TerminalLauncher,
    F: FnMut(u64),
{
    let mut session = launcher.launch(config)?;

    session.send_control_sequence(ControlSequence::Reset)?;

    for elapsed in 1..=config.total_ticks() {
        thread::sleep(config.tick);
        on_tick(elapsed);
    }

    session.send_control_sequence(ControlSequence::Quit)?;

    let shutdown = match session.wait_for_exit() {
        Ok(()) => Shutdown::Clean,
        Err(err @ CaptureError::ExitTimeout { .. }) => {
            warn!(error = %err, "terminal program did not exit after quit sequence");
            Shutdown::Abnormal {
                reason: err.to_string(),
            }
        }
        Err(err) => {
            warn!(error = %err, code = err.error_code(), "waiting for terminal program failed");
            Shutdown::Abnormal {
                reason: err.to_string(),
            }
        }
    };

    let sample = Sample::new(session.read_buffered_output());
    info!(bytes = sample.len(), clean = shutdown.is_clean(), "sample captured");

    Ok(Capture { sample, shutdown })
}
