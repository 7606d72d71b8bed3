//! Terminal program control
//!
//! The capture protocol only needs three things from the terminal program:
//! a way to inject control keystrokes, a bounded wait for it to exit, and
//! the text it printed. [`TerminalSession`] is that seam; [`TerminalLauncher`]
//! starts one. [`PicocomLauncher`] backs both with a pseudo-terminal.

mod control;
mod picocom;

pub use control::ControlSequence;
pub use picocom::{PicocomLauncher, PicocomSession};

use crate::config::CaptureConfig;
use crate::error::CaptureResult;

/// A running terminal program
#[cfg_attr(test, mockall::automock)]
pub trait TerminalSession {
    /// Write a control sequence to the program's input without waiting for a reply
    fn send_control_sequence(&mut self, sequence: ControlSequence) -> CaptureResult<()>;

    /// Wait for the program to exit, bounded by the configured exit timeout.
    ///
    /// Returns [`CaptureError::ExitTimeout`](crate::error::CaptureError::ExitTimeout)
    /// if the program is still running when the timeout expires.
    fn wait_for_exit(&mut self) -> CaptureResult<()>;

    /// Take all text the program has emitted so far
    fn read_buffered_output(&mut self) -> String;
}

/// Starts terminal sessions
#[cfg_attr(test, mockall::automock(type Session = MockTerminalSession;))]
pub trait TerminalLauncher {
    type Session: TerminalSession;

    /// Spawn the terminal program described by `config`
    fn launch(&self, config: &CaptureConfig) -> CaptureResult<Self::Session>;
}
