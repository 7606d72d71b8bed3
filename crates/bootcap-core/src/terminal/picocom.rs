//! picocom driven over a pseudo-terminal

use std::process::{self, Command};
use std::time::Duration;

use rexpect::session::{PtySession, spawn_command};
use tracing::debug;

use super::{ControlSequence, TerminalLauncher, TerminalSession};
use crate::config::CaptureConfig;
use crate::error::{CaptureError, CaptureResult};

/// Matches everything buffered so far in a single read
const REST_OF_BUFFER: &str = r"(?s).*";

/// Spawns the configured terminal program on a fresh pty
#[derive(Debug, Clone, Copy, Default)]
pub struct PicocomLauncher;

impl PicocomLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalLauncher for PicocomLauncher {
    type Session = PicocomSession;

    fn launch(&self, config: &CaptureConfig) -> CaptureResult<PicocomSession> {
        let terminal = &config.terminal;
        let spawn_error = |message: String| {
            CaptureError::spawn(&terminal.program, message)
                .with_context(format!("command line: {}", terminal.command_line()))
        };

        // The pty is forked before exec, so a missing program must be caught here
        let program = which::which(&terminal.program).map_err(|e| spawn_error(e.to_string()))?;
        let mut command = Command::new(&program);
        command.args(terminal.args());

        let timeout_ms = u64::try_from(config.exit_timeout.as_millis()).unwrap_or(u64::MAX);
        let parent = process::id();
        let spawned = spawn_command(command, Some(timeout_ms));
        if process::id() != parent {
            // exec failed in the forked child
            process::exit(127);
        }
        let inner = spawned.map_err(|e| spawn_error(e.to_string()))?;

        debug!(
            program = %program.display(),
            command = %terminal.command_line(),
            "terminal program started"
        );
        Ok(PicocomSession {
            inner,
            exit_timeout: config.exit_timeout,
            output: Vec::new(),
        })
    }
}

/// One running picocom process.
///
/// Dropping the session kills the process if it is still alive.
pub struct PicocomSession {
    inner: PtySession,
    exit_timeout: Duration,
    /// Raw bytes read from the pty
    output: Vec<u8>,
}

impl PicocomSession {
    /// rexpect hands back every byte read as one `char`
    fn push_bytes(&mut self, text: &str) {
        self.output.extend(text.chars().map(|c| c as u8));
    }

    /// Move anything already read from the pty into `output`
    fn drain(&mut self) -> CaptureResult<()> {
        let (_, rest) = self.inner.exp_regex(REST_OF_BUFFER)?;
        self.push_bytes(&rest);
        Ok(())
    }
}

impl TerminalSession for PicocomSession {
    fn send_control_sequence(&mut self, sequence: ControlSequence) -> CaptureResult<()> {
        self.inner.send(sequence.as_str())?;
        self.inner.flush()?;
        debug!(keys = sequence.keys(), "control sequence sent");
        Ok(())
    }

    fn wait_for_exit(&mut self) -> CaptureResult<()> {
        match self.inner.exp_eof() {
            Ok(text) => {
                self.push_bytes(&text);
                Ok(())
            }
            Err(rexpect::error::Error::Timeout { .. }) => {
                self.drain()?;
                Err(CaptureError::exit_timeout(self.exit_timeout))
            }
            Err(e) => {
                let _ = self.drain();
                Err(CaptureError::from(e).with_context("waiting for terminal program to exit"))
            }
        }
    }

    fn read_buffered_output(&mut self) -> String {
        if let Err(e) = self.drain() {
            debug!(error = %e, "could not drain terminal output");
        }
        String::from_utf8_lossy(&std::mem::take(&mut self.output)).into_owned()
    }
}
