//! Capture and terminal configuration structs

use std::time::Duration;

use super::defaults;

/// How to start the terminal program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Program name or path
    pub program: String,
    /// Pass `-q` to the program
    pub quiet: bool,
    /// Serial baud rate
    pub baud_rate: u32,
    /// Serial device path
    pub device: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            program: defaults::terminal::PROGRAM.to_string(),
            quiet: defaults::terminal::QUIET,
            baud_rate: defaults::terminal::BAUD_RATE,
            device: defaults::terminal::DEVICE_PATH.to_string(),
        }
    }
}

impl TerminalConfig {
    /// Arguments passed to the program, in order
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(4);
        if self.quiet {
            args.push("-q".to_string());
        }
        args.push("-b".to_string());
        args.push(self.baud_rate.to_string());
        args.push(self.device.clone());
        args
    }

    /// Full command line, e.g. `picocom -q -b 115200 /dev/ttyACM0`
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Settings for one capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfig {
    pub terminal: TerminalConfig,
    /// Requested sample length in seconds
    pub sample_secs: u64,
    /// Extra seconds waited for the board to restart after the reset sequence
    pub reset_latency_secs: u64,
    /// Sleep between progress ticks
    pub tick: Duration,
    /// Bound on the wait for the terminal program to exit
    pub exit_timeout: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            terminal: TerminalConfig::default(),
            sample_secs: defaults::capture::SAMPLE_SECS,
            reset_latency_secs: defaults::capture::RESET_LATENCY_SECS,
            tick: defaults::capture::tick(),
            exit_timeout: defaults::capture::exit_timeout(),
        }
    }
}

impl CaptureConfig {
    /// Number of progress ticks in one session
    pub fn total_ticks(&self) -> u64 {
        self.sample_secs + self.reset_latency_secs
    }

    /// Use a different tick interval
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }
}
