//! Compiled-in defaults
//!
//! Grouped per concern. Values here are tied to the attached board and the
//! picocom key bindings and are not exposed as command-line options.

use std::time::Duration;

/// Terminal program invocation
pub mod terminal {
    /// Terminal program driven for every capture
    pub const PROGRAM: &str = "picocom";

    /// Serial device the board enumerates as
    pub const DEVICE_PATH: &str = "/dev/ttyACM0";

    /// Serial baud rate
    pub const BAUD_RATE: u32 = 115_200;

    /// Suppress picocom's banner and status chatter
    pub const QUIET: bool = true;
}

/// Capture session timings
pub mod capture {
    use super::*;

    /// Length of one sample (10 seconds)
    pub const SAMPLE_SECS: u64 = 10;

    /// Extra wait for the board to come back from reset (1 second)
    pub const RESET_LATENCY_SECS: u64 = 1;

    /// Interval between progress ticks (1 second)
    pub const TICK_SECS: u64 = 1;

    /// How long to wait for the terminal program to exit after the quit sequence (2 seconds)
    pub const EXIT_TIMEOUT_SECS: u64 = 2;

    /// Get the tick interval as Duration
    pub fn tick() -> Duration {
        Duration::from_secs(TICK_SECS)
    }

    /// Get the exit timeout as Duration
    pub fn exit_timeout() -> Duration {
        Duration::from_secs(EXIT_TIMEOUT_SECS)
    }
}
