//! Prompt input that can be raced against an interrupt
//!
//! Lines are read on a dedicated thread and handed over through a channel,
//! so waiting for the next line is an ordinary cancel-safe future.

use std::io::{self, BufRead, BufReader};
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

/// Source of prompt answers
pub struct LineReader {
    lines: mpsc::UnboundedReceiver<String>,
}

impl LineReader {
    /// Wrap an existing channel of lines
    pub fn new(lines: mpsc::UnboundedReceiver<String>) -> Self {
        Self { lines }
    }

    /// Read lines from `reader` on a background thread.
    ///
    /// The thread ends at end of input, on a read error, or once the
    /// `LineReader` is dropped and the next line arrives.
    pub fn spawn<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        thread::Builder::new()
            .name("bootcap-input".to_string())
            .spawn(move || {
                for line in reader.lines() {
                    match line {
                        Ok(line) => {
                            if tx.send(line).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            debug!(error = %e, "stopped reading input");
                            break;
                        }
                    }
                }
            })?;
        Ok(Self::new(rx))
    }

    /// Read lines from standard input
    pub fn stdin() -> io::Result<Self> {
        Self::spawn(BufReader::new(io::stdin()))
    }

    /// Next line, or `None` once input is closed
    pub async fn next_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }
}
