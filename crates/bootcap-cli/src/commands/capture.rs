//! Sample capture loop
//!
//! Waits at the prompt, runs one capture session per go-ahead and writes
//! everything collected once the user stops the loop.

use std::path::{Path, PathBuf};

use anyhow::Context;
use bootcap_core::{
    CaptureConfig, Persisted, PicocomLauncher, SampleLog, TerminalLauncher, capture_sample,
};
use tracing::{debug, info};

use crate::console::CliConsole;
use crate::input::LineReader;
use crate::signal_handler::{AppState, SignalHandler};

/// Arguments for the capture command
pub struct CaptureArgs {
    pub output: PathBuf,
}

/// Run the capture loop against picocom and persist the result
pub async fn execute(args: CaptureArgs) -> anyhow::Result<()> {
    let console = CliConsole::new();

    let mut signals = SignalHandler::new();
    if let Err(e) = signals.start().await {
        console.warn(&format!("Failed to initialize signal handling: {}", e));
    }
    debug!(active = signals.is_active(), "signal handling ready");

    console.info(
        "Remember to keep stdout unbuffered when piping this tool (e.g. stdbuf -o0) so progress shows live",
    );

    let mut input = LineReader::stdin().context("starting input reader")?;
    let capturer = SampleCapturer::new(PicocomLauncher::new(), CaptureConfig::default(), console);
    let log = capturer.collect(&mut input, &signals).await?;

    signals.stop().await;
    save(log, &args.output, console)
}

/// Drives capture sessions from prompt answers
pub struct SampleCapturer<L> {
    launcher: L,
    config: CaptureConfig,
    console: CliConsole,
}

impl<L> SampleCapturer<L>
where
    L: TerminalLauncher + Clone + Send + 'static,
{
    pub fn new(launcher: L, config: CaptureConfig, console: CliConsole) -> Self {
        Self {
            launcher,
            config,
            console,
        }
    }

    /// Capture until the user interrupts at the prompt or input closes.
    ///
    /// Interrupts are only honoured while waiting at the prompt; a running
    /// capture always completes and its sample is kept.
    pub async fn collect(
        &self,
        input: &mut LineReader,
        signals: &SignalHandler,
    ) -> anyhow::Result<SampleLog> {
        let mut log = SampleLog::new();
        let interrupted = signals.interrupted();
        let prompt = format!(
            "Press a key to capture a {}-second sample: ",
            self.config.sample_secs
        );

        loop {
            signals.set_app_state(AppState::WaitingForInput);
            self.console.prompt(&prompt);

            let line = tokio::select! {
                biased;
                _ = interrupted.cancelled() => {
                    debug!("interrupted at prompt");
                    break;
                }
                line = input.next_line() => line,
            };
            if line.is_none() {
                debug!("input closed");
                break;
            }

            signals.set_app_state(AppState::Capturing);
            debug!(state = ?signals.app_state(), "starting capture");
            let capture = self.capture_one().await?;
            if !capture.shutdown.is_clean() {
                self.console.warn("Abnormal termination!");
            }
            log.push(capture.sample);
            info!(samples = log.len(), "sample added");
        }

        signals.set_app_state(AppState::WaitingForInput);
        self.console.blank_line();
        Ok(log)
    }

    async fn capture_one(&self) -> anyhow::Result<bootcap_core::Capture> {
        let launcher = self.launcher.clone();
        let config = self.config.clone();
        let console = self.console;
        let total = config.total_ticks();

        let capture = tokio::task::spawn_blocking(move || {
            capture_sample(&launcher, &config, |elapsed| {
                console.progress_tick(elapsed, elapsed == total)
            })
        })
        .await
        .context("capture task failed")?
        .with_context(|| format!("capturing from {}", self.config.terminal.command_line()))?;

        Ok(capture)
    }
}

/// Write the collected samples, or report that there are none
pub fn save(log: SampleLog, path: &Path, console: CliConsole) -> anyhow::Result<()> {
    if !log.is_empty() {
        console.blank_line();
        console.info(&format!("Will now save {} collected samples", log.len()));
    }

    let persisted = log
        .persist(path)
        .with_context(|| format!("saving samples to {}", path.display()))?;

    match persisted {
        Persisted::Written { count, bytes, path } => console.success(&format!(
            "Output has been saved to {} ({} samples, {} bytes)",
            path.display(),
            count,
            bytes
        )),
        Persisted::NoSamples => console.info("No samples collected, exiting."),
    }
    Ok(())
}
