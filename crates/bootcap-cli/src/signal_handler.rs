use colored::*;
use futures::stream::StreamExt;
use signal_hook::consts::SIGINT;
use signal_hook_tokio::Signals;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Application state for signal handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the go-ahead at the prompt
    WaitingForInput,
    /// A capture session is running
    Capturing,
}

/// What an interrupt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptOutcome {
    /// The prompt was abandoned
    Stopped,
    /// A capture was running and keeps running
    Ignored,
}

/// Signal handler for Ctrl+C.
///
/// An interrupt at the prompt cancels [`SignalHandler::interrupted`]; an
/// interrupt during a capture is reported and otherwise ignored.
pub struct SignalHandler {
    /// Flag to track if signal handling is active
    is_active: Arc<AtomicBool>,
    /// Handle to the signal handling task
    task_handle: Option<JoinHandle<()>>,
    /// Current application state
    app_state: Arc<Mutex<AppState>>,
    /// Cancelled once the user stops the loop
    interrupted: CancellationToken,
}

impl SignalHandler {
    /// Create a new signal handler
    pub fn new() -> Self {
        Self {
            is_active: Arc::new(AtomicBool::new(false)),
            task_handle: None,
            app_state: Arc::new(Mutex::new(AppState::WaitingForInput)),
            interrupted: CancellationToken::new(),
        }
    }

    /// Start listening for SIGINT. Must be called inside a tokio runtime.
    pub async fn start(&mut self) -> std::io::Result<()> {
        if self.is_active.load(Ordering::Relaxed) {
            return Ok(()); // Already started
        }

        let mut signals = Signals::new([SIGINT])?;
        let is_active = self.is_active.clone();
        let app_state = self.app_state.clone();
        let interrupted = self.interrupted.clone();

        is_active.store(true, Ordering::Relaxed);

        let handle = tokio::spawn(async move {
            while let Some(signal) = signals.next().await {
                if signal == SIGINT && is_active.load(Ordering::Relaxed) {
                    if handle_interrupt(&app_state, &interrupted) == InterruptOutcome::Ignored {
                        eprintln!(
                            "\n{} {}",
                            "⚠".yellow().bold(),
                            "Capture in progress, interrupt ignored. Stop at the next prompt.".yellow()
                        );
                    }
                }
            }
        });

        self.task_handle = Some(handle);
        Ok(())
    }

    /// Stop signal handling
    pub async fn stop(&mut self) {
        self.is_active.store(false, Ordering::Relaxed);

        if let Some(handle) = self.task_handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }

    /// Check if signal handling is active
    pub fn is_active(&self) -> bool {
        self.is_active.load(Ordering::Relaxed)
    }

    /// Set the application state for signal handling
    pub fn set_app_state(&self, state: AppState) {
        if let Ok(mut current_state) = self.app_state.lock() {
            *current_state = state;
        }
    }

    /// Get the current application state
    pub fn app_state(&self) -> AppState {
        self.app_state
            .lock()
            .map(|state| *state)
            .unwrap_or(AppState::WaitingForInput)
    }

    /// Token cancelled when the user stops the loop
    pub fn interrupted(&self) -> CancellationToken {
        self.interrupted.clone()
    }

    /// Apply an interrupt as if SIGINT had been received
    pub fn interrupt(&self) -> InterruptOutcome {
        handle_interrupt(&self.app_state, &self.interrupted)
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SignalHandler {
    fn drop(&mut self) {
        self.is_active.store(false, Ordering::Relaxed);
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}

fn handle_interrupt(app_state: &Mutex<AppState>, interrupted: &CancellationToken) -> InterruptOutcome {
    let state = app_state
        .lock()
        .map(|state| *state)
        .unwrap_or(AppState::WaitingForInput);

    match state {
        AppState::WaitingForInput => {
            interrupted.cancel();
            InterruptOutcome::Stopped
        }
        AppState::Capturing => InterruptOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_handler_creation() {
        let handler = SignalHandler::new();
        assert!(!handler.is_active());
        assert_eq!(handler.app_state(), AppState::WaitingForInput);
        assert!(!handler.interrupted().is_cancelled());
    }

    #[tokio::test]
    async fn test_signal_handler_start_stop() {
        let mut handler = SignalHandler::new();

        assert!(handler.start().await.is_ok());
        assert!(handler.is_active());

        handler.stop().await;
        assert!(!handler.is_active());
    }

    #[tokio::test]
    async fn test_interrupt_at_prompt_stops() {
        let handler = SignalHandler::new();
        let token = handler.interrupted();

        assert_eq!(handler.interrupt(), InterruptOutcome::Stopped);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_interrupt_during_capture_is_ignored() {
        let handler = SignalHandler::new();
        handler.set_app_state(AppState::Capturing);

        assert_eq!(handler.interrupt(), InterruptOutcome::Ignored);
        assert!(!handler.interrupted().is_cancelled());

        handler.set_app_state(AppState::WaitingForInput);
        assert_eq!(handler.interrupt(), InterruptOutcome::Stopped);
        assert!(handler.interrupted().is_cancelled());
    }
}
