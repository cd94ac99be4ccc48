//! Transient alert side effects.

use colored::Colorize;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("popup failed: {0}")]
    Popup(String),

    #[error("sound failed: {0}")]
    Sound(String),
}

/// Output device for transient alerts. Failures are reported but never
/// affect persisted state.
pub trait AlertSink: Send + Sync {
    fn show_popup(&self, title: &str, message: &str) -> Result<(), AlertError>;
    fn play_sound(&self) -> Result<(), AlertError>;
}

/// Alerts written to the terminal: a highlighted line for the popup and the
/// terminal bell for the sound.
#[derive(Debug, Default)]
pub struct TerminalAlertSink;

impl AlertSink for TerminalAlertSink {
    fn show_popup(&self, title: &str, message: &str) -> Result<(), AlertError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{} {}", title.red().bold(), message)
            .map_err(|e| AlertError::Popup(e.to_string()))
    }

    fn play_sound(&self) -> Result<(), AlertError> {
        let mut stderr = std::io::stderr().lock();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| AlertError::Sound(e.to_string()))
    }
}

/// Discards alerts.
#[derive(Debug, Default)]
pub struct SilentAlertSink;

impl AlertSink for SilentAlertSink {
    fn show_popup(&self, _title: &str, _message: &str) -> Result<(), AlertError> {
        Ok(())
    }

    fn play_sound(&self) -> Result<(), AlertError> {
        Ok(())
    }
}
