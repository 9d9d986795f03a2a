//! Console logger with a warning tally.
use std::sync::atomic::{AtomicUsize, Ordering};

use super::subscriber::STAGE_TARGET;

/// Structured logger used by the CLI commands.
///
/// Every method emits a [`tracing`] event; warnings are also counted so a
/// command can decide its exit status after reporting.
#[derive(Debug, Default)]
pub struct Logger {
    warnings: AtomicUsize,
}

impl Logger {
    /// Create a new logger with a zeroed warning tally.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            warnings: AtomicUsize::new(0),
        }
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        self.warnings.fetch_add(1, Ordering::Relaxed);
        tracing::warn!("{msg}");
    }

    /// Log a stage header (major section).
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (suppressed on console unless verbose).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Number of warnings logged so far.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }
}
