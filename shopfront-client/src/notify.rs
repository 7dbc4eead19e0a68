//! Presentation seams
//!
//! Controllers never touch a widget toolkit. The toast popup, the new-orders
//! badge and the confirmation modal are behind these traits; the presentation
//! layer supplies the implementations, tests supply recording fakes.

use async_trait::async_trait;

/// Visual flavor of a toast message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// Toast widget contract
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, kind: ToastKind);
}

/// New-orders badge contract
///
/// `set_count` shows the number, `hide` clears it.
pub trait BadgeSink: Send + Sync {
    fn set_count(&self, count: u32);
    fn hide(&self);
}

/// Confirmation modal contract
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    /// Present the dialog and resolve to the user's choice
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Tracing-backed notifier for headless runs and examples
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn show(&self, message: &str, kind: ToastKind) {
        match kind {
            ToastKind::Error => tracing::warn!("toast: {message}"),
            _ => tracing::info!(kind = ?kind, "toast: {message}"),
        }
    }
}

impl BadgeSink for LogNotifier {
    fn set_count(&self, count: u32) {
        tracing::info!(count, "new orders pending");
    }

    fn hide(&self) {
        tracing::debug!("new-orders badge cleared");
    }
}
