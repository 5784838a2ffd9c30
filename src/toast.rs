//! Single-slot toast notification state.
//!
//! At most one toast is shown at a time; showing another replaces the
//! content and restarts the auto-hide countdown. Rendering lives in
//! `ui::dialogs::render_toast`, which maps the state to a banner.

use std::time::{Duration, Instant};

/// How long a toast stays up without user action.
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    hide_at: Instant,
}

/// Owns the one toast slot and its auto-hide deadline.
#[derive(Default)]
pub struct ToastPresenter {
    current: Option<Toast>,
}

impl ToastPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, replacing whatever is currently up and restarting
    /// the auto-hide countdown.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.current = Some(Toast {
            message: message.into(),
            severity,
            hide_at: now + TOAST_DURATION,
        });
    }

    /// Hide immediately and clear the message.
    pub fn hide(&mut self) {
        self.current = None;
    }

    /// Advance the auto-hide deadline.
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = &self.current {
            if now >= toast.hide_at {
                self.current = None;
            }
        }
    }

    pub fn visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
