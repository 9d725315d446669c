//! Notification Module
//!
//! User-facing toast channel for navigation and auth events.

use tracing::{error, info, warn};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Sink for user-facing notifications
pub trait Notify: Send + Sync {
    fn notify(&self, severity: Severity, title: &str, message: &str);
}

/// Default sink that forwards toasts to the log output
pub struct LogNotifier;

impl Notify for LogNotifier {
    fn notify(&self, severity: Severity, title: &str, message: &str) {
        match severity {
            Severity::Error => error!("[{}] {}", title, message),
            Severity::Warning => warn!("[{}] {}", title, message),
            Severity::Info => info!("[{}] {}", title, message),
        }
    }
}
