//! Notification Sink
//!
//! Transient success/error/info messages for the user.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
            NotificationKind::Info => "toast-info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            NotificationKind::Success => "SUCCESS",
            NotificationKind::Error => "ERROR",
            NotificationKind::Info => "INFO",
        };
        f.write_str(tag)
    }
}

/// Anything that can show a message to the user
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Shared by every sink so messages always reach the console
pub fn log_notification(message: &str, kind: NotificationKind) {
    match kind {
        NotificationKind::Error => tracing::error!(target: "notify", "[{}] {}", kind, message),
        _ => tracing::info!(target: "notify", "[{}] {}", kind, message),
    }
}
