use crate::core::{NoticeKind, Notifier};

/// Prints notices to stderr the way a toast would show them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        tracing::debug!("Notice {:?}: {}", kind, message);
        eprintln!("❌ {}", message);
    }
}

/// Routes notices into the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        tracing::warn!(notice = ?kind, "{}", message);
    }
}
