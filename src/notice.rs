//! User-visible notices for unrecoverable update faults.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::warn;

/// Sink for short user-facing notices.
///
/// The host adapter decides how a notice is rendered (toast, status bar,
/// log line). Notices are transient; nothing here is persisted.
pub trait NoticeSink: Send + Sync {
    fn notify(&self, message: &str);
}

/// Emits notices as `warn` events. The default sink for hosts that have no
/// notice surface of their own.
#[derive(Debug, Default)]
pub struct TracingNotices;

impl NoticeSink for TracingNotices {
    fn notify(&self, message: &str) {
        warn!(notice = true, "{}", message);
    }
}

/// A notice with the time it was raised.
#[derive(Debug, Clone)]
pub struct Notice {
    pub at: DateTime<Utc>,
    pub message: String,
}

/// Collects notices in memory, for hosts that poll a queue and for tests.
#[derive(Debug, Default)]
pub struct MemoryNotices {
    entries: Mutex<Vec<Notice>>,
}

impl MemoryNotices {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take all pending notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.entries.lock())
    }

    /// Pending notice messages, oldest first, without draining.
    pub fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl NoticeSink for MemoryNotices {
    fn notify(&self, message: &str) {
        self.entries.lock().push(Notice {
            at: Utc::now(),
            message: message.to_string(),
        });
    }
}
