//! Notification sink port.
//!
//! Controllers push toasts here and move on; no acknowledgement comes back.
//! Deduplication and display timing belong to the adapter.

use crate::domain::Notification;

/// Fire-and-forget sink for user-facing notifications.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Queue a notification for display.
    fn notify(&self, notification: Notification);
}
