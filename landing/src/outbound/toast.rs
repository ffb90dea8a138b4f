//! Notification sink adapters.
//!
//! [`ToastQueue`] feeds a channel drained by whatever renders toasts;
//! [`TracingNotifier`] writes each toast to the log.

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{info, warn};

use crate::domain::ports::Notifier;
use crate::domain::{Notification, Severity};

/// Queue-backed sink. Notifications are delivered in the order pushed.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    sender: UnboundedSender<Notification>,
}

/// Receiving half of a [`ToastQueue`].
#[derive(Debug)]
pub struct ToastFeed {
    receiver: UnboundedReceiver<Notification>,
}

impl ToastQueue {
    /// Create a connected queue and feed.
    ///
    /// # Examples
    /// ```
    /// use landing::domain::Notification;
    /// use landing::domain::ports::Notifier;
    /// use landing::outbound::ToastQueue;
    ///
    /// let (queue, mut feed) = ToastQueue::channel();
    /// queue.notify(Notification::request_submitted());
    /// let toasts = feed.drain();
    /// assert_eq!(toasts.len(), 1);
    /// assert_eq!(toasts[0].title, "Request Submitted!");
    /// ```
    pub fn channel() -> (Self, ToastFeed) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, ToastFeed { receiver })
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        if self.sender.send(notification).is_err() {
            warn!("toast dropped: feed closed");
        }
    }
}

impl ToastFeed {
    /// Wait for the next toast. `None` once every queue handle is dropped.
    pub async fn next(&mut self) -> Option<Notification> {
        self.receiver.recv().await
    }

    /// Take every toast queued so far without waiting.
    pub fn drain(&mut self) -> Vec<Notification> {
        let mut toasts = Vec::new();
        while let Ok(toast) = self.receiver.try_recv() {
            toasts.push(toast);
        }
        toasts
    }
}

/// Sink that records each toast as a structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            description,
            severity,
        } = notification;
        match severity {
            Severity::Default => info!(%title, %description, "toast"),
            Severity::Destructive => warn!(%title, %description, "toast"),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn feed_preserves_push_order() {
        let (queue, mut feed) = ToastQueue::channel();
        queue.notify(Notification::login_failed());
        queue.clone().notify(Notification::login_accepted());
        let titles: Vec<String> = feed.drain().into_iter().map(|toast| toast.title).collect();
        assert_eq!(titles, ["Login Failed", "Login Successful"]);
        assert!(feed.drain().is_empty());
    }

    #[tokio::test]
    async fn feed_ends_when_queues_are_dropped() {
        let (queue, mut feed) = ToastQueue::channel();
        queue.notify(Notification::request_failed());
        drop(queue);
        assert_eq!(feed.next().await, Some(Notification::request_failed()));
        assert_eq!(feed.next().await, None);
    }

    #[test]
    fn closed_feed_does_not_panic() {
        let (queue, feed) = ToastQueue::channel();
        drop(feed);
        queue.notify(Notification::request_submitted());
    }
}
