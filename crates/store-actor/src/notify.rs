//! Non-blocking user notifications.
//!
//! Failures that must not interrupt the caller (storage errors, empty exports) and
//! confirmations of user actions are published as [`Notice`]s on a broadcast channel.
//! A UI layer subscribes and renders them; nothing waits on delivery.

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// A single user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Cloneable publisher for [`Notice`]s.
#[derive(Debug, Clone)]
pub struct Notifier {
    sender: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.sender.subscribe()
    }

    /// Publishes a notice. Having no subscribers is not an error.
    pub fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => error!(title = %notice.title, message = %notice.message, "Notice"),
            _ => info!(title = %notice.title, message = %notice.message, "Notice"),
        }
        let _ = self.sender.send(notice);
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Success, title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Info, title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::new(NoticeLevel::Error, title, message));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notice_reaches_subscriber() {
        let notifier = Notifier::new(8);
        let mut rx = notifier.subscribe();

        notifier.error("Gagal", "penyimpanan penuh");

        let notice = rx.recv().await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Gagal");
    }

    #[test]
    fn test_notify_without_subscribers() {
        let notifier = Notifier::default();
        notifier.info("Info", "nobody listens");
    }
}
