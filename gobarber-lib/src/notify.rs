//! User-facing notifications.

use std::sync::Mutex;
use std::time::Duration;

/// Default duration for notifications.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(4);

/// Visual kind of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A notification (toast).
///
/// Notifications display temporary messages to the user. Use the
/// convenience constructors for common cases.
///
/// # Example
///
/// ```
/// use gobarber_lib::notify::Notification;
///
/// let notification = Notification::success("Registration completed!")
///     .with_description("You may now sign in.");
/// assert_eq!(notification.description, "You may now sign in.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Visual kind.
    pub kind: NotificationKind,
    /// Short headline.
    pub title: String,
    /// Secondary text. May be empty.
    pub description: String,
    /// How long to show the notification.
    pub duration: Duration,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: String::new(),
            duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }

    /// Create an info notification.
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title)
    }

    /// Create a success notification.
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title)
    }

    /// Create a warning notification.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title)
    }

    /// Create an error notification.
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title)
    }

    /// Set the secondary text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set a custom duration for this notification.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Notification {
    fn from(title: String) -> Self {
        Notification::info(title)
    }
}

impl From<&str> for Notification {
    fn from(title: &str) -> Self {
        Notification::info(title)
    }
}

/// Displays notifications to the user.
///
/// Fire-and-forget: display and dismissal are the implementor's concern.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// A notifier that records notifications in memory.
///
/// Useful for hosts that render on their own schedule, and for tests.
#[derive(Debug, Default)]
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far.
    pub fn entries(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Remove and return everything notified so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|mut entries| std::mem::take(&mut *entries))
            .unwrap_or_default()
    }
}

impl Notifier for NotificationLog {
    fn notify(&self, notification: Notification) {
        log::debug!("notification: {:?} {}", notification.kind, notification.title);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let n = Notification::error("Authentication error");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.description, "");
        assert_eq!(n.duration, DEFAULT_NOTIFICATION_DURATION);

        let n = Notification::from("hello").with_duration(Duration::from_secs(1));
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.duration, Duration::from_secs(1));
    }

    #[test]
    fn test_log_drain() {
        let log = NotificationLog::new();
        log.notify(Notification::success("a"));
        log.notify(Notification::warning("b"));

        assert_eq!(log.entries().len(), 2);
        let drained = log.drain();
        assert_eq!(drained[1].title, "b");
        assert!(log.entries().is_empty());
    }
}
