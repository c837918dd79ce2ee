//! Transient toast notifications

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Outcome a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A toast shown in the corner of the screen until it expires or is dismissed
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    /// Wall-clock time shown in the toast
    pub created_at: DateTime<Local>,
    shown_at: Instant,
}

impl Notification {
    /// How long a toast stays on screen
    pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Failure, title, description)
    }

    fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Local::now(),
            shown_at: Instant::now(),
        }
    }

    /// Check if the toast should be removed
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::DISPLAY_DURATION
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }

    #[cfg(test)]
    pub(crate) fn backdate(&mut self, by: Duration) {
        self.shown_at -= by;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_constructor() {
        let toast = Notification::success("Scheduled: Catch up", "Call successfully queued.");
        assert!(toast.is_success());
        assert_eq!(toast.title, "Scheduled: Catch up");
        assert_eq!(toast.description, "Call successfully queued.");
    }

    #[test]
    fn test_failure_constructor() {
        let toast = Notification::failure("Failed to initiate call", "insufficient balance");
        assert_eq!(toast.kind, NotificationKind::Failure);
        assert!(!toast.is_success());
    }

    #[test]
    fn test_fresh_toast_not_expired() {
        let toast = Notification::success("a", "b");
        assert!(!toast.is_expired());
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let mut toast = Notification::success("a", "b");
        toast.backdate(Notification::DISPLAY_DURATION);
        assert!(toast.is_expired());
    }
}
