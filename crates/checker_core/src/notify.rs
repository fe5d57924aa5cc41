use std::time::{Duration, Instant};

/// How long a notification stays visible, measured from the most recent
/// `notify` call.
pub const NOTIFICATION_WINDOW: Duration = Duration::from_millis(2200);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub expires_at: Instant,
}

/// Single-slot transient advisory channel, independent of the scan session.
///
/// A new notification replaces the visible one and restarts the expiry
/// window, so overlapping notifications never clear a successor early.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn notify(&mut self, message: impl Into<String>, now: Instant) {
        self.current = Some(Notification {
            message: message.into(),
            expires_at: now + NOTIFICATION_WINDOW,
        });
    }

    /// Drops the notification once its window has elapsed.
    /// Returns `true` when something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(notification) if now >= notification.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
