use std::time::Instant;

use crate::notify::{Notification, NotificationState};
use crate::verdict::Verdict;
use crate::view_model::AppViewModel;

/// What the user submitted. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest {
    pub raw_input: String,
}

/// Lifecycle of one scan attempt. Replaced wholesale on every transition,
/// so the presentation layer never observes a stale verdict mixed with a
/// fresh loading flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScanSession {
    #[default]
    Idle,
    /// Exactly one outstanding network call. At most one `Pending` session
    /// exists at any time.
    Pending { request: ScanRequest },
    Succeeded { request: ScanRequest, verdict: Verdict },
    Failed { request: ScanRequest, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    session: ScanSession,
    notification: NotificationState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.dirty = true;
        }
    }

    pub(crate) fn replace_session(&mut self, session: ScanSession) {
        self.session = session;
        self.dirty = true;
    }

    pub(crate) fn notify(&mut self, message: String, now: Instant) {
        self.notification.notify(message, now);
        self.dirty = true;
    }

    pub(crate) fn expire_notification(&mut self, now: Instant) {
        if self.notification.expire(now) {
            self.dirty = true;
        }
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.current()
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True once since the last call, whenever something render-relevant
    /// changed. Lets the platform coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::project(self)
    }
}
