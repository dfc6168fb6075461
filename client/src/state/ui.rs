//! Transient notification state (success and error notices).
//!
//! DESIGN
//! ======
//! Only one notice is visible at a time. Each carries a sequence number so a
//! pending auto-dismiss timer never clears a newer notice.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// How long a notice stays up before auto-dismissing.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A toast-style notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic id so a timer never dismisses a newer notice.
    pub seq: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

/// UI state shared across views.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
    next_seq: u64,
}

impl UiState {
    /// Replace the current notice; returns its sequence number.
    pub fn notify(&mut self, level: NoticeLevel, title: &str, text: &str) -> u64 {
        self.next_seq += 1;
        self.notice = Some(Notice {
            seq: self.next_seq,
            level,
            title: title.to_owned(),
            text: text.to_owned(),
        });
        self.next_seq
    }

    pub fn success(&mut self, title: &str, text: &str) -> u64 {
        self.notify(NoticeLevel::Success, title, text)
    }

    pub fn error(&mut self, text: &str) -> u64 {
        self.notify(NoticeLevel::Error, "Error", text)
    }

    /// Dismiss the notice only if it is still the one numbered `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
