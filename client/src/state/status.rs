//! Transient status banner shown after signup/unregister attempts.
//!
//! DESIGN
//! ======
//! Each `show` bumps `seq`. A hide timer remembers the `seq` it was armed for
//! and only hides that message, so a newer message always keeps its full
//! display window even when an older timer fires first.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

/// How long a status message stays visible.
pub const STATUS_HIDE_DELAY_MS: u32 = 5_000;

/// Severity tag controlling the banner styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class applied to the banner.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Text plus severity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }
}

/// Banner state owned by the activities page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusState {
    pub message: Option<StatusMessage>,
    pub visible: bool,
    pub seq: u64,
}

impl StatusState {
    /// Show `message` and return the sequence number a hide timer should use.
    pub fn show(&mut self, message: StatusMessage) -> u64 {
        self.seq += 1;
        self.message = Some(message);
        self.visible = true;
        self.seq
    }

    /// Hide the banner if it still shows the message armed as `seq`.
    /// Returns whether anything was hidden.
    pub fn hide(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// Banner text, empty when nothing has been shown yet.
    #[must_use]
    pub fn text(&self) -> String {
        self.message.as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }

    /// Class list for the banner element, e.g. `"error hidden"`.
    #[must_use]
    pub fn class_name(&self) -> String {
        let severity = self.message.as_ref().map(|m| m.severity.class());
        match (severity, self.visible) {
            (Some(class), true) => class.to_owned(),
            (Some(class), false) => format!("{class} hidden"),
            (None, _) => "hidden".to_owned(),
        }
    }
}
