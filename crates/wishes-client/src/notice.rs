//! User-facing notices shown after a submit settles.

use std::time::Duration;

/// How long a notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Whether the submit succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The wish was accepted.
    Success,
    /// Any failure. Validation and server errors are not distinguished.
    Failure,
}

/// Toast shown to the guest after submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    kind: NoticeKind,
    title: &'static str,
    description: &'static str,
}

impl Notice {
    /// Notice for an accepted wish.
    #[must_use]
    pub const fn thank_you() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Thank you!",
            description: "Your wishes have been recorded.",
        }
    }

    /// Notice for a failed submit.
    #[must_use]
    pub const fn failure() -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Error",
            description: "Failed to submit your wishes. Please try again.",
        }
    }

    /// Outcome category.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Short heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// Body text.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Display duration, shared by every notice.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        NOTICE_DURATION
    }
}
