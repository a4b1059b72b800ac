//! Export control state
//!
//! The orchestrator owns an explicit phase value and a single notice slot
//! instead of ambient global state, keeping transitions observable and
//! tests deterministic. Success notices auto-dismiss after a fixed
//! interval; error notices persist until the next action replaces them.

use std::time::{Duration, Instant};

/// How long a success notice stays visible before auto-dismissing
pub const NOTICE_DISMISS_INTERVAL: Duration = Duration::from_secs(3);

/// Phase of the export control
///
/// `Idle → Validating → Serializing → Downloading → Idle`. Failures drop
/// straight back to `Idle` with an error notice posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportPhase {
    /// No export in flight
    Idle,
    /// Snapshot read, preconditions being checked
    Validating,
    /// CSV or archive bytes being produced
    Serializing,
    /// Blob handed to the download sink
    Downloading,
}

/// Kind of a posted notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Transient confirmation, auto-dismissed
    Success,
    /// Persistent until replaced by the next action
    Error,
}

/// The single user-visible message slot owned by the orchestrator
#[derive(Debug, Clone)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
    posted_at: Instant,
}

impl Notice {
    /// Posts a success notice stamped now
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            posted_at: Instant::now(),
        }
    }

    /// Posts an error notice stamped now
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            posted_at: Instant::now(),
        }
    }

    /// The notice text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The notice kind
    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Whether the notice is an error
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    /// Visibility at an arbitrary instant
    ///
    /// Success notices expire [`NOTICE_DISMISS_INTERVAL`] after posting;
    /// error notices never expire on their own.
    pub fn is_visible_at(&self, at: Instant) -> bool {
        match self.kind {
            NoticeKind::Error => true,
            NoticeKind::Success => {
                at.saturating_duration_since(self.posted_at) < NOTICE_DISMISS_INTERVAL
            }
        }
    }

    /// Visibility right now
    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}
