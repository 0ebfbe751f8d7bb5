use std::fmt;
use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "ok"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notification {
    message : String,
    kind    : NotificationKind,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind, shown_at: Instant) -> Self {
        Self {
            message: message.to_string(),
            kind,
            shown_at,
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new(message, NotificationKind::Success, Instant::now())
    }

    pub fn error(message: &str) -> Self {
        Self::new(message, NotificationKind::Error, Instant::now())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    pub fn expires_at(&self) -> Instant {
        self.shown_at + NOTIFICATION_TIMEOUT
    }

    pub fn visible_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
