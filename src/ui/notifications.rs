use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays visible.
const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

/// Oldest entries are dropped beyond this count.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    created: Instant,
}

/// Transient notification feed shown at the bottom of the dashboard.
#[derive(Debug, Clone)]
pub struct NotificationFeed {
    entries: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn push<S: Into<String>>(&mut self, level: NotificationLevel, message: S) {
        if self.entries.len() >= MAX_VISIBLE {
            self.entries.pop_front();
        }
        self.entries.push_back(Notification {
            level,
            message: message.into(),
            created: Instant::now(),
        });
    }

    pub fn info<S: Into<String>>(&mut self, message: S) {
        self.push(NotificationLevel::Info, message);
    }

    pub fn success<S: Into<String>>(&mut self, message: S) {
        self.push(NotificationLevel::Success, message);
    }

    pub fn warning<S: Into<String>>(&mut self, message: S) {
        self.push(NotificationLevel::Warning, message);
    }

    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.push(NotificationLevel::Error, message);
    }

    /// Drop entries older than the display TTL.
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.entries
            .retain(|n| now.duration_since(n.created) < NOTIFICATION_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}
