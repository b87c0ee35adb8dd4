//! User-visible notifications.
//!
//! Every reported outcome (success, rejection, failure) becomes one
//! dismissable entry carrying a human-readable message.

use std::collections::VecDeque;

/// Maximum notifications kept before the oldest is dropped.
const MAX_ACTIVE_NOTIFICATIONS: usize = 20;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Bounded queue of undismissed notifications.
#[derive(Debug)]
pub struct NotificationCenter {
    next_id: u64,
    active: VecDeque<Notification>,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self {
            next_id: 1,
            active: VecDeque::new(),
        }
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a notification and returns its id. Ids are never reused.
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.active.push_back(Notification {
            id,
            level,
            message: message.into(),
        });
        while self.active.len() > MAX_ACTIVE_NOTIFICATIONS {
            self.active.pop_front();
        }
        id
    }

    /// Removes one notification. Returns `false` for unknown ids.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.active.len();
        self.active.retain(|notification| notification.id != id);
        self.active.len() != before
    }

    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.active.back()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{NotificationCenter, NotificationLevel, MAX_ACTIVE_NOTIFICATIONS};

    #[test]
    fn dismiss_removes_only_matching_id() {
        let mut center = NotificationCenter::new();
        let first = center.push(NotificationLevel::Info, "one");
        let second = center.push(NotificationLevel::Error, "two");
        assert!(second > first);

        assert!(center.dismiss(first));
        assert!(!center.dismiss(first));
        assert_eq!(center.len(), 1);
        assert_eq!(center.latest().map(|n| n.id), Some(second));
    }

    #[test]
    fn overflow_drops_oldest() {
        let mut center = NotificationCenter::new();
        for i in 0..(MAX_ACTIVE_NOTIFICATIONS + 3) {
            center.push(NotificationLevel::Info, format!("n{i}"));
        }
        assert_eq!(center.len(), MAX_ACTIVE_NOTIFICATIONS);
        assert_eq!(center.active().next().map(|n| n.message.as_str()), Some("n3"));
    }
}
