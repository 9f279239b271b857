use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::Notification;

/// Pending toasts beyond this are dropped oldest first.
const MAX_QUEUED: usize = 3;

#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
    enabled: bool,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Notification::DEFAULT_DURATION)
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
            enabled: true,
        }
    }

    /// Disables toasts entirely.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn info(&mut self, message: impl Into<String>) {
        if !self.enabled {
            return;
        }
        let notification = Notification::new(message).with_duration(self.default_duration);
        self.queue.push_back(notification);
        while self.queue.len() > MAX_QUEUED {
            self.queue.pop_front();
        }
    }

    /// Advances the front toast. Returns whether the visible toast changed.
    pub fn tick(&mut self) -> bool {
        let Some(front) = self.queue.front_mut() else {
            return false;
        };
        front.mark_displayed();
        if !front.is_expired() {
            return false;
        }
        self.queue.pop_front();
        if let Some(next) = self.queue.front_mut() {
            next.mark_displayed();
        }
        true
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }
}
