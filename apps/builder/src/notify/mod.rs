//! Notification surface — advisory status messages for the user.
//!
//! Delivery is best-effort: the queue is bounded and drops the oldest
//! message when full. Nothing in the editor or renderer depends on it.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

pub const DEFAULT_TOAST_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub at: DateTime<Utc>,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
            at: Utc::now(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// In-memory toast queue drained by the UI.
pub struct ToastQueue {
    capacity: usize,
    queue: Mutex<VecDeque<Notification>>,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            queue: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns queued notifications oldest first and empties the queue.
    pub fn drain(&self) -> Vec<Notification> {
        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_CAPACITY)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, notification: Notification) {
        match notification.variant {
            Variant::Default => info!(
                title = %notification.title,
                "{}", notification.description
            ),
            Variant::Destructive => warn!(
                title = %notification.title,
                "{}", notification.description
            ),
        }

        let mut queue = self.queue.lock().unwrap_or_else(|e| e.into_inner());
        while queue.len() >= self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_in_order_and_empties() {
        let toasts = ToastQueue::default();
        toasts.notify(Notification::new("Generating PDF...", "wait"));
        toasts.notify(Notification::destructive("Error", "failed"));

        let drained = toasts.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "Generating PDF...");
        assert_eq!(drained[1].variant, Variant::Destructive);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let toasts = ToastQueue::new(2);
        for i in 0..3 {
            toasts.notify(Notification::new(format!("t{i}"), ""));
        }
        let titles: Vec<_> = toasts.drain().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["t1", "t2"]);
    }
}
