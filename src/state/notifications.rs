//! Transient user-facing notifications (toasts).

use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Lifetime multiplier relative to the configured base duration.
    fn ttl_factor(self) -> i32 {
        match self {
            Self::Info | Self::Success => 1,
            Self::Warning => 2,
            Self::Error => 3,
        }
    }
}

/// A notification to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            level,
            created_at: Utc::now(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, title, description)
    }

    /// Override the creation time.
    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Upper bound on the configured base lifetime.
const MAX_BASE_TTL: Duration = Duration::days(1);

/// Insertion-ordered queue of live notifications.
///
/// Owned by the store and handed out by `&mut` to whatever needs to notify;
/// expiry happens in [`NotificationCenter::prune_expired`], driven by ticks.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    queue: VecDeque<Notification>,
    base_ttl: Duration,
    capacity: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(std::time::Duration::from_secs(4), 4)
    }
}

impl NotificationCenter {
    pub fn new(base_ttl: std::time::Duration, capacity: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            base_ttl: Duration::from_std(base_ttl)
                .unwrap_or(MAX_BASE_TTL)
                .min(MAX_BASE_TTL),
            capacity: capacity.max(1),
        }
    }

    /// Fire-and-forget informational toast.
    pub fn notify(&mut self, title: impl Into<String>, description: impl Into<String>) -> Uuid {
        self.push(Notification::info(title, description))
    }

    /// Append a notification, evicting the oldest one when full.
    pub fn push(&mut self, notification: Notification) -> Uuid {
        let id = notification.id;
        tracing::debug!(
            level = ?notification.level,
            title = %notification.title,
            "notification queued"
        );
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(notification);
        id
    }

    /// When the given notification stops being displayed, `None` if the
    /// deadline is past the representable range.
    pub fn expires_at(&self, notification: &Notification) -> Option<DateTime<Utc>> {
        Self::deadline(self.base_ttl, notification)
    }

    /// Drop every notification whose lifetime has elapsed at `now`.
    pub fn prune_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.queue.len();
        let base_ttl = self.base_ttl;
        self.queue
            .retain(|n| Self::deadline(base_ttl, n).is_none_or(|expiry| expiry > now));
        before - self.queue.len()
    }

    fn deadline(base_ttl: Duration, notification: &Notification) -> Option<DateTime<Utc>> {
        base_ttl
            .checked_mul(notification.level.ttl_factor())
            .and_then(|ttl| notification.created_at.checked_add_signed(ttl))
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.queue.len();
        self.queue.retain(|n| n.id != id);
        before != self.queue.len()
    }

    /// Dismiss the most recent notification.
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.queue.pop_back()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn center() -> NotificationCenter {
        NotificationCenter::new(std::time::Duration::from_secs(4), 3)
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut center = center();
        center.notify("first", "a");
        center.push(Notification::success("second", "b"));
        center.push(Notification::error("third", "c"));

        let titles: Vec<&str> = center.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut center = center();
        for i in 0..5 {
            center.notify(format!("n{i}"), "");
        }
        let titles: Vec<&str> = center.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["n2", "n3", "n4"]);
    }

    #[test]
    fn test_expiry_depends_on_level() {
        let mut center = center();
        let t0 = Utc::now();
        center.push(Notification::info("info", "").at(t0));
        center.push(Notification::error("error", "").at(t0));

        assert_eq!(center.prune_expired(t0 + Duration::seconds(3)), 0);
        assert_eq!(center.prune_expired(t0 + Duration::seconds(5)), 1);
        assert_eq!(center.latest().map(|n| n.title.as_str()), Some("error"));
        assert_eq!(center.prune_expired(t0 + Duration::seconds(12)), 1);
        assert!(center.is_empty());
    }

    #[test]
    fn test_oversized_duration_is_clamped() {
        let mut center =
            NotificationCenter::new(std::time::Duration::from_secs(10_000_000_000_000), 4);
        let t0 = Utc::now();
        let id = center.push(Notification::error("error", "").at(t0));

        assert_eq!(center.prune_expired(t0 + Duration::hours(71)), 0);
        assert_eq!(center.prune_expired(t0 + Duration::hours(73)), 1);
        assert!(!center.dismiss(id));
    }

    #[test]
    fn test_unrepresentable_deadline_never_expires() {
        let mut center = center();
        let notification = Notification::warning("late", "").at(DateTime::<Utc>::MAX_UTC);

        assert_eq!(center.expires_at(&notification), None);
        center.push(notification);
        assert_eq!(center.prune_expired(Utc::now()), 0);
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut center = center();
        let keep = center.notify("keep", "");
        let drop = center.notify("drop", "");

        assert!(center.dismiss(drop));
        assert!(!center.dismiss(drop));
        assert_eq!(center.len(), 1);
        assert_eq!(center.latest().map(|n| n.id), Some(keep));
    }
}
