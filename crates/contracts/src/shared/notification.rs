//! Очередь уведомлений (toasts)
//!
//! Pure state of the notification queue. The frontend owns one instance for
//! the whole application, schedules a timer per posted entry and calls
//! [`NotificationQueue::dismiss`] when it fires. [`NotificationQueue::expire_due`]
//! performs the same expiry against an arbitrary clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visible lifetime of a notification.
pub const NOTIFICATION_TTL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// What a caller asks to show. Becomes a [`Notification`] once posted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl NotificationDraft {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::milliseconds(i64::from(NOTIFICATION_TTL_MS))
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// Active notifications, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification. Duplicates are kept as separate entries.
    pub fn post(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            severity: draft.severity,
            created_at: now,
        };

        match notification.severity {
            Severity::Destructive => log::warn!(
                "Toast: {} - {}",
                notification.title,
                notification.description
            ),
            Severity::Default => log::info!(
                "Toast: {} - {}",
                notification.title,
                notification.description
            ),
        }

        self.entries.push(notification.clone());
        notification
    }

    /// Remove the first entry equal to `notification`.
    /// Returns `false` (and does nothing) if it is no longer present.
    pub fn dismiss(&mut self, notification: &Notification) -> bool {
        match self.entries.iter().position(|n| n == notification) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn dismiss_id(&mut self, id: Uuid) -> bool {
        match self.entries.iter().position(|n| n.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drop every entry whose lifetime has elapsed at `now`; returns how many.
    pub fn expire_due(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| !n.is_expired(now));
        before - self.entries.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn posted_notification_expires_after_ttl() {
        let mut queue = NotificationQueue::new();
        let n = queue.post(NotificationDraft::info("Order created", "ok"), t0());
        assert_eq!(queue.active(), &[n.clone()]);

        assert_eq!(queue.expire_due(t0() + Duration::milliseconds(2999)), 0);
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.expire_due(t0() + Duration::milliseconds(3000)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn early_dismiss_then_timer_is_noop() {
        let mut queue = NotificationQueue::new();
        let n = queue.post(NotificationDraft::destructive("Error", "boom"), t0());

        assert!(queue.dismiss(&n));
        assert!(queue.is_empty());

        // the scheduled dismissal fires later and finds nothing
        assert!(!queue.dismiss(&n));
        assert_eq!(queue.expire_due(t0() + Duration::seconds(10)), 0);
    }

    #[test]
    fn duplicates_are_not_coalesced() {
        let mut queue = NotificationQueue::new();
        let draft = NotificationDraft::info("Saved", "same text");
        let first = queue.post(draft.clone(), t0());
        let second = queue.post(draft, t0() + Duration::milliseconds(1000));
        assert_eq!(queue.len(), 2);

        // first expires, second still visible
        queue.expire_due(t0() + Duration::milliseconds(3500));
        assert_eq!(queue.active(), &[second.clone()]);

        assert!(!queue.dismiss(&first));
        assert!(queue.dismiss_id(second.id));
        assert!(queue.is_empty());
    }

    #[test]
    fn closed_by_id_then_timer_sweep_keeps_newer_entries() {
        let mut queue = NotificationQueue::new();
        let first = queue.post(NotificationDraft::info("Payment recorded", "ok"), t0());
        let second = queue.post(
            NotificationDraft::destructive("Failed to create shipment", "HTTP error: 502"),
            t0() + Duration::milliseconds(1000),
        );

        assert!(queue.dismiss_id(first.id));

        // first entry's timer: nothing left to dismiss, the sweep spares the newer one
        assert!(!queue.dismiss(&first));
        assert_eq!(queue.expire_due(t0() + Duration::milliseconds(3000)), 0);
        assert_eq!(queue.active(), &[second.clone()]);

        // second entry's timer
        assert!(queue.dismiss(&second));
        assert_eq!(queue.expire_due(t0() + Duration::milliseconds(4000)), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn order_is_oldest_first() {
        let mut queue = NotificationQueue::new();
        let a = queue.post(NotificationDraft::info("a", ""), t0());
        let b = queue.post(NotificationDraft::info("b", ""), t0());
        let c = queue.post(NotificationDraft::info("c", ""), t0());
        queue.dismiss(&b);
        let titles: Vec<_> = queue.active().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
        assert!(a.id != c.id);
    }
}
