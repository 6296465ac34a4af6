//! Resource snapshot with request tickets
//!
//! A screen owns one snapshot per remote resource it shows. Each fetch takes a
//! ticket from [`ResourceSnapshot::begin`]; only the response carrying the most
//! recently issued ticket is applied ("last request wins", not "last to
//! resolve wins").

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Identity of one issued request. Tickets are strictly increasing per snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot<T> {
    data: Option<T>,
    status: FetchStatus,
    error: Option<String>,
    issued: u64,
}

impl<T> Default for ResourceSnapshot<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: FetchStatus::Idle,
            error: None,
            issued: 0,
        }
    }
}

impl<T> ResourceSnapshot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch: moves to `Loading` and supersedes every earlier ticket.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a response. Returns `false` if the ticket was superseded and the
    /// response was discarded.
    pub fn resolve<E: Display>(&mut self, ticket: RequestTicket, result: Result<T, E>) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "discarding stale response #{} (latest #{})",
                ticket.0,
                self.issued
            );
            return false;
        }

        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = FetchStatus::Loaded;
                self.error = None;
            }
            Err(e) => {
                self.status = FetchStatus::Error;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Payload of a successful fetch; `None` unless the status is `Loaded`.
    pub fn data(&self) -> Option<&T> {
        match self.status {
            FetchStatus::Loaded => self.data.as_ref(),
            _ => None,
        }
    }

    /// Last successful payload regardless of the current status.
    pub fn last_payload(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// What a screen renders: the loaded payload, or the previous one while a
    /// re-fetch is in flight. Nothing after a failure.
    pub fn shown(&self) -> Option<&T> {
        match self.status {
            FetchStatus::Loaded | FetchStatus::Loading => self.data.as_ref(),
            _ => None,
        }
    }

    /// Loading with nothing to show yet.
    pub fn is_first_load(&self) -> bool {
        self.is_loading() && self.data.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        match self.status {
            FetchStatus::Error => self.error.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_idle_loading_loaded() {
        let mut snap: ResourceSnapshot<Vec<i32>> = ResourceSnapshot::new();
        assert_eq!(snap.status(), FetchStatus::Idle);

        let t = snap.begin();
        assert!(snap.is_loading());
        assert!(snap.resolve::<String>(t, Ok(vec![1, 2])));
        assert_eq!(snap.status(), FetchStatus::Loaded);
        assert_eq!(snap.data(), Some(&vec![1, 2]));
        assert_eq!(snap.error(), None);
    }

    #[test]
    fn error_clears_loading_and_keeps_last_payload() {
        let mut snap: ResourceSnapshot<u32> = ResourceSnapshot::new();
        let t = snap.begin();
        snap.resolve::<String>(t, Ok(7));

        let t = snap.begin();
        snap.resolve(t, Err("HTTP error: 500"));
        assert_eq!(snap.status(), FetchStatus::Error);
        assert!(!snap.is_loading());
        assert_eq!(snap.data(), None);
        assert_eq!(snap.last_payload(), Some(&7));
        assert_eq!(snap.error(), Some("HTTP error: 500"));
    }

    #[test]
    fn refetch_keeps_previous_payload_on_screen() {
        let mut snap: ResourceSnapshot<Vec<&str>> = ResourceSnapshot::new();
        let t = snap.begin();
        assert!(snap.is_first_load());
        assert_eq!(snap.shown(), None);
        snap.resolve::<String>(t, Ok(vec!["Widget"]));

        // invalidation re-fetch
        let t = snap.begin();
        assert!(snap.is_loading());
        assert!(!snap.is_first_load());
        assert_eq!(snap.data(), None);
        assert_eq!(snap.shown(), Some(&vec!["Widget"]));

        snap.resolve(t, Err("HTTP error: 503"));
        assert_eq!(snap.shown(), None);
        assert_eq!(snap.last_payload(), Some(&vec!["Widget"]));
    }

    #[test]
    fn late_stale_response_does_not_overwrite_newer() {
        let mut snap: ResourceSnapshot<&str> = ResourceSnapshot::new();
        let order_1 = snap.begin();
        let order_2 = snap.begin();

        // newer resolves first
        assert!(snap.resolve::<String>(order_2, Ok("order 2")));
        // older resolves afterwards and is discarded
        assert!(!snap.resolve::<String>(order_1, Ok("order 1")));
        assert_eq!(snap.data(), Some(&"order 2"));
    }

    #[test]
    fn stale_response_before_newer_is_also_discarded() {
        let mut snap: ResourceSnapshot<&str> = ResourceSnapshot::new();
        let old = snap.begin();
        let new = snap.begin();

        assert!(!snap.resolve::<String>(old, Err("boom".into())));
        assert!(snap.is_loading());
        assert!(snap.resolve::<String>(new, Ok("fresh")));
        assert_eq!(snap.data(), Some(&"fresh"));
    }
}
