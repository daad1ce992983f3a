//! Notification Store
//!
//! Reducer-style store over the notification list. The unread counter is
//! recomputed from the list on every mutation rather than maintained
//! incrementally, so it can never drift or go negative no matter what
//! sequence of actions arrives - a duplicate mark-read is simply a no-op.

use std::sync::{Mutex, MutexGuard};

use session::SessionEventSink;

use crate::model::{Notification, NotificationId};

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order, newest first.
    notifications: Vec<Notification>,
    unread_count: usize,
    loading: bool,
    error: Option<String>,
}

impl Inner {
    fn recount(&mut self) {
        self.unread_count = self.notifications.iter().filter(|n| !n.read).count();
    }
}

/// Read view of the store.
#[derive(Debug, Clone, Default)]
pub struct NotificationSnapshot {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

/// The notification read-state tracker.
#[derive(Debug, Default)]
pub struct NotificationStore {
    inner: Mutex<Inner>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Current read view.
    pub fn snapshot(&self) -> NotificationSnapshot {
        let inner = self.lock();
        NotificationSnapshot {
            notifications: inner.notifications.clone(),
            unread_count: inner.unread_count,
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }

    pub fn unread_count(&self) -> usize {
        self.lock().unread_count
    }

    /// A bulk load has started.
    pub fn begin_load(&self) {
        self.lock().loading = true;
    }

    /// Replace the list wholesale. This is a full resync, not a merge.
    pub fn load_succeeded(&self, notifications: Vec<Notification>) {
        let mut inner = self.lock();
        inner.notifications = notifications;
        inner.recount();
        inner.loading = false;
        inner.error = None;
    }

    /// A load failed: record the error, keep the last-known-good list so a
    /// transient failure never flashes an empty panel.
    pub fn load_failed(&self, message: impl Into<String>) {
        let mut inner = self.lock();
        inner.loading = false;
        inner.error = Some(message.into());
    }

    /// Flag one notification as read. Unknown ids and already-read entries
    /// leave the state unchanged.
    pub fn mark_read(&self, id: NotificationId) {
        let mut inner = self.lock();
        match inner.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => notification.read = true,
            None => {
                tracing::debug!(%id, "mark-read for unknown notification ignored");
                return;
            }
        }
        inner.recount();
    }

    /// Flag every notification as read.
    pub fn mark_all_read(&self) {
        let mut inner = self.lock();
        for notification in &mut inner.notifications {
            notification.read = true;
        }
        inner.recount();
    }

    /// Prepend a freshly arrived notification. New arrivals are unread by
    /// construction.
    pub fn push(&self, notification: Notification) {
        let mut inner = self.lock();
        inner.notifications.insert(0, notification);
        inner.recount();
    }

    /// Drop everything, returning to the initial empty state.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.notifications.clear();
        inner.unread_count = 0;
        inner.loading = false;
        inner.error = None;
    }
}

impl SessionEventSink for NotificationStore {
    fn session_ended(&self) {
        tracing::debug!("session ended, clearing notifications");
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationKind;
    use chrono::Utc;

    fn notification(id: u64, read: bool) -> Notification {
        Notification {
            id: NotificationId(id),
            title: format!("Notification {id}"),
            message: "message".to_string(),
            kind: NotificationKind::System,
            read,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn load_recomputes_unread_count() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![
            notification(1, false),
            notification(2, false),
            notification(3, true),
        ]);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn load_replaces_rather_than_merges() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![notification(1, false), notification(2, false)]);
        store.load_succeeded(vec![notification(3, true)]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.notifications.len(), 1);
        assert_eq!(snapshot.notifications[0].id, NotificationId(3));
        assert_eq!(snapshot.unread_count, 0);
    }

    #[test]
    fn mark_read_flags_only_the_matching_entry() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![
            notification(1, false),
            notification(2, false),
            notification(3, true),
        ]);

        store.mark_read(NotificationId(1));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.unread_count, 1);
        assert!(snapshot.notifications.iter().find(|n| n.id == NotificationId(1)).unwrap().read);
        assert!(!snapshot.notifications.iter().find(|n| n.id == NotificationId(2)).unwrap().read);
    }

    #[test]
    fn duplicate_mark_read_cannot_drive_counter_negative() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![notification(1, false)]);

        for _ in 0..5 {
            store.mark_read(NotificationId(1));
            assert_eq!(store.unread_count(), 0);
        }
        store.mark_read(NotificationId(99));
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn mark_all_read_zeroes_the_counter() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![
            notification(1, false),
            notification(2, false),
            notification(3, false),
        ]);

        store.mark_all_read();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.unread_count, 0);
        assert!(snapshot.notifications.iter().all(|n| n.read));
    }

    #[test]
    fn push_prepends_and_counts_as_unread() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![notification(1, true)]);

        store.push(notification(2, false));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.notifications[0].id, NotificationId(2));
        assert_eq!(snapshot.unread_count, 1);
    }

    #[test]
    fn failed_load_keeps_previous_list() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![notification(1, false)]);

        store.begin_load();
        store.load_failed("gateway timeout");

        let snapshot = store.snapshot();
        assert_eq!(snapshot.notifications.len(), 1);
        assert_eq!(snapshot.unread_count, 1);
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error.as_deref(), Some("gateway timeout"));
    }

    #[test]
    fn successful_load_clears_a_previous_error() {
        let store = NotificationStore::new();
        store.load_failed("gateway timeout");
        store.load_succeeded(vec![notification(1, false)]);
        assert!(store.snapshot().error.is_none());
    }

    #[test]
    fn session_end_empties_the_store() {
        let store = NotificationStore::new();
        store.load_succeeded(vec![notification(1, false), notification(2, true)]);

        SessionEventSink::session_ended(&store);

        let snapshot = store.snapshot();
        assert!(snapshot.notifications.is_empty());
        assert_eq!(snapshot.unread_count, 0);
        assert!(snapshot.error.is_none());
    }
}
