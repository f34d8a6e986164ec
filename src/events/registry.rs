//! Listener registry.
//!
//! Stores notification listeners indexed by kind. Delivery order is
//! registration order, so hosts get a stable sequence of callbacks.

use rustc_hash::FxHashMap;

use crate::core::ListenerId;

use super::notification::{Notification, NotificationKind};

/// Callback invoked with each notification of the subscribed kind.
pub type Listener = Box<dyn FnMut(&Notification)>;

/// Registry of notification listeners.
///
/// Listeners receive only the notification, never the puzzle itself, so a
/// listener cannot re-enter the puzzle that is notifying it. Hosts that
/// want to react by interacting again post into the puzzle's inbox; those
/// interactions are handled after the current one completes.
#[derive(Default)]
pub struct ListenerRegistry {
    /// All registered listeners.
    listeners: FxHashMap<ListenerId, (NotificationKind, Listener)>,

    /// Index by kind, in registration order.
    by_kind: FxHashMap<NotificationKind, Vec<ListenerId>>,

    /// Next listener ID to allocate.
    next_id: u32,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for one kind of notification.
    pub fn subscribe(&mut self, kind: NotificationKind, listener: Listener) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;

        self.by_kind.entry(kind).or_default().push(id);
        self.listeners.insert(id, (kind, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let Some((kind, _)) = self.listeners.remove(&id) else {
            return false;
        };

        if let Some(list) = self.by_kind.get_mut(&kind) {
            list.retain(|&lid| lid != id);
            if list.is_empty() {
                self.by_kind.remove(&kind);
            }
        }
        true
    }

    /// Deliver a notification to every listener of its kind.
    ///
    /// Returns how many listeners were called.
    pub fn notify(&mut self, notification: &Notification) -> usize {
        let Some(ids) = self.by_kind.get(&notification.kind) else {
            return 0;
        };

        let mut delivered = 0;
        for id in ids {
            if let Some((_, listener)) = self.listeners.get_mut(id) {
                listener(notification);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of listeners for a kind.
    #[must_use]
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("solved", &self.count(NotificationKind::Solved))
            .field("failed", &self.count(NotificationKind::Failed))
            .finish()
    }
}
