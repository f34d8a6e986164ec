//! Basic interactable source.

use crate::core::{ListenerId, SourceId};

use super::{Inbox, InteractableSource};

/// One subscription held by a source.
#[derive(Clone, Debug)]
struct Subscription {
    id: ListenerId,
    inbox: Inbox,
    index: usize,
}

/// A clickable scene object.
///
/// Hosts call [`interact`](Self::interact) when the player uses the object.
#[derive(Clone, Debug)]
pub struct Interactable {
    id: SourceId,
    subscriptions: Vec<Subscription>,
    next_listener: u32,
}

impl Interactable {
    /// Create a source with no subscribers.
    pub fn new(id: SourceId) -> Self {
        Self {
            id,
            subscriptions: Vec::new(),
            next_listener: 0,
        }
    }

    /// Report an interaction to every subscriber.
    ///
    /// Returns how many inboxes received it.
    pub fn interact(&self) -> usize {
        log::trace!("{} interacted", self.id);
        for sub in &self.subscriptions {
            sub.inbox.post(sub.index);
        }
        self.subscriptions.len()
    }

    /// Number of active subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl InteractableSource for Interactable {
    fn source_id(&self) -> SourceId {
        self.id
    }

    fn subscribe(&mut self, inbox: Inbox, index: usize) -> ListenerId {
        let id = ListenerId::new(self.next_listener);
        self.next_listener += 1;
        self.subscriptions.push(Subscription { id, inbox, index });
        id
    }

    fn unsubscribe(&mut self, listener: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|sub| sub.id != listener);
        self.subscriptions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interact_without_subscribers() {
        let source = Interactable::new(SourceId::new(1));
        assert_eq!(source.interact(), 0);
        assert_eq!(source.source_id(), SourceId::new(1));
    }

    #[test]
    fn test_posts_bound_index() {
        let inbox = Inbox::new();
        let mut source = Interactable::new(SourceId::new(1));
        source.subscribe(inbox.clone(), 4);

        assert_eq!(source.interact(), 1);
        assert_eq!(source.interact(), 1);

        assert_eq!(inbox.pop(), Some(4));
        assert_eq!(inbox.pop(), Some(4));
        assert!(inbox.is_empty());
    }

    #[test]
    fn test_multiple_inboxes() {
        let a = Inbox::new();
        let b = Inbox::new();
        let mut source = Interactable::new(SourceId::new(1));
        source.subscribe(a.clone(), 0);
        source.subscribe(b.clone(), 3);

        assert_eq!(source.interact(), 2);
        assert_eq!(a.pop(), Some(0));
        assert_eq!(b.pop(), Some(3));
    }

    #[test]
    fn test_unsubscribe() {
        let inbox = Inbox::new();
        let mut source = Interactable::new(SourceId::new(1));
        let first = source.subscribe(inbox.clone(), 0);
        let second = source.subscribe(inbox.clone(), 1);
        assert_ne!(first, second);

        assert!(source.unsubscribe(first));
        assert!(!source.unsubscribe(first));
        assert_eq!(source.subscriber_count(), 1);

        source.interact();
        assert_eq!(inbox.pop(), Some(1));
        assert!(inbox.is_empty());
    }
}
