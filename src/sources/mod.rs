//! Interactable sources.
//!
//! A source is any scene object that can report a discrete, parameterless
//! "interacted" event: a lever, a pressure plate, a rune stone. Puzzles
//! consume sources through the [`InteractableSource`] contract and never
//! depend on a concrete type.
//!
//! Delivery is mailbox based. A puzzle hands each source an [`Inbox`] plus
//! the index the source occupies in that puzzle; when the source is
//! interacted with it posts the index into every subscribed inbox. The
//! puzzle drains its inbox on the host's event loop, one interaction at a
//! time.
//!
//! ```
//! use puzzle_core::core::SourceId;
//! use puzzle_core::sources::{Inbox, Interactable, InteractableSource};
//!
//! let inbox = Inbox::new();
//! let mut lever = Interactable::new(SourceId::new(7));
//!
//! let listener = lever.subscribe(inbox.clone(), 2);
//! lever.interact();
//! assert_eq!(inbox.pop(), Some(2));
//!
//! assert!(lever.unsubscribe(listener));
//! lever.interact();
//! assert!(inbox.is_empty());
//! ```

mod inbox;
mod interactable;

pub use inbox::Inbox;
pub use interactable::Interactable;

use crate::core::{ListenerId, SourceId};

/// Contract for objects that report interactions.
pub trait InteractableSource {
    /// Identity of this source.
    fn source_id(&self) -> SourceId;

    /// Deliver future interactions into `inbox`, tagged with `index`.
    fn subscribe(&mut self, inbox: Inbox, index: usize) -> ListenerId;

    /// Stop delivering to a previous subscription.
    ///
    /// Returns `false` if the listener was not subscribed.
    fn unsubscribe(&mut self, listener: ListenerId) -> bool;
}

/// Boxed sources, so one puzzle can bind different kinds of scene object.
impl<S: InteractableSource + ?Sized> InteractableSource for Box<S> {
    fn source_id(&self) -> SourceId {
        (**self).source_id()
    }

    fn subscribe(&mut self, inbox: Inbox, index: usize) -> ListenerId {
        (**self).subscribe(inbox, index)
    }

    fn unsubscribe(&mut self, listener: ListenerId) -> bool {
        (**self).unsubscribe(listener)
    }
}
