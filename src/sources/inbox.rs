//! Single-threaded interaction mailbox.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// FIFO queue of source indices shared between sources and one puzzle.
///
/// Cloning an inbox yields another handle to the same queue.
#[derive(Clone, Debug, Default)]
pub struct Inbox {
    queue: Rc<RefCell<VecDeque<usize>>>,
}

impl Inbox {
    /// Create an empty inbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interaction.
    pub fn post(&self, index: usize) {
        self.queue.borrow_mut().push_back(index);
    }

    /// Take the oldest interaction.
    pub fn pop(&self) -> Option<usize> {
        self.queue.borrow_mut().pop_front()
    }

    /// Number of queued interactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Check if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Drop everything queued.
    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    /// Keep only the interactions `keep` accepts, preserving their order.
    pub fn retain(&self, mut keep: impl FnMut(usize) -> bool) {
        self.queue.borrow_mut().retain(|&index| keep(index));
    }
}
