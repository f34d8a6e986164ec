//! Puzzle notifications and their listeners.
//!
//! Puzzles announce two things to the outside world: they were solved, or
//! the current attempt failed. Any number of listeners may subscribe to
//! either kind.
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use puzzle_core::core::PuzzleId;
//! use puzzle_core::events::{ListenerRegistry, Notification, NotificationKind};
//!
//! let solved = Rc::new(Cell::new(0));
//! let mut registry = ListenerRegistry::new();
//!
//! let counter = Rc::clone(&solved);
//! registry.subscribe(
//!     NotificationKind::Solved,
//!     Box::new(move |_| counter.set(counter.get() + 1)),
//! );
//!
//! registry.notify(&Notification::solved(PuzzleId::new(1)));
//! registry.notify(&Notification::failed(PuzzleId::new(1)));
//! assert_eq!(solved.get(), 1);
//! ```

mod notification;
mod registry;

pub use notification::{Notification, NotificationKind};
pub use registry::{Listener, ListenerRegistry};
