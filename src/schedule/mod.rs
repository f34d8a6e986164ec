//! Deferred calls on a host-driven clock.
//!
//! Puzzles occasionally need to act "a moment later", e.g. failing a
//! broken sequence after click feedback had time to play. The
//! [`Scheduler`] keeps such one-shot tasks against a virtual clock the host
//! advances every frame. Every task gets a [`TaskHandle`] and can be
//! cancelled until it comes due.
//!
//! ```
//! use std::time::Duration;
//! use puzzle_core::schedule::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! let handle = scheduler.schedule(Duration::from_millis(400), "fail");
//!
//! assert!(scheduler.advance(Duration::from_millis(300)).is_empty());
//! assert!(scheduler.is_pending(handle));
//! assert_eq!(scheduler.advance(Duration::from_millis(100)), vec!["fail"]);
//! assert!(!scheduler.is_pending(handle));
//! ```

mod scheduler;

pub use scheduler::{Scheduler, TaskHandle};
