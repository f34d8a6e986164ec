//! Puzzle lifecycle contract and puzzle kinds.
//!
//! Every puzzle moves through three states:
//!
//! ```text
//!          start()            solve()
//!   Idle ──────────► Started ─────────► Solved
//!    ▲                  │                  │
//!    └──────────────────┴──────────────────┘
//!      reset(), or fail() with reset-on-fail
//! ```
//!
//! `Solved` is terminal until `reset()`. The [`Puzzle`] trait is the
//! contract hosts program against; [`PuzzleCore`] holds the state every
//! kind shares and is called explicitly from each kind's hooks.
//!
//! ## Kinds
//!
//! - [`SimplePuzzle`]: solved or failed only by direct host calls
//! - [`SequencePuzzle`]: sources must be interacted with in a random order

mod base;
mod sequence;
mod simple;

pub use base::PuzzleCore;
pub use sequence::{InteractionOutcome, SequencePuzzle};
pub use simple::SimplePuzzle;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{IconId, ListenerId, PuzzleId};
use crate::events::{Listener, NotificationKind};

/// Lifecycle state of a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleState {
    /// Not started, or reset.
    Idle,
    /// An attempt is in progress.
    Started,
    /// Solved; stays here until reset.
    Solved,
}

/// Contract shared by all puzzle kinds.
///
/// ## Implementation Notes
///
/// - `reset`: must call `PuzzleCore::reset` and clear kind-specific progress
/// - `start`: must call `PuzzleCore::start` before per-attempt setup
/// - `solve`: must go through `PuzzleCore::solve`, the only way to solve
/// - `fail`: must call `PuzzleCore::fail` and reset when it asks to
pub trait Puzzle {
    /// Shared state.
    fn core(&self) -> &PuzzleCore;

    /// Shared state, mutably.
    fn core_mut(&mut self) -> &mut PuzzleCore;

    /// Return to `Idle`, discarding the current attempt. Idempotent.
    fn reset(&mut self);

    /// Begin an attempt.
    fn start(&mut self);

    /// Solve the puzzle. No effect if already solved.
    fn solve(&mut self);

    /// Fail the current attempt.
    fn fail(&mut self);

    // === Provided Methods ===

    /// Called when the owning object becomes active.
    fn activate(&mut self) {
        self.reset();
    }

    /// Advance the puzzle's clock by `elapsed`, running deferred work.
    fn update(&mut self, _elapsed: Duration) {}

    /// Identity of the puzzle.
    fn id(&self) -> PuzzleId {
        self.core().id()
    }

    /// Icon shown for the puzzle's key in inventory and UI.
    fn icon(&self) -> Option<IconId> {
        self.core().icon()
    }

    /// Current lifecycle state.
    fn state(&self) -> PuzzleState {
        self.core().state()
    }

    /// Check if an attempt is in progress.
    fn is_started(&self) -> bool {
        self.core().is_started()
    }

    /// Check if the puzzle is solved.
    fn is_solved(&self) -> bool {
        self.core().is_solved()
    }

    /// Listen for solved or failed notifications.
    fn subscribe(&mut self, kind: NotificationKind, listener: Listener) -> ListenerId {
        self.core_mut().subscribe(kind, listener)
    }

    /// Stop listening.
    fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.core_mut().unsubscribe(id)
    }
}
