//! # puzzle-core
//!
//! Lifecycle contract and strategies for in-world interactive puzzles.
//!
//! ## Design Principles
//!
//! 1. **Kind-Agnostic Lifecycle**: Every puzzle is Idle, Started or Solved.
//!    Kinds add their own progress on top via the [`Puzzle`] trait.
//!
//! 2. **Host-Driven**: The crate owns no clock and no event loop. Hosts
//!    deliver interactions and elapsed time; puzzles react synchronously.
//!
//! 3. **Deterministic When Asked**: Target orders come from an injectable,
//!    seedable RNG so tests and replays can pin them.
//!
//! ## Modules
//!
//! - `core`: IDs, RNG, configuration, errors
//! - `events`: Solved/failed notifications and their listeners
//! - `sources`: Interactable source contract and a basic implementation
//! - `schedule`: Cancellable deferred calls on a virtual clock
//! - `stats`: Fire-and-forget stat reporting
//! - `puzzle`: The `Puzzle` trait, `SimplePuzzle` and `SequencePuzzle`

pub mod core;
pub mod events;
pub mod sources;
pub mod schedule;
pub mod stats;
pub mod puzzle;

// Re-export commonly used types
pub use crate::core::{
    IconId, ListenerId, PuzzleId, SourceId,
    PuzzleRng,
    PuzzleConfig, SequenceConfig,
    ConfigError, PuzzleError, StatsError,
};

pub use crate::events::{Listener, ListenerRegistry, Notification, NotificationKind};

pub use crate::sources::{Inbox, Interactable, InteractableSource};

pub use crate::schedule::{Scheduler, TaskHandle};

pub use crate::stats::{NullStats, StatCounters, StatsSink, PUZZLE_COUNT_STAT};

pub use crate::puzzle::{
    InteractionOutcome, Puzzle, PuzzleCore, PuzzleState,
    SequencePuzzle, SimplePuzzle,
};
