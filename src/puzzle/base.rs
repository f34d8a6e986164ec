//! State and behavior shared by every puzzle kind.

use std::time::Duration;

use crate::core::{ConfigError, IconId, ListenerId, PuzzleConfig, PuzzleId};
use crate::events::{Listener, ListenerRegistry, Notification, NotificationKind};
use crate::stats::{NullStats, StatsSink, PUZZLE_COUNT_STAT};

use super::PuzzleState;

/// Lifecycle flags, policy and outbound channels of a puzzle.
///
/// Puzzle kinds own one `PuzzleCore` and call into it explicitly from
/// their [`Puzzle`](super::Puzzle) hooks, adding their own bookkeeping
/// before or after.
pub struct PuzzleCore {
    id: PuzzleId,
    icon: Option<IconId>,
    reset_on_fail: bool,
    fail_delay: Duration,

    started: bool,
    solved: bool,

    listeners: ListenerRegistry,
    stats: Box<dyn StatsSink>,
}

impl PuzzleCore {
    /// Create an idle core. Stats go nowhere until a sink is set.
    pub fn new(id: PuzzleId, config: &PuzzleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            id,
            icon: config.icon,
            reset_on_fail: config.reset_on_fail,
            fail_delay: config.fail_delay(),
            started: false,
            solved: false,
            listeners: ListenerRegistry::new(),
            stats: Box::new(NullStats),
        })
    }

    /// Replace the stats sink.
    pub fn set_stats(&mut self, stats: Box<dyn StatsSink>) {
        self.stats = stats;
    }

    /// Identity of the puzzle.
    #[must_use]
    pub fn id(&self) -> PuzzleId {
        self.id
    }

    /// Icon of the puzzle's key concept.
    #[must_use]
    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    /// Whether a failure resets the puzzle.
    #[must_use]
    pub fn reset_on_fail(&self) -> bool {
        self.reset_on_fail
    }

    /// Delay before a broken attempt fails.
    #[must_use]
    pub fn fail_delay(&self) -> Duration {
        self.fail_delay
    }

    /// Check if an attempt is in progress.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Check if the puzzle is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Lifecycle state derived from the flags.
    #[must_use]
    pub fn state(&self) -> PuzzleState {
        if self.solved {
            PuzzleState::Solved
        } else if self.started {
            PuzzleState::Started
        } else {
            PuzzleState::Idle
        }
    }

    /// Clear both flags. Idempotent.
    pub fn reset(&mut self) {
        log::debug!("{} reset", self.id);
        self.started = false;
        self.solved = false;
    }

    /// Mark the puzzle started.
    ///
    /// A solved puzzle only leaves `Solved` through [`reset`](Self::reset),
    /// so this returns `false` and changes nothing in that case.
    pub fn start(&mut self) -> bool {
        if self.solved {
            log::debug!("{} is solved; start ignored", self.id);
            return false;
        }
        log::debug!("{} started", self.id);
        self.started = true;
        true
    }

    /// The single solve transition.
    ///
    /// Reports the puzzle-count stat, flips the flags and notifies "solved"
    /// listeners. Returns `false` without side effects if already solved.
    pub fn solve(&mut self) -> bool {
        if self.solved {
            return false;
        }

        if let Err(e) = self.stats.increment(PUZZLE_COUNT_STAT, 1) {
            log::warn!("{}: failed to report {PUZZLE_COUNT_STAT}: {e}", self.id);
        }

        self.started = false;
        self.solved = true;
        log::debug!("{} solved", self.id);

        self.listeners.notify(&Notification::solved(self.id));
        true
    }

    /// Notify "failed" listeners.
    ///
    /// Returns whether the caller must now reset (the reset-on-fail policy).
    /// Resetting is left to the caller so puzzle kinds can clear their own
    /// state along with the flags.
    #[must_use]
    pub fn fail(&mut self) -> bool {
        log::debug!("{} failed", self.id);
        self.listeners.notify(&Notification::failed(self.id));
        self.reset_on_fail
    }

    /// Register a notification listener.
    pub fn subscribe(&mut self, kind: NotificationKind, listener: Listener) -> ListenerId {
        self.listeners.subscribe(kind, listener)
    }

    /// Remove a notification listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of listeners for a kind.
    #[must_use]
    pub fn listener_count(&self, kind: NotificationKind) -> usize {
        self.listeners.count(kind)
    }
}

impl std::fmt::Debug for PuzzleCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleCore")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("reset_on_fail", &self.reset_on_fail)
            .field("fail_delay", &self.fail_delay)
            .field("started", &self.started)
            .field("solved", &self.solved)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
