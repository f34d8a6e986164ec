//! Ordered-interaction puzzle.
//!
//! The player must interact with every source exactly once, in an order
//! drawn at random each time the puzzle starts. The first wrong
//! interaction breaks the attempt: after a short delay the puzzle fails
//! and, with reset-on-fail, re-arms for another try.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use puzzle_core::core::{PuzzleId, SequenceConfig, SourceId};
//! use puzzle_core::puzzle::{InteractionOutcome, Puzzle, PuzzleState, SequencePuzzle};
//! use puzzle_core::sources::Interactable;
//!
//! let mut levers: Vec<Interactable> =
//!     (0..3).map(|i| Interactable::new(SourceId::new(i))).collect();
//!
//! let config = SequenceConfig::default().with_seed(42);
//! let mut puzzle = SequencePuzzle::new(PuzzleId::new(1), &config, &mut levers).unwrap();
//! puzzle.start();
//!
//! // Pull the levers in the expected order
//! for index in puzzle.target_order().to_vec() {
//!     levers[index].interact();
//! }
//! let outcomes = puzzle.pump().unwrap();
//!
//! assert_eq!(outcomes.last(), Some(&InteractionOutcome::Solved));
//! assert_eq!(puzzle.state(), PuzzleState::Solved);
//! ```

use std::time::Duration;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::{ConfigError, ListenerId, PuzzleError, PuzzleId, PuzzleRng, SequenceConfig, SourceId};
use crate::schedule::{Scheduler, TaskHandle};
use crate::sources::{Inbox, InteractableSource};
use crate::stats::StatsSink;

use super::{Puzzle, PuzzleCore};

/// What a single interaction did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Dropped: the puzzle is solved, has no target yet, or is already
    /// failing.
    Ignored,
    /// Extended a correct prefix.
    Progressed,
    /// Completed the sequence.
    Solved,
    /// Broke the sequence; failure fires after the fail delay.
    FailureScheduled,
}

/// Work deferred on the puzzle's clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    Fail,
}

/// A source bound to this puzzle at a fixed index.
#[derive(Clone, Copy, Debug)]
struct Binding {
    source: SourceId,
    listener: Option<ListenerId>,
}

/// Puzzle solved by interacting with its sources in a random order.
#[derive(Debug)]
pub struct SequencePuzzle {
    core: PuzzleCore,

    /// Bound sources; position is the source index.
    bindings: SmallVec<[Binding; 8]>,

    /// `target_order[k]` is the source index expected as the k-th interaction.
    target_order: SmallVec<[usize; 8]>,

    /// Source indices received in the current attempt.
    progress: SmallVec<[usize; 8]>,

    rng: PuzzleRng,
    inbox: Inbox,
    scheduler: Scheduler<Deferred>,
    pending_failure: Option<TaskHandle>,
}

impl SequencePuzzle {
    /// Create an idle puzzle over `sources` and subscribe to each of them.
    ///
    /// Source `i` in the slice gets index `i`. Fails if there are no
    /// sources or two sources share an ID.
    pub fn new<S: InteractableSource>(
        id: PuzzleId,
        config: &SequenceConfig,
        sources: &mut [S],
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if sources.is_empty() {
            return Err(ConfigError::NoSources);
        }

        let mut seen = FxHashSet::default();
        let mut bindings = SmallVec::with_capacity(sources.len());
        for source in sources.iter() {
            let source_id = source.source_id();
            if !seen.insert(source_id) {
                return Err(ConfigError::DuplicateSource(source_id));
            }
            bindings.push(Binding { source: source_id, listener: None });
        }

        let mut puzzle = Self {
            core: PuzzleCore::new(id, &config.puzzle)?,
            bindings,
            target_order: SmallVec::new(),
            progress: SmallVec::new(),
            rng: PuzzleRng::from_seed_or_entropy(config.seed),
            inbox: Inbox::new(),
            scheduler: Scheduler::new(),
            pending_failure: None,
        };
        puzzle.attach_sources(sources);
        Ok(puzzle)
    }

    /// Report solves to `stats` (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: Box<dyn StatsSink>) -> Self {
        self.core.set_stats(stats);
        self
    }

    /// Draw target orders from `rng` instead of the configured seed
    /// (builder pattern).
    #[must_use]
    pub fn with_rng(mut self, rng: PuzzleRng) -> Self {
        self.rng = rng;
        self
    }

    // === Source Wiring ===

    /// Subscribe to bound sources that are not yet subscribed.
    ///
    /// Subscribing is idempotent: a source already delivering to this
    /// puzzle is left alone. Returns how many new subscriptions were made.
    pub fn attach<S: InteractableSource>(&mut self, sources: &mut [S]) -> Result<usize, PuzzleError> {
        for source in sources.iter() {
            self.index_of(source.source_id())?;
        }
        Ok(self.attach_sources(sources))
    }

    fn attach_sources<S: InteractableSource>(&mut self, sources: &mut [S]) -> usize {
        let mut attached = 0;
        for source in sources.iter_mut() {
            let Some(index) = self.bindings.iter().position(|b| b.source == source.source_id()) else {
                continue;
            };
            if self.bindings[index].listener.is_some() {
                continue;
            }
            let listener = source.subscribe(self.inbox.clone(), index);
            self.bindings[index].listener = Some(listener);
            attached += 1;
        }
        attached
    }

    /// Unsubscribe from `sources` and drop their undelivered interactions.
    ///
    /// Interactions already queued by sources that stay attached are kept.
    /// Returns how many subscriptions were removed.
    pub fn detach<S: InteractableSource>(&mut self, sources: &mut [S]) -> usize {
        let mut detached: SmallVec<[usize; 8]> = SmallVec::new();
        for source in sources.iter_mut() {
            let Some(index) = self.bindings.iter().position(|b| b.source == source.source_id()) else {
                continue;
            };
            if let Some(listener) = self.bindings[index].listener.take() {
                if source.unsubscribe(listener) {
                    detached.push(index);
                }
            }
        }

        if self.attached_count() == 0 {
            self.inbox.clear();
        } else if !detached.is_empty() {
            self.inbox.retain(|index| !detached.contains(&index));
        }
        log::debug!("{} detached from {} sources", self.core.id(), detached.len());
        detached.len()
    }

    // === Interactions ===

    /// Validate one interaction with the source at `index`.
    pub fn interact(&mut self, index: usize) -> Result<InteractionOutcome, PuzzleError> {
        let len = self.bindings.len();
        if index >= len {
            return Err(PuzzleError::IndexOutOfRange { index, len });
        }
        log::trace!("{} interaction with source index {index}", self.core.id());

        if self.core.is_solved() || self.target_order.is_empty() || self.pending_failure.is_some() {
            return Ok(InteractionOutcome::Ignored);
        }

        // A full progress buffer can only hold a broken attempt (kept when
        // reset-on-fail is off); it fails again without growing.
        if self.progress.len() < self.target_order.len() {
            self.progress.push(index);
        }

        let mismatch = self
            .progress
            .iter()
            .zip(self.target_order.iter())
            .position(|(clicked, expected)| clicked != expected);

        if let Some(position) = mismatch {
            log::debug!("{} sequence broken at position {position}", self.core.id());
            self.schedule_failure();
            return Ok(InteractionOutcome::FailureScheduled);
        }
        if self.progress.len() == self.target_order.len() {
            self.solve();
            return Ok(InteractionOutcome::Solved);
        }

        Ok(InteractionOutcome::Progressed)
    }

    /// Validate one interaction with the given source.
    pub fn interact_source(&mut self, source: SourceId) -> Result<InteractionOutcome, PuzzleError> {
        let index = self.index_of(source)?;
        self.interact(index)
    }

    /// Process every interaction waiting in the inbox, oldest first.
    ///
    /// Interactions posted while this runs (for example by a notification
    /// listener) are processed in the same call, after the ones before them.
    ///
    /// # Errors
    ///
    /// Stops at the first index that does not belong to this puzzle. That
    /// index is dropped; interactions processed before it keep their effect
    /// (their outcomes are not returned) and those after it stay queued for
    /// the next call.
    pub fn pump(&mut self) -> Result<Vec<InteractionOutcome>, PuzzleError> {
        let mut outcomes = Vec::new();
        while let Some(index) = self.inbox.pop() {
            outcomes.push(self.interact(index)?);
        }
        Ok(outcomes)
    }

    // === Accessors ===

    /// Index of a bound source.
    pub fn index_of(&self, source: SourceId) -> Result<usize, PuzzleError> {
        self.bindings
            .iter()
            .position(|b| b.source == source)
            .ok_or(PuzzleError::UnknownSource(source))
    }

    /// Bound sources in index order.
    pub fn sources(&self) -> impl Iterator<Item = SourceId> + '_ {
        self.bindings.iter().map(|b| b.source)
    }

    /// Number of bound sources.
    #[must_use]
    pub fn source_count(&self) -> usize {
        self.bindings.len()
    }

    /// Number of sources currently delivering to this puzzle.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.bindings.iter().filter(|b| b.listener.is_some()).count()
    }

    /// Expected order of source indices; empty until the first start.
    #[must_use]
    pub fn target_order(&self) -> &[usize] {
        &self.target_order
    }

    /// Source indices received in the current attempt.
    #[must_use]
    pub fn progress(&self) -> &[usize] {
        &self.progress
    }

    /// Check if a broken attempt is waiting to fail.
    #[must_use]
    pub fn failure_pending(&self) -> bool {
        self.pending_failure
            .is_some_and(|handle| self.scheduler.is_pending(handle))
    }

    /// Handle sources and hosts post interactions into.
    #[must_use]
    pub fn inbox(&self) -> &Inbox {
        &self.inbox
    }

    // === Internals ===

    /// Fresh attempt: clear progress and draw a new target order.
    fn regenerate(&mut self) {
        self.progress.clear();
        self.cancel_failure();
        self.target_order = self.rng.permutation(self.bindings.len()).into_iter().collect();
        log::debug!("{} target order {:?}", self.core.id(), self.target_order);
    }

    fn schedule_failure(&mut self) {
        let delay = self.core.fail_delay();
        let handle = self.scheduler.schedule(delay, Deferred::Fail);
        log::debug!("{} failing in {delay:?} ({handle})", self.core.id());
        self.pending_failure = Some(handle);
    }

    fn cancel_failure(&mut self) {
        if let Some(handle) = self.pending_failure.take() {
            if self.scheduler.cancel(handle).is_some() {
                log::debug!("{} pending failure cancelled", self.core.id());
            }
        }
    }
}

impl Puzzle for SequencePuzzle {
    fn core(&self) -> &PuzzleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PuzzleCore {
        &mut self.core
    }

    /// Clears progress and any pending failure. Keeps the target order and
    /// source subscriptions.
    fn reset(&mut self) {
        self.core.reset();
        self.progress.clear();
        self.cancel_failure();
    }

    /// Draws a new target order on every call, even mid-attempt.
    fn start(&mut self) {
        if self.core.start() {
            self.regenerate();
        }
    }

    fn solve(&mut self) {
        if self.core.is_solved() {
            return;
        }
        self.cancel_failure();
        self.core.solve();
    }

    fn fail(&mut self) {
        self.cancel_failure();
        if self.core.fail() {
            self.reset();
        }
    }

    /// Idle with a target order ready, so interactions count immediately.
    fn activate(&mut self) {
        self.reset();
        self.regenerate();
    }

    fn update(&mut self, elapsed: Duration) {
        for task in self.scheduler.advance(elapsed) {
            match task {
                Deferred::Fail => {
                    self.pending_failure = None;
                    self.fail();
                }
            }
        }
    }
}
