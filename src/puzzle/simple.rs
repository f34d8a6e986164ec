//! Puzzle solved by an outside trigger.
//!
//! Used where the game logic elsewhere decides success, e.g. a chest that
//! opens when the matching key is used on it.

use crate::core::{ConfigError, PuzzleConfig, PuzzleId};
use crate::stats::StatsSink;

use super::{Puzzle, PuzzleCore};

/// A puzzle with no progress of its own.
#[derive(Debug)]
pub struct SimplePuzzle {
    core: PuzzleCore,
}

impl SimplePuzzle {
    /// Create an idle puzzle.
    pub fn new(id: PuzzleId, config: &PuzzleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            core: PuzzleCore::new(id, config)?,
        })
    }

    /// Report solves to `stats` (builder pattern).
    #[must_use]
    pub fn with_stats(mut self, stats: Box<dyn StatsSink>) -> Self {
        self.core.set_stats(stats);
        self
    }
}

impl Puzzle for SimplePuzzle {
    fn core(&self) -> &PuzzleCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PuzzleCore {
        &mut self.core
    }

    fn reset(&mut self) {
        self.core.reset();
    }

    fn start(&mut self) {
        self.core.start();
    }

    fn solve(&mut self) {
        self.core.solve();
    }

    fn fail(&mut self) {
        if self.core.fail() {
            self.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::core::IconId;
    use crate::events::NotificationKind;
    use crate::puzzle::PuzzleState;
    use crate::stats::{StatCounters, PUZZLE_COUNT_STAT};

    #[test]
    fn test_icon() {
        let config = PuzzleConfig::default().with_icon(IconId::new(4));
        let puzzle = SimplePuzzle::new(PuzzleId::new(1), &config).unwrap();
        assert_eq!(puzzle.icon(), Some(IconId::new(4)));

        let plain = SimplePuzzle::new(PuzzleId::new(2), &PuzzleConfig::default()).unwrap();
        assert_eq!(plain.icon(), None);
    }

    #[test]
    fn test_fail_with_reset() {
        let mut puzzle = SimplePuzzle::new(PuzzleId::new(1), &PuzzleConfig::default()).unwrap();
        puzzle.start();
        puzzle.fail();
        assert_eq!(puzzle.state(), PuzzleState::Idle);
    }

    #[test]
    fn test_fail_without_reset() {
        let config = PuzzleConfig::default().with_reset_on_fail(false);
        let mut puzzle = SimplePuzzle::new(PuzzleId::new(1), &config).unwrap();
        puzzle.start();
        puzzle.fail();
        assert_eq!(puzzle.state(), PuzzleState::Started);
    }

    #[test]
    fn test_solve_reports_once() {
        let stats = Rc::new(RefCell::new(StatCounters::new()));
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut puzzle = SimplePuzzle::new(PuzzleId::new(1), &PuzzleConfig::default())
            .unwrap()
            .with_stats(Box::new(Rc::clone(&stats)));
        let l = Rc::clone(&log);
        puzzle.subscribe(NotificationKind::Solved, Box::new(move |n| l.borrow_mut().push(*n)));

        puzzle.start();
        puzzle.solve();
        puzzle.solve();

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].puzzle, PuzzleId::new(1));
        assert_eq!(stats.borrow().get(PUZZLE_COUNT_STAT), 1);
    }
}
