//! Outbound stat reporting.
//!
//! Solving a puzzle bumps a "puzzle count" stat in an external
//! achievements service. The call is fire-and-forget: puzzles log a
//! failed report and move on, they never block or retry.
//!
//! ```
//! use puzzle_core::stats::{StatCounters, StatsSink, PUZZLE_COUNT_STAT};
//!
//! let mut counters = StatCounters::new();
//! counters.increment(PUZZLE_COUNT_STAT, 1).unwrap();
//! counters.increment(PUZZLE_COUNT_STAT, 1).unwrap();
//! assert_eq!(counters.get(PUZZLE_COUNT_STAT), 2);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::core::StatsError;

/// Name of the stat incremented once per solved puzzle.
pub const PUZZLE_COUNT_STAT: &str = "PUZZLE_COUNT";

/// Destination for stat increments.
pub trait StatsSink {
    /// Add `amount` to the named stat.
    fn increment(&mut self, name: &str, amount: i64) -> Result<(), StatsError>;
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStats;

impl StatsSink for NullStats {
    fn increment(&mut self, _name: &str, _amount: i64) -> Result<(), StatsError> {
        Ok(())
    }
}

/// In-memory stat counters.
#[derive(Clone, Debug, Default)]
pub struct StatCounters {
    values: FxHashMap<String, i64>,
}

impl StatCounters {
    /// Create empty counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a stat (zero if never reported).
    #[must_use]
    pub fn get(&self, name: &str) -> i64 {
        self.values.get(name).copied().unwrap_or(0)
    }
}

impl StatsSink for StatCounters {
    fn increment(&mut self, name: &str, amount: i64) -> Result<(), StatsError> {
        *self.values.entry(name.to_owned()).or_insert(0) += amount;
        Ok(())
    }
}

/// Shared sinks, so the host can keep reading counters a puzzle writes to.
impl<S: StatsSink> StatsSink for Rc<RefCell<S>> {
    fn increment(&mut self, name: &str, amount: i64) -> Result<(), StatsError> {
        self.borrow_mut().increment(name, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_stats() {
        assert!(NullStats.increment(PUZZLE_COUNT_STAT, 1).is_ok());
    }

    #[test]
    fn test_counters() {
        let mut counters = StatCounters::new();
        assert_eq!(counters.get("missing"), 0);

        counters.increment("a", 2).unwrap();
        counters.increment("a", 3).unwrap();
        counters.increment("b", -1).unwrap();

        assert_eq!(counters.get("a"), 5);
        assert_eq!(counters.get("b"), -1);
        assert_eq!(counters.get("never"), 0);
    }

    #[test]
    fn test_shared_counters() {
        let shared = Rc::new(RefCell::new(StatCounters::new()));
        let mut sink: Box<dyn StatsSink> = Box::new(Rc::clone(&shared));

        sink.increment(PUZZLE_COUNT_STAT, 1).unwrap();

        assert_eq!(shared.borrow().get(PUZZLE_COUNT_STAT), 1);
    }
}
