//! Error types.
//!
//! A failed puzzle attempt is a domain event, not an error. The types here
//! cover programming and configuration mistakes: wiring a puzzle to no
//! sources, routing an interaction from an object the puzzle never bound,
//! and so on.

use thiserror::Error;

use super::ids::SourceId;

/// Invalid puzzle configuration, rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A sequence puzzle needs at least one source.
    #[error("sequence puzzle has no sources")]
    NoSources,
    /// The same source was bound twice.
    #[error("{0} is bound more than once")]
    DuplicateSource(SourceId),
    /// The failure delay must be a finite, non-negative number of seconds.
    #[error("invalid fail delay: {0} seconds")]
    InvalidFailDelay(f64),
}

/// Error raised when driving a puzzle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    /// Interaction from a source that is not bound to this puzzle.
    #[error("{0} is not bound to this puzzle")]
    UnknownSource(SourceId),
    /// Interaction index outside `0..len`.
    #[error("source index {index} out of range for {len} sources")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of bound sources.
        len: usize,
    },
    /// Configuration rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error reported by a stats sink.
///
/// Puzzles treat stat reporting as best-effort and only log these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The backing service is not reachable.
    #[error("stats service unavailable")]
    Unavailable,
    /// The service refused the update.
    #[error("stat {name:?} rejected")]
    Rejected {
        /// Stat name.
        name: String,
    },
}
