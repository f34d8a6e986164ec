//! Core types: identifiers, RNG, configuration, errors.
//!
//! Everything here is puzzle-kind agnostic. Puzzle kinds build on these
//! rather than defining their own IDs or error types.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{IconId, ListenerId, PuzzleId, SourceId};
pub use rng::PuzzleRng;
pub use config::{PuzzleConfig, SequenceConfig, DEFAULT_FAIL_DELAY_SECS};
pub use error::{ConfigError, PuzzleError, StatsError};
