//! Puzzle configuration.
//!
//! Hosts configure puzzles at construction time:
//! - `PuzzleConfig`: settings shared by every puzzle kind
//! - `SequenceConfig`: adds the RNG seed for sequence puzzles
//!
//! Both are serde-serializable so they can live in level data.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::ids::IconId;

/// Default delay before a broken sequence fails, in seconds.
///
/// Leaves time for click feedback to play before the puzzle re-arms.
pub const DEFAULT_FAIL_DELAY_SECS: f64 = 0.4;

/// Settings shared by all puzzle kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Icon of the puzzle's key concept (shown in inventory).
    pub icon: Option<IconId>,

    /// Reset the puzzle automatically after it fails.
    pub reset_on_fail: bool,

    /// Delay between a wrong interaction and the failure notification.
    pub fail_delay_secs: f64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            icon: None,
            reset_on_fail: true,
            fail_delay_secs: DEFAULT_FAIL_DELAY_SECS,
        }
    }
}

impl PuzzleConfig {
    /// Set the icon (builder pattern).
    #[must_use]
    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the reset-on-fail policy (builder pattern).
    #[must_use]
    pub fn with_reset_on_fail(mut self, reset_on_fail: bool) -> Self {
        self.reset_on_fail = reset_on_fail;
        self
    }

    /// Set the failure delay in seconds (builder pattern).
    #[must_use]
    pub fn with_fail_delay(mut self, secs: f64) -> Self {
        self.fail_delay_secs = secs;
        self
    }

    /// Failure delay as a `Duration`.
    ///
    /// Falls back to zero for values [`validate`](Self::validate) rejects.
    #[must_use]
    pub fn fail_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.fail_delay_secs).unwrap_or(Duration::ZERO)
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Duration::try_from_secs_f64(self.fail_delay_secs).is_err() {
            return Err(ConfigError::InvalidFailDelay(self.fail_delay_secs));
        }
        Ok(())
    }
}

/// Settings for a [`SequencePuzzle`](crate::puzzle::SequencePuzzle).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Shared puzzle settings.
    pub puzzle: PuzzleConfig,

    /// Seed for the target order. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl SequenceConfig {
    /// Set the shared puzzle settings (builder pattern).
    #[must_use]
    pub fn with_puzzle(mut self, puzzle: PuzzleConfig) -> Self {
        self.puzzle = puzzle;
        self
    }

    /// Pin the RNG seed (builder pattern).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the settings are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.puzzle.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();
        assert_eq!(config.icon, None);
        assert!(config.reset_on_fail);
        assert_eq!(config.fail_delay(), Duration::from_millis(400));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SequenceConfig::default()
            .with_puzzle(
                PuzzleConfig::default()
                    .with_icon(IconId::new(3))
                    .with_reset_on_fail(false)
                    .with_fail_delay(1.5),
            )
            .with_seed(123);

        assert_eq!(config.puzzle.icon, Some(IconId::new(3)));
        assert!(!config.puzzle.reset_on_fail);
        assert_eq!(config.puzzle.fail_delay(), Duration::from_millis(1500));
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_invalid_fail_delay() {
        for bad in [-0.1, f64::NAN, f64::INFINITY, 1e30] {
            let config = PuzzleConfig::default().with_fail_delay(bad);
            assert!(matches!(config.validate(), Err(ConfigError::InvalidFailDelay(_))));
            assert_eq!(config.fail_delay(), Duration::ZERO);
        }

        let zero = PuzzleConfig::default().with_fail_delay(0.0);
        assert!(zero.validate().is_ok());
        assert_eq!(zero.fail_delay(), Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = SequenceConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SequenceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SequenceConfig = serde_json::from_str(r#"{"seed": 5}"#).unwrap();
        assert_eq!(config.seed, Some(5));
        assert!(config.puzzle.reset_on_fail);
        assert_eq!(config.puzzle.fail_delay_secs, DEFAULT_FAIL_DELAY_SECS);
    }
}
