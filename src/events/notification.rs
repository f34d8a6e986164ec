//! Lifecycle notifications emitted by puzzles.
//!
//! Notifications carry no payload beyond their kind and the puzzle that
//! emitted them. UI, audio and quest systems subscribe to the kinds they
//! care about.

use serde::{Deserialize, Serialize};

use crate::core::PuzzleId;

/// What happened to a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// The puzzle was solved.
    Solved,
    /// The current attempt failed.
    Failed,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Solved => write!(f, "solved"),
            NotificationKind::Failed => write!(f, "failed"),
        }
    }
}

/// A notification delivered to puzzle subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// What happened.
    pub kind: NotificationKind,
    /// The puzzle it happened to.
    pub puzzle: PuzzleId,
}

impl Notification {
    /// Create a "solved" notification.
    #[must_use]
    pub const fn solved(puzzle: PuzzleId) -> Self {
        Self { kind: NotificationKind::Solved, puzzle }
    }

    /// Create a "failed" notification.
    #[must_use]
    pub const fn failed(puzzle: PuzzleId) -> Self {
        Self { kind: NotificationKind::Failed, puzzle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let solved = Notification::solved(PuzzleId::new(1));
        assert_eq!(solved.kind, NotificationKind::Solved);
        assert_eq!(solved.puzzle, PuzzleId::new(1));

        let failed = Notification::failed(PuzzleId::new(2));
        assert_eq!(failed.kind, NotificationKind::Failed);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NotificationKind::Solved.to_string(), "solved");
        assert_eq!(NotificationKind::Failed.to_string(), "failed");
    }
}
