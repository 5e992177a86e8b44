//! Error types for the maze engine.
//!
//! Every failure the engine can report is a recoverable result. The bot
//! deliberately probes insertions that may be illegal, so nothing here is
//! ever a panic.

use thiserror::Error;

use super::position::Position;
use crate::board::Insertion;
use crate::game::Phase;

/// Broad class of a [`MazeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A malformed request: fixed line, bad index, bad player count.
    Structural,
    /// A well-formed request the rules forbid right now.
    RuleViolation,
    /// The destination is not connected to the pawn.
    BlockedPath,
}

/// Errors raised by board, game and facade operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Tried to slide an even (fixed) row or column.
    #[error("line {index} is fixed and cannot slide")]
    FixedLine { index: usize },

    /// Row or column index beyond the board.
    #[error("line {index} is outside the board")]
    OutOfRange { index: usize },

    /// Position beyond the board.
    #[error("position {position} is outside the board")]
    OffBoard { position: Position },

    /// Player count outside 2..=4.
    #[error("a game needs 2 to 4 players, got {count}")]
    InvalidPlayerCount { count: usize },

    /// An explicit setup that cannot be played.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),

    /// The insertion would undo the previous one.
    #[error("insertion {insertion} would reverse the previous slide")]
    AntiReturn { insertion: Insertion },

    /// Action attempted in the wrong turn phase.
    #[error("expected phase {expected:?}, game is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },

    /// No open corridor leads to the destination.
    #[error("no path from {from} to {to}")]
    BlockedPath { from: Position, to: Position },
}

impl MazeError {
    /// Classify this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            MazeError::FixedLine { .. }
            | MazeError::OutOfRange { .. }
            | MazeError::OffBoard { .. }
            | MazeError::InvalidPlayerCount { .. }
            | MazeError::InvalidSetup(_) => ErrorCategory::Structural,
            MazeError::AntiReturn { .. } | MazeError::WrongPhase { .. } => ErrorCategory::RuleViolation,
            MazeError::BlockedPath { .. } => ErrorCategory::BlockedPath,
        }
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, MazeError>;
