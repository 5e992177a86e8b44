//! Turn phases.

use serde::{Deserialize, Serialize};

/// Where the game stands within a turn.
///
/// `AwaitingInsert -> AwaitingMove -> AwaitingInsert -> ... -> Over`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active player must push the spare tile into the maze.
    #[default]
    AwaitingInsert,
    /// The active player must move their pawn (possibly staying put).
    AwaitingMove,
    /// Someone won. Terminal.
    Over,
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Phase::Over)
    }
}
