//! The strategy seam and the plan it produces.

use serde::{Deserialize, Serialize};

use super::simulator::Simulator;
use crate::board::Insertion;
use crate::core::{GameRng, Position};
use crate::game::{Game, Player};

/// A full bot turn: where to push the spare, then where to walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnPlan {
    pub insertion: Insertion,
    pub destination: Position,
}

/// Policy deciding a bot's turn.
///
/// Called with the game in `AwaitingInsert` for the bot's seat. A strategy
/// may apply trials through the simulator but must leave none applied when
/// it returns; the caller commits the returned plan.
pub trait Strategy: Send + Sync {
    /// Name for logs.
    fn name(&self) -> &'static str;

    /// Decide the turn. `None` only if no legal insertion exists.
    fn plan_turn(&self, sim: &mut Simulator<'_>, rng: &mut GameRng) -> Option<TurnPlan>;
}

/// Where `player` wants to go: the tile of its revealed objective, or home
/// once every objective is found. `None` while the objective is on the spare.
#[must_use]
pub fn target_of(game: &Game, player: &Player) -> Option<Position> {
    match player.current_objective() {
        Some(treasure) => game.board().find_treasure(treasure),
        None => Some(player.start()),
    }
}
