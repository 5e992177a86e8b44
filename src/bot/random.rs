//! Uniformly random play.

use tracing::debug;

use super::simulator::Simulator;
use super::strategy::{Strategy, TurnPlan};
use crate::board::Insertion;
use crate::core::{GameRng, Position};

/// Pick any legal insertion, then any reachable cell.
///
/// Also the fallback of [`GreedyStrategy`](super::GreedyStrategy) when no
/// insertion reaches its target.
#[derive(Clone, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn plan_turn(&self, sim: &mut Simulator<'_>, rng: &mut GameRng) -> Option<TurnPlan> {
        let legal: Vec<Insertion> = Insertion::all()
            .filter(|&insertion| sim.game().is_legal_insertion(insertion))
            .collect();
        let insertion = *rng.choose(&legal)?;

        if !sim.trial_insert(insertion) {
            return None;
        }
        // Hash sets have no stable order; sort before drawing
        let mut reachable: Vec<Position> = sim.game().reachable_from_current().into_iter().collect();
        reachable.sort_unstable();
        let destination = rng.choose(&reachable).copied();
        sim.undo_trial();

        let destination = destination?;
        debug!(%insertion, %destination, "random plan");
        Some(TurnPlan {
            insertion,
            destination,
        })
    }
}
