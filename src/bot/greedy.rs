//! Greedy one-turn search.
//!
//! Tries the twelve insertions in order and takes the first one after which
//! the bot can walk straight to its target. If none works, or the target is
//! on the spare tile, it plays a random turn instead.

use tracing::debug;

use super::random::RandomStrategy;
use super::simulator::Simulator;
use super::strategy::{target_of, Strategy, TurnPlan};
use crate::board::Insertion;
use crate::core::GameRng;

/// First insertion that opens a path to the target wins.
#[derive(Clone, Debug, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    fn search(sim: &mut Simulator<'_>) -> Option<TurnPlan> {
        for insertion in Insertion::all() {
            if !sim.trial_insert(insertion) {
                continue;
            }

            let game = sim.game();
            let me = game.current();
            // The target may have moved with the slid line, or off onto the spare
            let found = target_of(game, me)
                .filter(|&target| game.board().is_reachable(me.position(), target));
            sim.undo_trial();

            if let Some(destination) = found {
                return Some(TurnPlan {
                    insertion,
                    destination,
                });
            }
        }
        None
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn plan_turn(&self, sim: &mut Simulator<'_>, rng: &mut GameRng) -> Option<TurnPlan> {
        let player = sim.game().current_player();

        if target_of(sim.game(), sim.game().current()).is_none() {
            debug!(%player, "target on the spare tile, playing randomly");
            return RandomStrategy.plan_turn(sim, rng);
        }

        match Self::search(sim) {
            Some(plan) => {
                debug!(%player, insertion = %plan.insertion, destination = %plan.destination, "path found");
                Some(plan)
            }
            None => {
                debug!(%player, "no insertion reaches the target, playing randomly");
                RandomStrategy.plan_turn(sim, rng)
            }
        }
    }
}
