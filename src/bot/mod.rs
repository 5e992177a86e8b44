//! Bot players.
//!
//! A [`Strategy`] plans a whole turn (insertion plus destination) against a
//! [`Simulator`], which applies trial insertions through the same commands
//! real turns use and rolls them back. The facade then commits the plan.
//!
//! - [`GreedyStrategy`]: first insertion that opens a path to the target.
//! - [`RandomStrategy`]: any legal insertion, any reachable cell.

mod greedy;
mod random;
mod simulator;
mod strategy;

pub use greedy::GreedyStrategy;
pub use random::RandomStrategy;
pub use simulator::Simulator;
pub use strategy::{target_of, Strategy, TurnPlan};
