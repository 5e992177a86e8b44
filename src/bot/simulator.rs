//! Trial execution for bot search.

use tracing::trace;

use crate::board::Insertion;
use crate::facade::{Dispatch, ObserverRegistry};
use crate::game::Game;
use crate::history::{History, InsertCommand};

/// Runs trial insertions on a live game through the command machinery.
///
/// Trials go through their own scratch [`History`], so the player-facing
/// undo / redo stacks never see them. Any trial still applied when the
/// simulator is dropped is undone, so the game always comes back in the
/// state the search started from.
///
/// When attached to observers, every trial step is dispatched as
/// [`Dispatch::Trial`], which observers never see.
pub struct Simulator<'a> {
    game: &'a mut Game,
    observers: Option<&'a mut ObserverRegistry>,
    trials: History,
}

impl<'a> Simulator<'a> {
    /// Simulate on a bare game.
    pub fn new(game: &'a mut Game) -> Self {
        Self {
            game,
            observers: None,
            trials: History::new(),
        }
    }

    /// Simulate on a game that has observers attached.
    pub fn observed(game: &'a mut Game, observers: &'a mut ObserverRegistry) -> Self {
        Self {
            game,
            observers: Some(observers),
            trials: History::new(),
        }
    }

    fn dispatch(&mut self) {
        if let Some(observers) = self.observers.as_deref_mut() {
            observers.notify(Dispatch::Trial);
        }
    }

    /// The game, with any applied trials.
    #[must_use]
    pub fn game(&self) -> &Game {
        &*self.game
    }

    /// Apply `insertion` as a trial. Returns `false` if the rules reject it.
    pub fn trial_insert(&mut self, insertion: Insertion) -> bool {
        let command = Box::new(InsertCommand::new(insertion));
        match self.trials.execute(self.game, command) {
            Ok(()) => {
                trace!(%insertion, "trial insertion");
                self.dispatch();
                true
            }
            Err(err) => {
                trace!(%insertion, %err, "trial insertion rejected");
                false
            }
        }
    }

    /// Revert the most recent trial. Returns `false` if none is applied.
    pub fn undo_trial(&mut self) -> bool {
        let undone = self.trials.undo(self.game);
        if undone {
            self.dispatch();
        }
        undone
    }

    /// Number of trials currently applied.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.trials.undo_len()
    }
}

impl Drop for Simulator<'_> {
    fn drop(&mut self) {
        while self.trials.undo(self.game) {}
    }
}
