//! Undo / redo stacks.

use tracing::trace;

use super::command::Command;
use crate::core::Result;
use crate::game::Game;

/// Two-stack command invoker.
///
/// Executing a new command clears the redo stack. Failed commands are never
/// recorded.
#[derive(Default)]
pub struct History {
    undo: Vec<Box<dyn Command>>,
    redo: Vec<Box<dyn Command>>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `command` and record it if it succeeds.
    pub fn execute(&mut self, game: &mut Game, mut command: Box<dyn Command>) -> Result<()> {
        command.execute(game)?;
        trace!(command = %command.describe(), "executed");
        self.undo.push(command);
        self.redo.clear();
        Ok(())
    }

    /// Undo the most recent command. Returns `false` if there was none.
    pub fn undo(&mut self, game: &mut Game) -> bool {
        let Some(mut command) = self.undo.pop() else {
            return false;
        };
        command.undo(game);
        trace!(command = %command.describe(), "undone");
        self.redo.push(command);
        true
    }

    /// Re-execute the most recently undone command.
    ///
    /// Returns `Ok(false)` if there was none. A command that no longer
    /// applies stays on the redo stack and its error is returned.
    pub fn redo(&mut self, game: &mut Game) -> Result<bool> {
        let Some(mut command) = self.redo.pop() else {
            return Ok(false);
        };
        if let Err(err) = command.execute(game) {
            self.redo.push(command);
            return Err(err);
        }
        trace!(command = %command.describe(), "redone");
        self.undo.push(command);
        Ok(true)
    }

    /// Forget everything. Used when a new game starts.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}

impl std::fmt::Debug for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("undo", &self.undo.len())
            .field("redo", &self.redo.len())
            .finish()
    }
}
