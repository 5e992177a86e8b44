//! Reversible game actions.

use crate::board::{Insertion, Tile};
use crate::core::{PlayerId, PlayerMap, Position, Result};
use crate::game::{Game, Phase, PlayerMemento};

/// A mutating action with an exact inverse.
///
/// `execute` snapshots whatever it is about to change, then applies the
/// change. `undo` is only ever called after a successful `execute` and puts
/// the game back to the snapshot. A command may be executed again after
/// being undone (redo).
pub trait Command {
    /// Apply the action. On error the game is left untouched.
    fn execute(&mut self, game: &mut Game) -> Result<()>;

    /// Revert the last successful `execute`.
    fn undo(&mut self, game: &mut Game);

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Snapshot taken by [`InsertCommand`] before sliding.
#[derive(Clone, Debug)]
struct InsertSnapshot {
    positions: PlayerMap<Position>,
    forbidden: Option<Insertion>,
    /// The tile pushed out, as it left the grid. The spare may be turned
    /// before this command is undone.
    ejected: Tile,
}

/// Push the spare tile into the maze.
#[derive(Clone, Debug)]
pub struct InsertCommand {
    insertion: Insertion,
    snapshot: Option<InsertSnapshot>,
}

impl InsertCommand {
    #[must_use]
    pub fn new(insertion: Insertion) -> Self {
        Self {
            insertion,
            snapshot: None,
        }
    }

    #[must_use]
    pub fn insertion(&self) -> Insertion {
        self.insertion
    }
}

impl Command for InsertCommand {
    fn execute(&mut self, game: &mut Game) -> Result<()> {
        let positions = game.positions();
        let forbidden = game.forbidden_insertion();
        game.insert_tile(self.insertion)?;
        self.snapshot = Some(InsertSnapshot {
            positions,
            forbidden,
            ejected: *game.board().extra_tile(),
        });
        Ok(())
    }

    fn undo(&mut self, game: &mut Game) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };
        // Pawns come back from the snapshot; shifting back does not move them
        game.set_extra_tile(snapshot.ejected);
        game.shift_board(self.insertion.inverse());
        game.restore_positions(&snapshot.positions);
        game.set_forbidden(snapshot.forbidden);
        game.force_phase(Phase::AwaitingInsert);
    }

    fn describe(&self) -> String {
        format!("insert {}", self.insertion)
    }
}

/// Snapshot taken by [`MoveCommand`] before moving.
#[derive(Clone, Debug)]
struct MoveSnapshot {
    mover: PlayerId,
    position: Position,
    memento: PlayerMemento,
}

/// Walk the active pawn to a destination.
#[derive(Clone, Debug)]
pub struct MoveCommand {
    destination: Position,
    snapshot: Option<MoveSnapshot>,
}

impl MoveCommand {
    #[must_use]
    pub fn new(destination: Position) -> Self {
        Self {
            destination,
            snapshot: None,
        }
    }

    #[must_use]
    pub fn destination(&self) -> Position {
        self.destination
    }
}

impl Command for MoveCommand {
    fn execute(&mut self, game: &mut Game) -> Result<()> {
        let mover = game.current();
        let snapshot = MoveSnapshot {
            mover: mover.id(),
            position: mover.position(),
            memento: mover.memento(),
        };
        game.move_player(self.destination)?;
        self.snapshot = Some(snapshot);
        Ok(())
    }

    fn undo(&mut self, game: &mut Game) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };
        game.restore_player(snapshot.mover, snapshot.position, snapshot.memento);
        game.force_phase(Phase::AwaitingMove);
        game.set_current(snapshot.mover);
        game.clear_winner();
    }

    fn describe(&self) -> String {
        format!("move to {}", self.destination)
    }
}
