//! Command history with undo and redo.
//!
//! Every mutating game action goes through a [`Command`]: it snapshots the
//! state it is about to perturb, applies the change, and can later put that
//! state back exactly. [`History`] keeps the executed commands on an undo
//! stack and the undone ones on a redo stack.
//!
//! The bot reuses the same machinery for its trial insertions, so a trial
//! and a real move can never diverge in how they change the game.
//!
//! ```
//! use shifting_maze::board::Insertion;
//! use shifting_maze::core::{Direction, GameRng};
//! use shifting_maze::game::{Game, Phase};
//! use shifting_maze::history::{History, InsertCommand};
//!
//! let mut game = Game::start(2, &mut GameRng::new(42)).unwrap();
//! let before = game.clone();
//! let mut history = History::new();
//!
//! let insertion = Insertion::new(Direction::Down, 3).unwrap();
//! history.execute(&mut game, Box::new(InsertCommand::new(insertion))).unwrap();
//! assert_eq!(game.phase(), Phase::AwaitingMove);
//!
//! assert!(history.undo(&mut game));
//! assert_eq!(game, before);
//! ```

mod command;
mod manager;

pub use command::{Command, InsertCommand, MoveCommand};
pub use manager::History;
