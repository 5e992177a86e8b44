//! # shifting-maze
//!
//! Game engine for a tile-sliding maze board game: players push a spare
//! tile into a row or column of a 7×7 board to reshape the corridors, then
//! walk their pawn to collect secret objective treasures and finally return
//! home.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, audio or input handling. Front ends
//!    read the query surface of [`Maze`] and call its commands.
//!
//! 2. **Everything Reversible**: Every insertion and move is a command with
//!    an exact undo, and the bot searches with those same commands.
//!
//! 3. **Deterministic**: All randomness flows from one seeded `GameRng`, so
//!    a seed reproduces the board, the deal and every bot fallback.
//!
//! ## Modules
//!
//! - `core`: positions, directions, players, RNG, configuration, errors
//! - `board`: tiles, treasures, layout, sliding and reachability
//! - `game`: players' objectives and the turn state machine
//! - `history`: reversible commands and undo / redo stacks
//! - `bot`: strategies and the trial simulator
//! - `facade`: the `Maze` entry point and change notification

pub mod board;
pub mod bot;
pub mod core;
pub mod facade;
pub mod game;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    Direction, ErrorCategory, GameConfig, GameRng, MazeError, PlayerId, PlayerKind, PlayerMap,
    Position, Result,
};

pub use crate::board::{Board, Insertion, Rotation, RotationDirection, Shape, Tile, Treasure};

pub use crate::game::{Game, GameSetup, Phase, Player};

pub use crate::history::{Command, History, InsertCommand, MoveCommand};

pub use crate::bot::{GreedyStrategy, RandomStrategy, Simulator, Strategy, TurnPlan};

pub use crate::facade::{Dispatch, Maze, Observer, ObserverId};
