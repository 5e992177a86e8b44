//! The maze board: tiles, treasures, layout and the sliding grid.

pub mod grid;
pub mod layout;
pub mod tile;
pub mod treasure;

pub use grid::{Board, Grid, Insertion};
pub use tile::{Connectors, Rotation, RotationDirection, Shape, Tile};
pub use treasure::Treasure;
