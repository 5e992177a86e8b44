//! Grid coordinates and cardinal directions.
//!
//! ## Direction
//!
//! The four push / corridor directions. Rotating a direction a quarter turn
//! clockwise is the fixed permutation `Up -> Right -> Down -> Left -> Up`,
//! which is what tile rotation is built on.
//!
//! ## Position
//!
//! A `(row, col)` value. Row 0 is the top edge, column 0 the left edge.

use serde::{Deserialize, Serialize};

use super::config::BOARD_SIZE;

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in the order the bot enumerates them.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Row and column delta of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// This direction after a quarter turn clockwise.
    #[must_use]
    pub const fn rotated_clockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// This direction after a quarter turn counterclockwise.
    #[must_use]
    pub const fn rotated_counterclockwise(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Whether pushing in this direction slides a row (as opposed to a column).
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A cell on the board.
///
/// Ordered row-major so that position sets can be sorted deterministically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 on the left.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position lies on the 7×7 board.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The neighbouring cell in `direction`, or `None` if it is off the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr as isize)?;
        let col = self.col.checked_add_signed(dc as isize)?;
        let next = Self::new(row, col);
        next.is_on_board().then_some(next)
    }

    /// The cell one step in `direction`, wrapping around the board edge.
    ///
    /// This is how a pawn rides a sliding line: the pawn on the trailing edge
    /// reappears on the opposite edge of the same line.
    #[must_use]
    pub fn wrapping_step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        let size = BOARD_SIZE as isize;
        let row = (self.row as isize + dr as isize).rem_euclid(size);
        let col = (self.col as isize + dc as isize).rem_euclid(size);
        Self::new(row as usize, col as usize)
    }

    /// Iterate over every cell of the board, row-major.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
