//! The 7×7 board plus the spare tile.
//!
//! ## Sliding
//!
//! An [`Insertion`] pushes the spare tile into one of the slidable lines
//! (rows or columns 1, 3, 5) from the side opposite the push direction. Every
//! tile of the line moves one cell; the tile falling off the far end becomes
//! the new spare. Sliding the inverse insertion restores the board exactly.
//!
//! ## Reachability
//!
//! Two neighbouring cells are connected when each tile opens towards the
//! other. [`Board::reachable_positions`] is a plain BFS over that relation.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::layout::{fixed_tile, mobile_deck};
use super::tile::{Rotation, Shape, Tile};
use super::treasure::Treasure;
use crate::core::{Direction, GameRng, MazeError, Position, Result, BOARD_SIZE, SLIDABLE_LINES};

/// A validated `(direction, index)` pair: push the spare tile into line
/// `index` towards `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insertion {
    direction: Direction,
    index: usize,
}

impl Insertion {
    /// Validate a raw pair.
    ///
    /// Even lines hold glued tiles and yield [`MazeError::FixedLine`];
    /// indices past the board yield [`MazeError::OutOfRange`].
    pub fn new(direction: Direction, index: usize) -> Result<Self> {
        if index >= BOARD_SIZE {
            return Err(MazeError::OutOfRange { index });
        }
        if !SLIDABLE_LINES.contains(&index) {
            return Err(MazeError::FixedLine { index });
        }
        Ok(Self { direction, index })
    }

    /// The 12 legal insertions, lines outer and directions inner.
    pub fn all() -> impl Iterator<Item = Insertion> {
        SLIDABLE_LINES.into_iter().flat_map(|index| {
            Direction::ALL
                .into_iter()
                .map(move |direction| Insertion { direction, index })
        })
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }

    /// The insertion that puts the board back: same line, opposite push.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            direction: self.direction.opposite(),
            index: self.index,
        }
    }

    /// Whether `position` lies on the line this insertion slides.
    #[must_use]
    pub const fn contains(self, position: Position) -> bool {
        if self.direction.is_horizontal() {
            position.row == self.index
        } else {
            position.col == self.index
        }
    }

    /// Cells of the slid line, from the entry edge to the exit edge.
    #[must_use]
    pub fn line(self) -> [Position; BOARD_SIZE] {
        std::array::from_fn(|i| {
            let along = match self.direction {
                Direction::Right | Direction::Down => i,
                Direction::Left | Direction::Up => BOARD_SIZE - 1 - i,
            };
            if self.direction.is_horizontal() {
                Position::new(self.index, along)
            } else {
                Position::new(along, self.index)
            }
        })
    }
}

impl std::fmt::Display for Insertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.direction, self.index)
    }
}

const FILLER: Tile = Tile::new(Shape::Straight, Rotation::Deg0);

/// Grid type: `grid[row][col]`.
pub type Grid = [[Tile; BOARD_SIZE]; BOARD_SIZE];

/// The maze: 49 placed tiles and one spare.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    extra: Tile,
}

impl Board {
    /// Lay out a fresh board: fixed tiles in place, the mobile deck shuffled
    /// into the remaining cells, the leftover tile as spare.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        // The deck is exactly one tile larger than the mobile cells, so the
        // filler is never actually used.
        let mut deck = mobile_deck(rng).into_iter();
        let mut grid = [[FILLER; BOARD_SIZE]; BOARD_SIZE];

        for position in Position::all() {
            grid[position.row][position.col] = match fixed_tile(position) {
                Some(tile) => tile,
                None => deck.next().unwrap_or(FILLER),
            };
        }
        let extra = deck.next().unwrap_or(FILLER);

        Self { grid, extra }
    }

    /// Build a board from an explicit layout.
    #[must_use]
    pub const fn from_tiles(grid: Grid, extra: Tile) -> Self {
        Self { grid, extra }
    }

    /// Tile at `position`, or `None` off the board.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.grid.get(position.row)?.get(position.col)
    }

    /// Tile at `(row, col)`, or `None` off the board.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tile_at(Position::new(row, col))
    }

    #[must_use]
    pub const fn extra_tile(&self) -> &Tile {
        &self.extra
    }

    /// Mutable access to the spare, for rotation.
    pub fn extra_tile_mut(&mut self) -> &mut Tile {
        &mut self.extra
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Validate the pair and slide.
    pub fn slide(&mut self, direction: Direction, index: usize) -> Result<()> {
        let insertion = Insertion::new(direction, index)?;
        self.shift(insertion);
        Ok(())
    }

    /// Slide a validated insertion. Cannot fail.
    pub fn shift(&mut self, insertion: Insertion) {
        let line = insertion.line();
        let exit = line[BOARD_SIZE - 1];
        let ejected = self.grid[exit.row][exit.col];

        for i in (1..BOARD_SIZE).rev() {
            let (to, from) = (line[i], line[i - 1]);
            self.grid[to.row][to.col] = self.grid[from.row][from.col];
        }

        let entry = line[0];
        self.grid[entry.row][entry.col] = self.extra;
        self.extra = ejected;
    }

    /// The neighbour in `direction`, if both tiles open towards each other.
    #[must_use]
    pub fn connected(&self, from: Position, direction: Direction) -> Option<Position> {
        let to = from.step(direction)?;
        let (a, b) = (self.tile_at(from)?, self.tile_at(to)?);
        (a.opens(direction) && b.opens(direction.opposite())).then_some(to)
    }

    /// Every cell reachable from `start` through open corridors, `start`
    /// included. Empty if `start` is off the board.
    #[must_use]
    pub fn reachable_positions(&self, start: Position) -> FxHashSet<Position> {
        let mut visited = FxHashSet::default();
        if !start.is_on_board() {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for direction in Direction::ALL {
                if let Some(next) = self.connected(current, direction) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        visited
    }

    #[must_use]
    pub fn is_reachable(&self, from: Position, to: Position) -> bool {
        self.reachable_positions(from).contains(&to)
    }

    /// Where `treasure` sits on the grid. `None` when it is on the spare.
    #[must_use]
    pub fn find_treasure(&self, treasure: Treasure) -> Option<Position> {
        Position::all().find(|p| self.grid[p.row][p.col].treasure() == Some(treasure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal() -> Tile {
        Tile::new(Shape::Straight, Rotation::Deg90)
    }

    /// A board of horizontal corridors with distinct treasures on column 0
    /// of row 1 and column 3 of row 3, so moves are traceable.
    fn marked_board() -> Board {
        let mut grid = [[horizontal(); BOARD_SIZE]; BOARD_SIZE];
        grid[1][0] = horizontal().with_treasure(Treasure::Bat);
        grid[3][3] = horizontal().with_treasure(Treasure::Owl);
        Board::from_tiles(grid, Tile::new(Shape::Corner, Rotation::Deg0).with_treasure(Treasure::Pig))
    }

    #[test]
    fn test_insertion_validation() {
        assert!(Insertion::new(Direction::Down, 3).is_ok());
        assert_eq!(Insertion::new(Direction::Down, 0), Err(MazeError::FixedLine { index: 0 }));
        assert_eq!(Insertion::new(Direction::Left, 4), Err(MazeError::FixedLine { index: 4 }));
        assert_eq!(Insertion::new(Direction::Up, 7), Err(MazeError::OutOfRange { index: 7 }));
    }

    #[test]
    fn test_all_insertions() {
        let all: Vec<_> = Insertion::all().collect();
        assert_eq!(all.len(), 12);
        assert_eq!(all[0], Insertion::new(Direction::Up, 1).unwrap());
        assert_eq!(all[3], Insertion::new(Direction::Right, 1).unwrap());
        assert_eq!(all[11], Insertion::new(Direction::Right, 5).unwrap());
    }

    #[test]
    fn test_line_order() {
        let right = Insertion::new(Direction::Right, 1).unwrap().line();
        assert_eq!(right[0], Position::new(1, 0));
        assert_eq!(right[6], Position::new(1, 6));

        let up = Insertion::new(Direction::Up, 5).unwrap().line();
        assert_eq!(up[0], Position::new(6, 5));
        assert_eq!(up[6], Position::new(0, 5));
    }

    #[test]
    fn test_slide_right() {
        let mut board = marked_board();
        board.slide(Direction::Right, 1).unwrap();

        assert_eq!(board.tile(1, 0).unwrap().treasure(), Some(Treasure::Pig));
        assert_eq!(board.tile(1, 1).unwrap().treasure(), Some(Treasure::Bat));
        assert_eq!(board.extra_tile(), &horizontal());
    }

    #[test]
    fn test_slide_up_ejects_top() {
        let mut board = marked_board();
        board.slide(Direction::Up, 3).unwrap();

        assert_eq!(board.tile(2, 3).unwrap().treasure(), Some(Treasure::Owl));
        assert_eq!(board.tile(6, 3).unwrap().treasure(), Some(Treasure::Pig));
        assert_eq!(board.find_treasure(Treasure::Pig), Some(Position::new(6, 3)));
    }

    #[test]
    fn test_slide_fixed_line_leaves_board() {
        let mut board = marked_board();
        let before = board.clone();
        assert_eq!(board.slide(Direction::Down, 0), Err(MazeError::FixedLine { index: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_slide_then_inverse_restores() {
        let mut rng = GameRng::new(3);
        let mut board = Board::generate(&mut rng);
        let before = board.clone();

        for insertion in Insertion::all() {
            board.shift(insertion);
            board.shift(insertion.inverse());
            assert_eq!(board, before, "{insertion} did not invert");
        }
    }

    #[test]
    fn test_generate_places_fixed_tiles() {
        let mut rng = GameRng::new(11);
        let board = Board::generate(&mut rng);

        let fixed = Position::all()
            .filter(|p| board.tile_at(*p).unwrap().is_fixed())
            .count();
        assert_eq!(fixed, 16);
        assert!(!board.extra_tile().is_fixed());

        let treasures = Position::all()
            .filter_map(|p| board.tile_at(p).unwrap().treasure())
            .count()
            + usize::from(board.extra_tile().has_treasure());
        assert_eq!(treasures, 24);
    }

    #[test]
    fn test_reachable_straight_corridor() {
        let board = marked_board();
        let reachable = board.reachable_positions(Position::new(2, 3));

        assert_eq!(reachable.len(), BOARD_SIZE);
        assert!(reachable.iter().all(|p| p.row == 2));
        assert!(!board.is_reachable(Position::new(2, 3), Position::new(3, 3)));
    }

    #[test]
    fn test_reachable_requires_both_sides_open() {
        let mut grid = [[horizontal(); BOARD_SIZE]; BOARD_SIZE];
        // (0,0) opens down, but (1,0) is horizontal and closed upward
        grid[0][0] = Tile::new(Shape::Corner, Rotation::Deg90);
        let board = Board::from_tiles(grid, horizontal());

        assert!(!board.is_reachable(Position::new(0, 0), Position::new(1, 0)));
        assert!(board.is_reachable(Position::new(0, 0), Position::new(0, 6)));
    }

    #[test]
    fn test_reachable_includes_start_when_isolated() {
        let grid = [[Tile::new(Shape::Straight, Rotation::Deg0); BOARD_SIZE]; BOARD_SIZE];
        let board = Board::from_tiles(grid, horizontal());

        // Vertical corridors: column 0 only, never a neighbouring column
        let reachable = board.reachable_positions(Position::new(3, 0));
        assert!(reachable.contains(&Position::new(3, 0)));
        assert!(reachable.iter().all(|p| p.col == 0));
        assert!(board.reachable_positions(Position::new(9, 0)).is_empty());
    }

    #[test]
    fn test_find_treasure_on_spare() {
        let board = marked_board();
        assert_eq!(board.find_treasure(Treasure::Pig), None);
        assert_eq!(board.find_treasure(Treasure::Bat), Some(Position::new(1, 0)));
    }
}
