//! Maze tiles.
//!
//! A tile is a corridor shape in some orientation, optionally carrying a
//! treasure. The open sides are never stored: they are derived from the
//! shape's base connectors rotated by the current orientation, so rotating
//! a tile can never leave its connectors stale.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::treasure::Treasure;
use crate::core::Direction;

/// Corridor topology of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Two opposite openings.
    Straight,
    /// Two adjacent openings.
    Corner,
    /// Three openings.
    Tee,
}

impl Shape {
    /// Open sides at 0°.
    #[must_use]
    pub fn base_connectors(self) -> &'static [Direction] {
        match self {
            Shape::Straight => &[Direction::Up, Direction::Down],
            Shape::Corner => &[Direction::Up, Direction::Right],
            Shape::Tee => &[Direction::Left, Direction::Down, Direction::Right],
        }
    }
}

/// Orientation of a tile, in quarter turns clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Build from a number of clockwise quarter turns (any value, taken mod 4).
    #[must_use]
    pub const fn from_quarter_turns(turns: usize) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// Build from degrees. Negative and oversized angles wrap into [0, 360).
    ///
    /// Returns `None` if `degrees` is not a multiple of 90.
    ///
    /// ```
    /// use shifting_maze::board::Rotation;
    ///
    /// assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Deg270));
    /// assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
    /// assert_eq!(Rotation::from_degrees(45), None);
    /// ```
    #[must_use]
    pub const fn from_degrees(degrees: i32) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        Some(Self::from_quarter_turns(degrees.rem_euclid(360) as usize / 90))
    }

    /// Number of clockwise quarter turns (0..4).
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }

    /// Angle in degrees (0, 90, 180 or 270).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.quarter_turns() as u16 * 90
    }

    /// One more quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// One quarter turn counterclockwise.
    #[must_use]
    pub const fn counterclockwise(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 3)
    }
}

/// Which way to turn the spare tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    Counterclockwise,
}

/// Open sides of a tile. At most three, so no heap allocation.
pub type Connectors = SmallVec<[Direction; 3]>;

/// A single maze tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    shape: Shape,
    rotation: Rotation,
    treasure: Option<Treasure>,
    fixed: bool,
}

impl Tile {
    /// Create a mobile tile without treasure.
    #[must_use]
    pub const fn new(shape: Shape, rotation: Rotation) -> Self {
        Self {
            shape,
            rotation,
            treasure: None,
            fixed: false,
        }
    }

    /// Put a treasure on this tile (builder pattern).
    #[must_use]
    pub fn with_treasure(mut self, treasure: Treasure) -> Self {
        self.treasure = Some(treasure);
        self
    }

    /// Glue this tile to the board (builder pattern).
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub const fn treasure(&self) -> Option<Treasure> {
        self.treasure
    }

    #[must_use]
    pub const fn has_treasure(&self) -> bool {
        self.treasure.is_some()
    }

    /// Whether the tile is glued to the board (even row, even column).
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Turn the tile a quarter turn clockwise.
    pub fn rotate_clockwise(&mut self) {
        self.rotation = self.rotation.clockwise();
    }

    /// Turn the tile a quarter turn counterclockwise.
    pub fn rotate_counterclockwise(&mut self) {
        self.rotation = self.rotation.counterclockwise();
    }

    /// Turn the tile one quarter turn in `direction`.
    pub fn rotate(&mut self, direction: RotationDirection) {
        match direction {
            RotationDirection::Clockwise => self.rotate_clockwise(),
            RotationDirection::Counterclockwise => self.rotate_counterclockwise(),
        }
    }

    /// Open sides for the current orientation.
    ///
    /// Recomputed on every call from shape and rotation.
    #[must_use]
    pub fn connectors(&self) -> Connectors {
        let turns = self.rotation.quarter_turns();
        self.shape
            .base_connectors()
            .iter()
            .map(|&dir| (0..turns).fold(dir, |d, _| d.rotated_clockwise()))
            .collect()
    }

    /// Whether the tile has an opening towards `direction`.
    #[must_use]
    pub fn opens(&self, direction: Direction) -> bool {
        self.connectors().contains(&direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut c: Connectors) -> Vec<Direction> {
        c.sort();
        c.into_vec()
    }

    #[test]
    fn test_base_connectors() {
        let straight = Tile::new(Shape::Straight, Rotation::Deg0);
        let corner = Tile::new(Shape::Corner, Rotation::Deg0);
        let tee = Tile::new(Shape::Tee, Rotation::Deg0);

        assert_eq!(sorted(straight.connectors()), vec![Direction::Up, Direction::Down]);
        assert_eq!(sorted(corner.connectors()), vec![Direction::Up, Direction::Right]);
        assert_eq!(
            sorted(tee.connectors()),
            vec![Direction::Down, Direction::Left, Direction::Right]
        );
    }

    #[test]
    fn test_rotated_connectors() {
        let straight = Tile::new(Shape::Straight, Rotation::Deg90);
        assert_eq!(sorted(straight.connectors()), vec![Direction::Left, Direction::Right]);

        // Corner at 180° opens down and left
        let corner = Tile::new(Shape::Corner, Rotation::Deg180);
        assert_eq!(sorted(corner.connectors()), vec![Direction::Down, Direction::Left]);

        // Tee at 270° points right
        let tee = Tile::new(Shape::Tee, Rotation::Deg270);
        assert_eq!(
            sorted(tee.connectors()),
            vec![Direction::Up, Direction::Down, Direction::Right]
        );
        assert!(!tee.opens(Direction::Left));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut tile = Tile::new(Shape::Corner, Rotation::Deg270);
        tile.rotate_clockwise();
        assert_eq!(tile.rotation(), Rotation::Deg0);

        tile.rotate_counterclockwise();
        assert_eq!(tile.rotation(), Rotation::Deg270);
        assert_eq!(tile.rotation().degrees(), 270);
    }

    #[test]
    fn test_four_turns_is_identity() {
        let original = Tile::new(Shape::Tee, Rotation::Deg90).with_treasure(Treasure::Owl);
        let mut tile = original;
        for _ in 0..4 {
            tile.rotate(RotationDirection::Counterclockwise);
        }
        assert_eq!(tile, original);
    }

    #[test]
    fn test_rotation_keeps_identity() {
        let mut tile = Tile::new(Shape::Tee, Rotation::Deg0)
            .with_treasure(Treasure::Crown)
            .fixed();
        tile.rotate_clockwise();

        assert_eq!(tile.treasure(), Some(Treasure::Crown));
        assert!(tile.is_fixed());
        assert_eq!(tile.shape(), Shape::Tee);
    }

    #[test]
    fn test_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(-270), Some(Rotation::Deg90));
        assert_eq!(Rotation::from_degrees(720), Some(Rotation::Deg0));
        assert_eq!(Rotation::from_degrees(100), None);
    }
}
