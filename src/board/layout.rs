//! Board composition: the fixed-tile table and the mobile deck.
//!
//! Sixteen cells (even row, even column) hold glued tiles:
//! - the four corners are Corner tiles opening towards the interior,
//! - the other twelve are Tee tiles, each carrying one of the fixed
//!   treasures, pointing towards the inside of the board.
//!
//! The mobile deck holds 34 tiles: 33 fill the remaining cells and the last
//! one becomes the spare.

use super::tile::{Rotation, Shape, Tile};
use super::treasure::Treasure;
use crate::core::{GameRng, Position};

/// Number of tiles in the mobile deck (33 cells + the spare).
pub const MOBILE_DECK_SIZE: usize = 34;

const PLAIN_CORNERS: usize = 10;
const PLAIN_STRAIGHTS: usize = 12;

/// Whether a cell holds a glued tile.
#[must_use]
pub const fn is_fixed_cell(position: Position) -> bool {
    position.row % 2 == 0 && position.col % 2 == 0
}

/// Treasure printed on the fixed tile at `position`, if any.
#[must_use]
pub const fn fixed_treasure(position: Position) -> Option<Treasure> {
    match (position.row, position.col) {
        (0, 2) => Some(Treasure::Skull),
        (0, 4) => Some(Treasure::Sword),
        (2, 0) => Some(Treasure::Money),
        (2, 2) => Some(Treasure::Keys),
        (2, 4) => Some(Treasure::Sapphire),
        (2, 6) => Some(Treasure::Helmet),
        (4, 0) => Some(Treasure::Book),
        (4, 2) => Some(Treasure::Crown),
        (4, 4) => Some(Treasure::Chest),
        (4, 6) => Some(Treasure::Candlestick),
        (6, 2) => Some(Treasure::Map),
        (6, 4) => Some(Treasure::Ring),
        _ => None,
    }
}

/// The glued tile for a fixed cell, or `None` for a mobile cell.
///
/// Tee at 0° points down; corners open inward.
#[must_use]
pub fn fixed_tile(position: Position) -> Option<Tile> {
    if !is_fixed_cell(position) {
        return None;
    }

    let tile = match (position.row, position.col) {
        (0, 0) => Tile::new(Shape::Corner, Rotation::Deg90),
        (0, 6) => Tile::new(Shape::Corner, Rotation::Deg180),
        (6, 0) => Tile::new(Shape::Corner, Rotation::Deg0),
        (6, 6) => Tile::new(Shape::Corner, Rotation::Deg270),
        (row, col) => {
            let rotation = match (row, col) {
                (0, _) => Rotation::Deg0,
                (6, _) => Rotation::Deg180,
                (_, 0) => Rotation::Deg270,
                (_, 6) => Rotation::Deg90,
                // Interior: the upper pair points down, the lower pair up
                (2, _) => Rotation::Deg0,
                _ => Rotation::Deg180,
            };
            let tee = Tile::new(Shape::Tee, rotation);
            match fixed_treasure(position) {
                Some(treasure) => tee.with_treasure(treasure),
                None => tee,
            }
        }
    };

    Some(tile.fixed())
}

/// Build and shuffle the 34-tile mobile deck.
///
/// Every tile gets a random orientation.
#[must_use]
pub fn mobile_deck(rng: &mut GameRng) -> Vec<Tile> {
    let mut deck = Vec::with_capacity(MOBILE_DECK_SIZE);

    let mut tee_treasures = Treasure::MOBILE_TEE;
    let mut corner_treasures = Treasure::MOBILE_CORNER;
    rng.shuffle(&mut tee_treasures);
    rng.shuffle(&mut corner_treasures);

    for treasure in tee_treasures {
        deck.push(random_tile(Shape::Tee, rng).with_treasure(treasure));
    }
    for treasure in corner_treasures {
        deck.push(random_tile(Shape::Corner, rng).with_treasure(treasure));
    }
    for _ in 0..PLAIN_CORNERS {
        deck.push(random_tile(Shape::Corner, rng));
    }
    for _ in 0..PLAIN_STRAIGHTS {
        deck.push(random_tile(Shape::Straight, rng));
    }

    rng.shuffle(&mut deck);
    deck
}

fn random_tile(shape: Shape, rng: &mut GameRng) -> Tile {
    Tile::new(shape, Rotation::from_quarter_turns(rng.gen_range_usize(0..4)))
}
