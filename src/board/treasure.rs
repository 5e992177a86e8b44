//! Objective treasures.
//!
//! Twelve treasures are printed on fixed tiles and twelve on mobile tiles.
//! The same 24 identities make up the objective deck dealt to players.

use serde::{Deserialize, Serialize};

use crate::core::TREASURE_COUNT;

/// A treasure printed on a tile and listed on an objective card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Treasure {
    // Mobile Tee tiles
    Bat,
    Dragon,
    Ghost,
    Specter,
    Pig,
    Witch,
    // Mobile Corner tiles
    Butterfly,
    Owl,
    Beetle,
    Lizard,
    Mouse,
    Spider,
    // Fixed tiles
    Book,
    Candlestick,
    Chest,
    Crown,
    Helmet,
    Keys,
    Map,
    Money,
    Ring,
    Sapphire,
    Skull,
    Sword,
}

impl Treasure {
    /// The whole objective deck, unshuffled.
    pub const ALL: [Treasure; TREASURE_COUNT] = [
        Treasure::Bat,
        Treasure::Dragon,
        Treasure::Ghost,
        Treasure::Specter,
        Treasure::Pig,
        Treasure::Witch,
        Treasure::Butterfly,
        Treasure::Owl,
        Treasure::Beetle,
        Treasure::Lizard,
        Treasure::Mouse,
        Treasure::Spider,
        Treasure::Book,
        Treasure::Candlestick,
        Treasure::Chest,
        Treasure::Crown,
        Treasure::Helmet,
        Treasure::Keys,
        Treasure::Map,
        Treasure::Money,
        Treasure::Ring,
        Treasure::Sapphire,
        Treasure::Skull,
        Treasure::Sword,
    ];

    /// Treasures printed on mobile Tee tiles.
    pub const MOBILE_TEE: [Treasure; 6] = [
        Treasure::Bat,
        Treasure::Dragon,
        Treasure::Ghost,
        Treasure::Specter,
        Treasure::Pig,
        Treasure::Witch,
    ];

    /// Treasures printed on mobile Corner tiles.
    pub const MOBILE_CORNER: [Treasure; 6] = [
        Treasure::Butterfly,
        Treasure::Owl,
        Treasure::Beetle,
        Treasure::Lizard,
        Treasure::Mouse,
        Treasure::Spider,
    ];

    /// Stable lowercase name, used for display and by front ends as an asset key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Treasure::Bat => "bat",
            Treasure::Dragon => "dragon",
            Treasure::Ghost => "ghost",
            Treasure::Specter => "specter",
            Treasure::Pig => "pig",
            Treasure::Witch => "witch",
            Treasure::Butterfly => "butterfly",
            Treasure::Owl => "owl",
            Treasure::Beetle => "beetle",
            Treasure::Lizard => "lizard",
            Treasure::Mouse => "mouse",
            Treasure::Spider => "spider",
            Treasure::Book => "book",
            Treasure::Candlestick => "candlestick",
            Treasure::Chest => "chest",
            Treasure::Crown => "crown",
            Treasure::Helmet => "helmet",
            Treasure::Keys => "keys",
            Treasure::Map => "map",
            Treasure::Money => "money",
            Treasure::Ring => "ring",
            Treasure::Sapphire => "sapphire",
            Treasure::Skull => "skull",
            Treasure::Sword => "sword",
        }
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
