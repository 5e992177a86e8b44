//! A pawn on the board and its objective deck.
//!
//! ## Objectives
//!
//! Each player holds a hidden stack of objective treasures. Exactly one is
//! revealed at a time; when the pawn lands on the tile carrying it, the
//! treasure is logged as found and the next card is revealed.
//!
//! ## Mementos
//!
//! The stack and the found log are `im::Vector`s, so a [`PlayerMemento`] is
//! a structural-sharing copy rather than a deep clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Treasure;
use crate::core::{PlayerId, Position};

/// A player's pawn and objective state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    start: Position,
    position: Position,

    // === Objectives ===
    /// Hidden cards, next to reveal at the back.
    remaining: Vector<Treasure>,
    /// Revealed objective, `None` once the deck is exhausted.
    current: Option<Treasure>,
    /// Found objectives, in order.
    found: Vector<Treasure>,
}

/// Snapshot of everything a move can change on a player, except position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerMemento {
    remaining: Vector<Treasure>,
    current: Option<Treasure>,
    found: Vector<Treasure>,
}

impl Player {
    /// Create a player standing on `start` with `objectives` in reveal order.
    ///
    /// The first objective is revealed immediately.
    #[must_use]
    pub fn new(id: PlayerId, start: Position, objectives: impl IntoIterator<Item = Treasure>) -> Self {
        // Stored reversed so revealing is a pop from the back
        let mut cards: Vec<Treasure> = objectives.into_iter().collect();
        cards.reverse();
        let mut remaining: Vector<Treasure> = cards.into_iter().collect();
        let current = remaining.pop_back();

        Self {
            id,
            start,
            position: start,
            remaining,
            current,
            found: Vector::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Home corner. Never changes.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// The revealed objective.
    #[must_use]
    pub const fn current_objective(&self) -> Option<Treasure> {
        self.current
    }

    /// Found objectives, oldest first.
    #[must_use]
    pub fn found_objectives(&self) -> &Vector<Treasure> {
        &self.found
    }

    /// Hidden cards plus the revealed one.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.remaining.len() + usize::from(self.current.is_some())
    }

    /// No card left to reveal and none revealed.
    #[must_use]
    pub fn has_finished_objectives(&self) -> bool {
        self.current.is_none() && self.remaining.is_empty()
    }

    /// Whether the pawn is back home.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.position == self.start
    }

    /// Log the revealed objective as found and reveal the next one.
    ///
    /// Returns the found treasure, or `None` if nothing was revealed.
    pub fn objective_found(&mut self) -> Option<Treasure> {
        let found = self.current.take()?;
        self.found.push_back(found);
        self.current = self.remaining.pop_back();
        Some(found)
    }

    #[must_use]
    pub fn memento(&self) -> PlayerMemento {
        PlayerMemento {
            remaining: self.remaining.clone(),
            current: self.current,
            found: self.found.clone(),
        }
    }

    /// Put the objective state back exactly as captured.
    pub fn restore(&mut self, memento: PlayerMemento) {
        self.remaining = memento.remaining;
        self.current = memento.current;
        self.found = memento.found;
    }
}
