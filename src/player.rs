//! Players and the marks they place.

use serde::{Deserialize, Serialize};

/// Identity of a player's mark on the board, assigned at game start.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("player {_0}")]
pub struct MarkId(pub u8);

/// Value held by one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// A player's mark.
    Mark(MarkId),
}

/// Who controls a player's moves.
///
/// `Npc` is part of the data model for forward compatibility; no shipped
/// game drives a non-human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    /// A person at the keyboard.
    Human,
    /// A computer-controlled player.
    Npc,
}

/// A participant in a game. Immutable for the game's duration; the player
/// set is fixed when the engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    id: String,
    name: String,
    mark: MarkId,
    symbol: char,
    kind: PlayerKind,
}

impl Player {
    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> MarkId {
        self.mark
    }

    /// Single-character symbol used when rendering this player's mark.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Whether a human or the computer controls this player.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }
}
