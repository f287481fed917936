//! Side identification.
//!
//! Both games are strictly two-sided: the human (`Side::Player`) and the
//! computer (`Side::Opponent`). Cells on the board carry the same distinction
//! through [`Cell`](super::board::Cell).

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// The cell value this side places on the board.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Side::Player => Cell::Player,
            Side::Opponent => Cell::Opponent,
        }
    }

    /// Whether this is the computer side.
    #[must_use]
    pub const fn is_ai(self) -> bool {
        matches!(self, Side::Opponent)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "AI"),
        }
    }
}
