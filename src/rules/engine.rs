//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What moves are legal
//! - How moves modify the board
//! - Win conditions
//!
//! Termination differs per game (Hexapawn stalemates, TicTacToe draws), so it
//! lives with each game rather than on the trait.

use std::fmt::{Debug, Display};

use crate::core::{Board, Glyphs, Side, StateKey};
use crate::error::MoveError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }

    /// The losing side, if the game was decided.
    #[must_use]
    pub fn loser(&self) -> Option<Side> {
        match self {
            GameResult::Winner(side) => Some(side.other()),
            GameResult::Draw => None,
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// A pawn reached the opposing home row.
    GoalRow,
    /// The side to move had no legal moves.
    Stalemate,
    /// Three marks in a line.
    ThreeInRow,
    /// Every cell filled with no line.
    BoardFull,
    /// The AI had no remembered move left and conceded.
    Forfeit,
}

/// Rules engine trait.
///
/// Engines are stateless: every method takes the board explicitly, so one
/// engine value serves every playthrough.
///
/// ## Implementation Notes
///
/// - `legal_moves`: deterministic order; the move memory snapshots it
/// - `check_move` and `legal_moves` must agree on every board
/// - `apply_move`: callers validate first; use `try_apply` when unsure
pub trait RulesEngine {
    /// A move for this game. Plain value, compared by fields.
    type Move: Clone + PartialEq + Debug + Display;

    /// Short name, used for logging and RNG streams.
    fn name(&self) -> &'static str;

    /// Glyphs used for state keys and rendering.
    fn glyphs(&self) -> &'static Glyphs;

    /// The board at the start of a playthrough.
    fn initial_board(&self) -> Board;

    /// All legal moves for `side`, in the engine's fixed order.
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Self::Move>;

    /// Validate a move without applying it.
    fn check_move(&self, board: &Board, mv: &Self::Move, side: Side) -> Result<(), MoveError>;

    /// Apply an already validated move.
    fn apply_move(&self, board: &mut Board, mv: &Self::Move, side: Side);

    /// Whether `side` has won on this board.
    fn has_won(&self, board: &Board, side: Side) -> bool;

    // === Convenience Methods ===

    /// Whether the move is legal for `side`.
    fn is_legal(&self, board: &Board, mv: &Self::Move, side: Side) -> bool {
        self.check_move(board, mv, side).is_ok()
    }

    /// Validate and apply a move. The board is untouched on error.
    fn try_apply(&self, board: &mut Board, mv: &Self::Move, side: Side) -> Result<(), MoveError> {
        self.check_move(board, mv, side)?;
        self.apply_move(board, mv, side);
        Ok(())
    }

    /// State key of the board in this game's glyphs.
    fn state_key(&self, board: &Board) -> StateKey {
        board.state_key(self.glyphs())
    }
}
