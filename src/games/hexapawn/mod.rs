//! Hexapawn on a 3×3 board.
//!
//! - Each side starts with three pawns on its home row
//! - A pawn steps one row forward into an empty square, or captures one row
//!   diagonally forward
//! - Reaching the opposing home row wins
//! - A side with no legal move on its turn loses
//!
//! There are no draws.

mod game;

pub use game::{Hexapawn, HexapawnMove};
