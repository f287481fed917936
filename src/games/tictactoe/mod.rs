//! TicTacToe on a 3×3 board.
//!
//! - Sides alternate placing a mark on an empty cell
//! - Three marks in a row, column or diagonal win
//! - A full board with no line is a draw

mod game;

pub use game::{Placement, TicTacToe, LINES};
