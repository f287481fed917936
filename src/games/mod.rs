//! The two games: rules engines and move types.

pub mod hexapawn;
pub mod tictactoe;

pub use hexapawn::{Hexapawn, HexapawnMove};
pub use tictactoe::{Placement, TicTacToe};
