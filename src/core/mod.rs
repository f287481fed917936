//! Core types: sides, the board and its state keys, RNG, configuration.
//!
//! Everything here is game-agnostic. The two games differ only in their
//! rules engines and glyph sets.

pub mod board;
pub mod config;
pub mod player;
pub mod rng;

pub use board::{Board, Cell, Glyphs, StateKey, CELLS, COLS, ROWS};
pub use config::{HexapawnConfig, HubConfig, TicTacToeConfig};
pub use player::Side;
pub use rng::GameRng;
