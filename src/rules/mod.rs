//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each board and side
//! - How moves modify the board
//! - Win conditions
//!
//! The learning layer calls into `RulesEngine` but never interprets
//! game-specific concepts directly.

pub mod engine;

pub use engine::{EndReason, GameResult, RulesEngine};
