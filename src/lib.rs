//! # adaptive-games
//!
//! Hexapawn and TicTacToe against a computer opponent that adapts across
//! replays by state-action elimination.
//!
//! ## Design Principles
//!
//! 1. **Typed boards**: cells are `Empty`, `Player` or `Opponent`; glyphs only
//!    appear in state keys and rendering.
//!
//! 2. **Owned learning state**: each game's move memory belongs to its
//!    session. Nothing is global, so tests build isolated instances.
//!
//! 3. **Seedable choice**: the AI picks through a `Picker`; the default is a
//!    ChaCha8 `GameRng`, so a seed reproduces every decision.
//!
//! ## How the AI learns
//!
//! The first time the AI meets a board it remembers every legal move there.
//! On its turn it plays one remembered move at random. When it loses a
//! TicTacToe game it forgets each move it played in that game. Hexapawn only
//! observes results unless its learning is switched on.
//!
//! ## Modules
//!
//! - `core`: Board, cells, sides, state keys, RNG, configuration
//! - `rules`: RulesEngine trait, results and end reasons
//! - `games`: Hexapawn and TicTacToe rules engines
//! - `learning`: Move memory, selector, learners and the adaptive AI
//! - `session`: Game loops and the frontend boundary
//! - `console`: Text frontend and main menu

pub mod console;
pub mod core;
pub mod error;
pub mod games;
pub mod learning;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, Glyphs, HubConfig, Side, StateKey};

pub use crate::error::{BoardParseError, ConfigError, InputError, MoveError, SessionError};

pub use crate::games::{Hexapawn, HexapawnMove, Placement, TicTacToe};

pub use crate::rules::{EndReason, GameResult, RulesEngine};

pub use crate::learning::{
    AdaptiveAi, ExhaustedPolicy, History, LearningReport, MoveMemory, MoveSelector, NotifyOnly,
    OutcomeLearner, Picker, PruneOnLoss,
};

pub use crate::session::{Frontend, GameEvent, HexapawnSession, Hub, Tally, TicTacToeSession};
