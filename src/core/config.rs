//! Hub configuration: seeding, turn order and per-game learning behaviour.
//!
//! Configuration is loaded from an optional TOML file and then overridden by
//! command-line flags. Every field has a default that reproduces the classic
//! behaviour of the two games.
//!
//! ```toml
//! seed = 7
//!
//! [tictactoe]
//! ai_moves_first = true
//!
//! [hexapawn]
//! learn_from_losses = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::learning::ExhaustedPolicy;

/// Hexapawn settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexapawnConfig {
    /// Prune the AI's moves after a loss. Off by default: classic Hexapawn here
    /// only announces the loss and keeps every move.
    pub learn_from_losses: bool,

    /// What the AI does when every remembered move for a state was pruned.
    pub exhausted: ExhaustedPolicy,
}

impl Default for HexapawnConfig {
    fn default() -> Self {
        Self {
            learn_from_losses: false,
            exhausted: ExhaustedPolicy::Forfeit,
        }
    }
}

/// TicTacToe settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeConfig {
    /// Let the AI place the first mark.
    pub ai_moves_first: bool,

    /// What the AI does when every remembered move for a state was pruned.
    pub exhausted: ExhaustedPolicy,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            ai_moves_first: false,
            exhausted: ExhaustedPolicy::Refill,
        }
    }
}

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Seed for the AI's move selection. Drawn from entropy when absent.
    pub seed: Option<u64>,

    pub hexapawn: HexapawnConfig,

    pub tictactoe: TicTacToeConfig,
}

impl HubConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Use a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Let the AI open TicTacToe games.
    pub fn with_ai_first(mut self, ai_first: bool) -> Self {
        self.tictactoe.ai_moves_first = ai_first;
        self
    }

    /// Enable or disable Hexapawn pruning.
    pub fn with_hexapawn_learning(mut self, enabled: bool) -> Self {
        self.hexapawn.learn_from_losses = enabled;
        self
    }
}
