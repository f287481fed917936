//! Both game sessions, constructed once per process.

use tracing::info;

use super::{HexapawnSession, TicTacToeSession};
use crate::core::{GameRng, HubConfig};

/// The two sessions and the seed they were built from.
///
/// Each game draws from its own RNG stream and owns its own memory, so what
/// the AI learns in one game never leaks into the other, while leaving a game
/// and coming back keeps everything it learned.
pub struct Hub {
    pub hexapawn: HexapawnSession,
    pub tictactoe: TicTacToeSession,
    seed: u64,
}

impl Hub {
    pub fn from_config(config: &HubConfig) -> Self {
        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = root.seed(), "starting hub");

        Self {
            hexapawn: HexapawnSession::from_config(&config.hexapawn, root.for_context("hexapawn")),
            tictactoe: TicTacToeSession::from_config(
                &config.tictactoe,
                root.for_context("tictactoe"),
            ),
            seed: root.seed(),
        }
    }

    /// Seed of the root RNG; pass it back with `--seed` to replay the AI's choices.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
