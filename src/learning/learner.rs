//! Outcome learners: what the AI does with a finished playthrough.
//!
//! - `PruneOnLoss`: after an AI loss, every move the AI chose is removed from
//!   the state it was chosen in. Wins and draws change nothing.
//! - `NotifyOnly`: observes the result and never touches the memory.
//!
//! TicTacToe uses `PruneOnLoss`. Hexapawn uses `NotifyOnly` unless its
//! learning is switched on in the configuration.

use tracing::{debug, info};

use super::history::History;
use super::memory::MoveMemory;
use crate::core::Side;
use crate::rules::GameResult;

/// What a learner did at game end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearningReport {
    /// The AI lost; `removed` candidates were pruned.
    Pruned { removed: usize },
    /// The AI won or drew; the memory was kept as is.
    Kept(GameResult),
    /// The learner only observed the result.
    Observed(GameResult),
}

/// Updates the move memory when a playthrough ends.
pub trait OutcomeLearner<M> {
    /// Apply the result of a playthrough whose AI decisions are `history`.
    fn on_game_end(
        &self,
        memory: &mut MoveMemory<M>,
        history: &History<M>,
        result: GameResult,
    ) -> LearningReport;
}

/// Removes every move the AI played in a lost game.
#[derive(Clone, Copy, Debug, Default)]
pub struct PruneOnLoss;

impl<M: Clone + PartialEq> OutcomeLearner<M> for PruneOnLoss {
    fn on_game_end(
        &self,
        memory: &mut MoveMemory<M>,
        history: &History<M>,
        result: GameResult,
    ) -> LearningReport {
        if result.loser() != Some(Side::Opponent) {
            return LearningReport::Kept(result);
        }

        let mut removed = 0;
        for decision in history {
            if memory.remove_move(&decision.key, &decision.chosen) {
                debug!(key = %decision.key, "pruned losing move");
                removed += 1;
            }
        }
        info!(removed, decisions = history.len(), "learned from loss");
        LearningReport::Pruned { removed }
    }
}

/// Observes results without changing the memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotifyOnly;

impl<M> OutcomeLearner<M> for NotifyOnly {
    fn on_game_end(
        &self,
        _memory: &mut MoveMemory<M>,
        _history: &History<M>,
        result: GameResult,
    ) -> LearningReport {
        debug!(?result, "outcome observed, memory unchanged");
        LearningReport::Observed(result)
    }
}
