//! The adaptive computer opponent.

use tracing::debug;

use super::history::History;
use super::learner::{LearningReport, OutcomeLearner};
use super::memory::MoveMemory;
use super::selector::{MoveSelector, Picker};
use crate::core::{Board, GameRng, Side};
use crate::rules::{GameResult, RulesEngine};

/// Computer opponent for one game.
///
/// Owns the game's move memory for as long as it lives, so replays of the same
/// game share what was learned while the two games never share anything.
///
/// ```
/// use adaptive_games::core::{GameRng, Side};
/// use adaptive_games::games::TicTacToe;
/// use adaptive_games::learning::{AdaptiveAi, ExhaustedPolicy, MoveSelector, PruneOnLoss};
/// use adaptive_games::rules::{GameResult, RulesEngine};
///
/// let selector = MoveSelector::new(GameRng::new(3), ExhaustedPolicy::Refill);
/// let mut ai = AdaptiveAi::new(TicTacToe::new(), selector, Box::new(PruneOnLoss));
///
/// ai.begin_game();
/// let board = ai.engine().initial_board();
/// let chosen = ai.choose_move(&board).unwrap();
/// let key = ai.engine().state_key(&board);
///
/// ai.finish_game(GameResult::Winner(Side::Player));
/// assert!(!ai.memory().get(&key).unwrap().contains(&chosen));
/// ```
pub struct AdaptiveAi<E: RulesEngine, P = GameRng> {
    engine: E,
    memory: MoveMemory<E::Move>,
    selector: MoveSelector<P>,
    learner: Box<dyn OutcomeLearner<E::Move>>,
    history: History<E::Move>,
}

impl<E: RulesEngine, P: Picker> AdaptiveAi<E, P> {
    pub fn new(
        engine: E,
        selector: MoveSelector<P>,
        learner: Box<dyn OutcomeLearner<E::Move>>,
    ) -> Self {
        Self {
            engine,
            memory: MoveMemory::new(),
            selector,
            learner,
            history: History::new(),
        }
    }

    /// The rules engine this AI plays.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The learned move memory.
    pub fn memory(&self) -> &MoveMemory<E::Move> {
        &self.memory
    }

    /// Mutable access to the memory, for seeding or overriding entries.
    pub fn memory_mut(&mut self) -> &mut MoveMemory<E::Move> {
        &mut self.memory
    }

    /// Decisions recorded in the current playthrough.
    pub fn history(&self) -> &History<E::Move> {
        &self.history
    }

    /// Start a playthrough: forget the previous playthrough's decisions.
    pub fn begin_game(&mut self) {
        self.history.clear();
    }

    /// Choose and record the AI's move on `board`.
    ///
    /// Returns `None` when the AI has nothing left to play, which the caller
    /// treats as a forfeit.
    pub fn choose_move(&mut self, board: &Board) -> Option<E::Move> {
        let key = self.engine.state_key(board);
        let chosen = self
            .selector
            .select(&self.engine, &mut self.memory, key, board, Side::Opponent)?;
        self.history.record(key, chosen.clone());
        Some(chosen)
    }

    /// End a playthrough and let the learner update the memory.
    ///
    /// The history is consumed: a second call sees no decisions.
    pub fn finish_game(&mut self, result: GameResult) -> LearningReport {
        let history = std::mem::take(&mut self.history);
        debug!(
            game = self.engine.name(),
            ?result,
            decisions = history.len(),
            states = self.memory.len(),
            "game finished"
        );
        self.learner.on_game_end(&mut self.memory, &history, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{Hexapawn, HexapawnMove, TicTacToe};
    use crate::learning::{ExhaustedPolicy, NotifyOnly, PruneOnLoss};

    fn tictactoe_ai(seed: u64) -> AdaptiveAi<TicTacToe> {
        AdaptiveAi::new(
            TicTacToe::new(),
            MoveSelector::new(GameRng::new(seed), ExhaustedPolicy::Refill),
            Box::new(PruneOnLoss),
        )
    }

    #[test]
    fn test_choose_records_history() {
        let mut ai = tictactoe_ai(1);
        let board = Board::new();

        let chosen = ai.choose_move(&board).unwrap();

        assert_eq!(ai.history().len(), 1);
        let decision = ai.history().iter().next().unwrap();
        assert_eq!(decision.chosen, chosen);
        assert_eq!(decision.key.as_str(), ".........");
    }

    #[test]
    fn test_finish_consumes_history() {
        let mut ai = tictactoe_ai(2);
        let board = Board::new();
        ai.choose_move(&board).unwrap();

        let report = ai.finish_game(GameResult::Winner(Side::Player));
        assert_eq!(report, LearningReport::Pruned { removed: 1 });
        assert!(ai.history().is_empty());

        let again = ai.finish_game(GameResult::Winner(Side::Player));
        assert_eq!(again, LearningReport::Pruned { removed: 0 });
        assert_eq!(ai.memory().get(&ai.engine().state_key(&board)).unwrap().len(), 8);
    }

    #[test]
    fn test_begin_game_clears_history() {
        let mut ai = tictactoe_ai(3);
        ai.choose_move(&Board::new()).unwrap();

        ai.begin_game();

        assert!(ai.history().is_empty());
        assert_eq!(ai.memory().len(), 1);
    }

    #[test]
    fn test_hexapawn_notify_only_keeps_memory() {
        let mut ai = AdaptiveAi::new(
            Hexapawn::new(),
            MoveSelector::new(GameRng::new(4), ExhaustedPolicy::Forfeit),
            Box::new(NotifyOnly),
        );
        let mut board = ai.engine().initial_board();
        ai.engine()
            .try_apply(&mut board, &HexapawnMove::new(0, 1, 1, 1), Side::Player)
            .unwrap();
        ai.choose_move(&board).unwrap();

        ai.finish_game(GameResult::Winner(Side::Player));

        let key = ai.engine().state_key(&board);
        assert_eq!(
            ai.memory().get(&key).unwrap(),
            ai.engine().legal_moves(&board, Side::Opponent).as_slice()
        );
    }
}
