//! Hexapawn game loop.

use tracing::{info, instrument};

use super::{finish_round, play_move, request_legal_move, Frontend, GameEvent, Tally};
use crate::core::{GameRng, HexapawnConfig, Side};
use crate::error::SessionError;
use crate::games::{Hexapawn, HexapawnMove};
use crate::learning::{
    AdaptiveAi, MoveSelector, NotifyOnly, OutcomeLearner, Picker, PruneOnLoss,
};
use crate::rules::{EndReason, GameResult, RulesEngine};

/// Hexapawn against the adaptive AI. The human always moves first.
pub struct HexapawnSession<P = GameRng> {
    ai: AdaptiveAi<Hexapawn, P>,
}

impl HexapawnSession {
    /// Build a session from configuration, drawing the AI's choices from `rng`.
    pub fn from_config(config: &HexapawnConfig, rng: GameRng) -> Self {
        let learner: Box<dyn OutcomeLearner<HexapawnMove>> = if config.learn_from_losses {
            Box::new(PruneOnLoss)
        } else {
            Box::new(NotifyOnly)
        };
        Self::new(AdaptiveAi::new(
            Hexapawn::new(),
            MoveSelector::new(rng, config.exhausted),
            learner,
        ))
    }
}

impl<P: Picker> HexapawnSession<P> {
    pub fn new(ai: AdaptiveAi<Hexapawn, P>) -> Self {
        Self { ai }
    }

    pub fn ai(&self) -> &AdaptiveAi<Hexapawn, P> {
        &self.ai
    }

    pub fn ai_mut(&mut self) -> &mut AdaptiveAi<Hexapawn, P> {
        &mut self.ai
    }

    /// Play until the frontend declines a replay.
    #[instrument(skip_all, fields(game = "hexapawn"))]
    pub fn play<F>(&mut self, frontend: &mut F) -> Result<Tally, SessionError>
    where
        F: Frontend<HexapawnMove> + ?Sized,
    {
        let mut tally = Tally::default();
        loop {
            tally.record(self.play_round(frontend)?);
            if !frontend.request_replay()? {
                break;
            }
        }
        info!(?tally, states = self.ai.memory().len(), "leaving hexapawn");
        Ok(tally)
    }

    /// Play one game from the initial position.
    pub fn play_round<F>(&mut self, frontend: &mut F) -> Result<GameResult, SessionError>
    where
        F: Frontend<HexapawnMove> + ?Sized,
    {
        let engine = *self.ai.engine();
        let mut board = engine.initial_board();
        self.ai.begin_game();
        frontend.report(GameEvent::Started)?;
        frontend.report(GameEvent::Board(board))?;

        let (result, reason) = loop {
            if engine.has_no_moves(&board, Side::Player) {
                break (GameResult::Winner(Side::Opponent), EndReason::Stalemate);
            }

            let mv = request_legal_move(&engine, &board, frontend)?;
            play_move(&engine, &mut board, mv, Side::Player, frontend)?;
            if let Some(end) = engine.outcome_after(&board, Side::Player) {
                break end;
            }

            let Some(mv) = self.ai.choose_move(&board) else {
                break (GameResult::Winner(Side::Player), EndReason::Forfeit);
            };
            play_move(&engine, &mut board, mv, Side::Opponent, frontend)?;
            if let Some(end) = engine.outcome_after(&board, Side::Opponent) {
                break end;
            }
        };

        info!(?result, ?reason, "hexapawn game over");
        finish_round(&mut self.ai, result, reason, frontend)
    }
}
