//! TicTacToe game loop.

use tracing::{info, instrument};

use super::{finish_round, play_move, request_legal_move, Frontend, GameEvent, Tally};
use crate::core::{GameRng, Side, TicTacToeConfig};
use crate::error::SessionError;
use crate::games::{Placement, TicTacToe};
use crate::learning::{AdaptiveAi, MoveSelector, Picker, PruneOnLoss};
use crate::rules::{EndReason, GameResult, RulesEngine};

/// TicTacToe against the adaptive AI.
pub struct TicTacToeSession<P = GameRng> {
    ai: AdaptiveAi<TicTacToe, P>,
    first: Side,
}

impl TicTacToeSession {
    /// Build a session from configuration, drawing the AI's choices from `rng`.
    pub fn from_config(config: &TicTacToeConfig, rng: GameRng) -> Self {
        let ai = AdaptiveAi::new(
            TicTacToe::new(),
            MoveSelector::new(rng, config.exhausted),
            Box::new(PruneOnLoss),
        );
        let first = if config.ai_moves_first {
            Side::Opponent
        } else {
            Side::Player
        };
        Self::new(ai, first)
    }
}

impl<P: Picker> TicTacToeSession<P> {
    pub fn new(ai: AdaptiveAi<TicTacToe, P>, first: Side) -> Self {
        Self { ai, first }
    }

    pub fn ai(&self) -> &AdaptiveAi<TicTacToe, P> {
        &self.ai
    }

    pub fn ai_mut(&mut self) -> &mut AdaptiveAi<TicTacToe, P> {
        &mut self.ai
    }

    /// Side placing the first mark.
    pub fn first(&self) -> Side {
        self.first
    }

    /// Play until the frontend declines a replay.
    #[instrument(skip_all, fields(game = "tictactoe"))]
    pub fn play<F>(&mut self, frontend: &mut F) -> Result<Tally, SessionError>
    where
        F: Frontend<Placement> + ?Sized,
    {
        let mut tally = Tally::default();
        loop {
            tally.record(self.play_round(frontend)?);
            if !frontend.request_replay()? {
                break;
            }
        }
        info!(?tally, states = self.ai.memory().len(), "leaving tictactoe");
        Ok(tally)
    }

    /// Play one game on an empty board.
    pub fn play_round<F>(&mut self, frontend: &mut F) -> Result<GameResult, SessionError>
    where
        F: Frontend<Placement> + ?Sized,
    {
        let engine = *self.ai.engine();
        let mut board = engine.initial_board();
        self.ai.begin_game();
        frontend.report(GameEvent::Started)?;
        frontend.report(GameEvent::Board(board))?;

        let mut to_move = self.first;
        let (result, reason) = loop {
            let mv = match to_move {
                Side::Player => request_legal_move(&engine, &board, frontend)?,
                Side::Opponent => match self.ai.choose_move(&board) {
                    Some(mv) => mv,
                    None => break (GameResult::Winner(Side::Player), EndReason::Forfeit),
                },
            };
            play_move(&engine, &mut board, mv, to_move, frontend)?;

            if let Some(end) = engine.outcome_after(&board, to_move) {
                break end;
            }
            to_move = to_move.other();
        };

        info!(?result, ?reason, "tictactoe game over");
        finish_round(&mut self.ai, result, reason, frontend)
    }
}
