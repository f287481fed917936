//! Shared test frontends.

#![allow(dead_code)]

use std::collections::VecDeque;

use adaptive_games::core::{Board, GameRng, Side};
use adaptive_games::error::SessionError;
use adaptive_games::learning::Picker;
use adaptive_games::rules::RulesEngine;
use adaptive_games::session::{Frontend, GameEvent};

/// Frontend replaying a fixed script of human moves and replay answers.
///
/// Running out of moves is reported as closed input.
pub struct Scripted<M> {
    pub moves: VecDeque<M>,
    pub replays: VecDeque<bool>,
    pub events: Vec<GameEvent<M>>,
}

impl<M> Scripted<M> {
    pub fn new(moves: impl IntoIterator<Item = M>, replays: impl IntoIterator<Item = bool>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            replays: replays.into_iter().collect(),
            events: Vec::new(),
        }
    }
}

impl<M: Clone> Frontend<M> for Scripted<M> {
    fn request_move(&mut self, _board: &Board) -> Result<M, SessionError> {
        self.moves.pop_front().ok_or(SessionError::InputClosed)
    }

    fn report(&mut self, event: GameEvent<M>) -> Result<(), SessionError> {
        self.events.push(event);
        Ok(())
    }

    fn request_replay(&mut self) -> Result<bool, SessionError> {
        Ok(self.replays.pop_front().unwrap_or(false))
    }
}

/// Frontend whose human plays uniformly random legal moves.
pub struct RandomHuman<E: RulesEngine> {
    pub engine: E,
    pub rng: GameRng,
    pub rounds_left: usize,
    pub events: Vec<GameEvent<E::Move>>,
}

impl<E: RulesEngine> RandomHuman<E> {
    pub fn new(engine: E, seed: u64, rounds: usize) -> Self {
        Self {
            engine,
            rng: GameRng::new(seed),
            rounds_left: rounds.saturating_sub(1),
            events: Vec::new(),
        }
    }
}

impl<E: RulesEngine> Frontend<E::Move> for RandomHuman<E> {
    fn request_move(&mut self, board: &Board) -> Result<E::Move, SessionError> {
        let moves = self.engine.legal_moves(board, Side::Player);
        self.rng.choose(&moves).cloned().ok_or(SessionError::InputClosed)
    }

    fn report(&mut self, event: GameEvent<E::Move>) -> Result<(), SessionError> {
        self.events.push(event);
        Ok(())
    }

    fn request_replay(&mut self) -> Result<bool, SessionError> {
        if self.rounds_left == 0 {
            return Ok(false);
        }
        self.rounds_left -= 1;
        Ok(true)
    }
}

/// Always picks the first candidate.
pub struct FirstCandidate;

impl Picker for FirstCandidate {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}
