//! Move selection from the memory.
//!
//! The selector is the entirety of the AI's "intelligence": it looks up the
//! candidates remembered for the current state and picks one uniformly at
//! random. There is no lookahead and no scoring; the AI improves only because
//! learners remove candidates after losses.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::memory::MoveMemory;
use crate::core::{Board, GameRng, Side, StateKey};
use crate::rules::RulesEngine;

/// What to do when every remembered candidate for a state has been pruned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedPolicy {
    /// Refill the entry with the current legal moves, forgetting every past
    /// pruning for that state.
    Refill,
    /// Return no move: the AI concedes the game.
    Forfeit,
}

/// Source of the uniform choice among candidates.
pub trait Picker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl Picker for GameRng {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }
}

/// Chooses the AI's move for a state.
#[derive(Clone, Debug)]
pub struct MoveSelector<P = GameRng> {
    picker: P,
    exhausted: ExhaustedPolicy,
}

impl<P: Picker> MoveSelector<P> {
    pub fn new(picker: P, exhausted: ExhaustedPolicy) -> Self {
        Self { picker, exhausted }
    }

    /// The policy applied to emptied entries.
    #[must_use]
    pub fn exhausted_policy(&self) -> ExhaustedPolicy {
        self.exhausted
    }

    /// Select a move for `side` at `key`.
    ///
    /// 1. Absent keys are initialised with `engine.legal_moves(board, side)`.
    /// 2. An empty entry is handled by the [`ExhaustedPolicy`].
    /// 3. One remaining candidate is picked uniformly.
    ///
    /// Returns `None` when no candidate is left (forfeit, or no legal move at
    /// all).
    pub fn select<E: RulesEngine>(
        &mut self,
        engine: &E,
        memory: &mut MoveMemory<E::Move>,
        key: StateKey,
        board: &Board,
        side: Side,
    ) -> Option<E::Move> {
        if !memory.contains(&key) {
            debug!(game = engine.name(), %key, "new state");
        }
        let candidates = memory.candidates_or_insert_with(key, || engine.legal_moves(board, side));

        if candidates.is_empty() {
            match self.exhausted {
                ExhaustedPolicy::Refill => {
                    warn!(game = engine.name(), %key, "candidates exhausted, refilling");
                    candidates.extend(engine.legal_moves(board, side));
                }
                ExhaustedPolicy::Forfeit => {
                    warn!(game = engine.name(), %key, "candidates exhausted, forfeiting");
                    return None;
                }
            }
        }

        if candidates.is_empty() {
            return None;
        }

        let chosen = candidates[self.picker.pick(candidates.len())].clone();
        debug!(
            game = engine.name(),
            %key,
            candidates = candidates.len(),
            chosen = %chosen,
            "selected move"
        );
        Some(chosen)
    }
}
