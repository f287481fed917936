//! Move memory: the AI's learned table of candidate moves per state.
//!
//! An entry is created the first time the AI meets a state, as a snapshot of
//! the rules engine's legal moves. After that the entry is only ever shrunk by
//! a learner (or refilled by the selector, see
//! [`ExhaustedPolicy::Refill`](super::ExhaustedPolicy::Refill)); it is never
//! re-derived on its own.
//!
//! The memory lives as long as its owner, which for the hub is the whole
//! process. Nothing is written to disk.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::StateKey;

/// Candidate moves for one state.
///
/// Nine covers every 3×3 position in both games without a heap allocation.
pub type Candidates<M> = SmallVec<[M; 9]>;

/// State key → candidate moves.
#[derive(Clone, Debug)]
pub struct MoveMemory<M> {
    entries: FxHashMap<StateKey, Candidates<M>>,
}

impl<M> Default for MoveMemory<M> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<M: Clone + PartialEq> MoveMemory<M> {
    /// Create an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total candidates across every state.
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.entries.values().map(SmallVec::len).sum()
    }

    /// Whether the state has an entry.
    #[must_use]
    pub fn contains(&self, key: &StateKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Current candidates for a state.
    #[must_use]
    pub fn get(&self, key: &StateKey) -> Option<&[M]> {
        self.entries.get(key).map(SmallVec::as_slice)
    }

    /// Candidates for a state, initialised from `init` on first sight.
    ///
    /// `init` is only called when the key is absent; its result is copied in,
    /// so later changes to the source list do not affect the memory.
    pub fn candidates_or_insert_with<F>(&mut self, key: StateKey, init: F) -> &mut Candidates<M>
    where
        F: FnOnce() -> Vec<M>,
    {
        self.entries
            .entry(key)
            .or_insert_with(|| init().into_iter().collect())
    }

    /// Replace the entry for a state, returning the previous candidates.
    pub fn insert<I>(&mut self, key: StateKey, moves: I) -> Option<Candidates<M>>
    where
        I: IntoIterator<Item = M>,
    {
        self.entries.insert(key, moves.into_iter().collect())
    }

    /// Remove the first occurrence of `mv` from a state's candidates.
    ///
    /// Returns whether anything was removed. Unknown states are ignored.
    pub fn remove_move(&mut self, key: &StateKey, mv: &M) -> bool {
        let Some(candidates) = self.entries.get_mut(key) else {
            return false;
        };
        match candidates.iter().position(|c| c == mv) {
            Some(pos) => {
                candidates.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Iterate over every state and its candidates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, &[M])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
