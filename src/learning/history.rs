//! Per-playthrough record of the AI's decisions.

use crate::core::StateKey;

/// One AI decision: the state it saw and the move it chose.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision<M> {
    pub key: StateKey,
    pub chosen: M,
}

/// Ordered AI decisions of the current playthrough.
///
/// Cleared when a playthrough starts and consumed once by the learner when it
/// ends.
#[derive(Clone, Debug)]
pub struct History<M> {
    decisions: Vec<Decision<M>>,
}

impl<M> Default for History<M> {
    fn default() -> Self {
        Self {
            decisions: Vec::new(),
        }
    }
}

impl<M> History<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decision.
    pub fn record(&mut self, key: StateKey, chosen: M) {
        self.decisions.push(Decision { key, chosen });
    }

    pub fn clear(&mut self) {
        self.decisions.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decision<M>> {
        self.decisions.iter()
    }
}

impl<M> FromIterator<(StateKey, M)> for History<M> {
    fn from_iter<I: IntoIterator<Item = (StateKey, M)>>(iter: I) -> Self {
        Self {
            decisions: iter
                .into_iter()
                .map(|(key, chosen)| Decision { key, chosen })
                .collect(),
        }
    }
}

impl<'a, M> IntoIterator for &'a History<M> {
    type Item = &'a Decision<M>;
    type IntoIter = std::slice::Iter<'a, Decision<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
