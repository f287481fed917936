//! State-action elimination: how the computer opponent adapts.
//!
//! The AI keeps, per game, a memory from state key to the moves it is still
//! willing to play there. On its turn it picks one of them uniformly at
//! random; when a playthrough ends, a learner may remove the moves that led to
//! a loss. There is no value function, no reward magnitude and no search.
//!
//! ## Components
//!
//! - `MoveMemory`: state key → candidate moves, lazily filled from the rules
//! - `MoveSelector`: uniform pick through a pluggable `Picker`, with an
//!   explicit `ExhaustedPolicy` for emptied entries
//! - `History`: the AI's decisions in the current playthrough
//! - `OutcomeLearner`: `PruneOnLoss` or `NotifyOnly`
//! - `AdaptiveAi`: ties the above together for one game

pub mod agent;
pub mod history;
pub mod learner;
pub mod memory;
pub mod selector;

pub use agent::AdaptiveAi;
pub use history::{Decision, History};
pub use learner::{LearningReport, NotifyOnly, OutcomeLearner, PruneOnLoss};
pub use memory::{Candidates, MoveMemory};
pub use selector::{ExhaustedPolicy, MoveSelector, Picker};
