//! Policy that replays a fixed list of decisions.

use std::collections::VecDeque;

use super::{Decision, DecisionPolicy, PolicyView};
use crate::core::rng::DraftRng;

/// Replays decisions in order, then returns `None`.
///
/// Ignores the view and the RNG, which makes automated turns fully
/// predictable in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    script: VecDeque<Decision>,
}

impl ScriptedPolicy {
    /// Create a policy from a sequence of decisions.
    pub fn new(script: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Decisions not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn decide(&mut self, _view: &PolicyView, _rng: &mut DraftRng) -> Option<Decision> {
        self.script.pop_front()
    }
}
