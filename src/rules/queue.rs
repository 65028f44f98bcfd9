//! Pending work for the engine's action loop.
//!
//! Handing the turn to an automated seat does not call into the policy
//! directly. It queues an `AutomatedTurn`, which the loop later expands
//! into queued actions. The public entry points drain the queue before
//! returning, so automated turns still finish inside the call that
//! triggered them, without recursion.

use std::collections::VecDeque;

use crate::core::action::{ActionSource, DraftAction};
use crate::core::player::PlayerId;

/// One unit of pending work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Work {
    /// Apply an action for a player.
    Apply {
        player: PlayerId,
        action: DraftAction,
        source: ActionSource,
    },
    /// Ask the policy for a player's turn.
    AutomatedTurn(PlayerId),
}

/// FIFO of pending work.
#[derive(Clone, Debug, Default)]
pub(crate) struct TurnQueue {
    pending: VecDeque<Work>,
}

impl TurnQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, work: Work) {
        self.pending.push_back(work);
    }

    pub(crate) fn pop(&mut self) -> Option<Work> {
        self.pending.pop_front()
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
