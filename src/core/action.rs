//! Action representation.
//!
//! A draft has only two verbs: pass the pile under consideration, or take
//! it. Both apply to the current pile of the current player, so actions
//! carry no arguments.
//!
//! Every applied action is recorded as an `ActionRecord` for replay and
//! debugging.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A decision on the current pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftAction {
    /// Decline the pile; it grows by one card from the deck.
    Skip,
    /// Accept the pile into hand.
    TakePile,
}

impl std::fmt::Display for DraftAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftAction::Skip => write!(f, "skip"),
            DraftAction::TakePile => write!(f, "take"),
        }
    }
}

/// Where an action came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionSource {
    /// Supplied by the caller through `apply_action`.
    Human,
    /// Produced by the decision policy for an automated seat.
    Automated,
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Sequence number across the whole draft (starts at 0).
    pub sequence: u32,

    /// Turn number when the action was taken (starts at 1, bumps on every
    /// change of player).
    pub turn: u32,

    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: DraftAction,

    /// Pile index the action applied to.
    pub pile: u8,

    /// Who decided it.
    pub source: ActionSource,
}
