//! Decision policies for automated seats.
//!
//! Policies are trait-based so the engine never depends on a particular
//! strategy:
//! - `WeightedPilePolicy`: size-weighted random pick (the default opponent)
//! - `ScriptedPolicy`: replays a fixed list of decisions, for tests and demos
//!
//! A policy sees only pile sizes and the deck size, and returns one
//! `Decision` per turn. The engine expands the decision into the skip and
//! take actions that carry it out.

mod scripted;
mod weighted;

pub use scripted::ScriptedPolicy;
pub use weighted::WeightedPilePolicy;

use serde::Serialize;
use smallvec::SmallVec;

use crate::core::action::DraftAction;
use crate::core::rng::DraftRng;
use crate::zones::{PileIndex, PILE_COUNT};

/// What an automated policy is allowed to see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PolicyView {
    /// Cards in each pile.
    pub pile_sizes: [usize; PILE_COUNT],
    /// Cards left in the deck.
    pub deck_size: usize,
}

/// One turn's choice for an automated seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Decision {
    /// Walk to this pile and take it.
    TakePile(PileIndex),
    /// Pass all three piles and take the forced draw from the deck.
    ForcedDraw,
}

/// Actions a full turn can expand to: at most two skips and a take, or
/// three skips.
pub type TurnActions = SmallVec<[DraftAction; PILE_COUNT + 1]>;

impl Decision {
    /// Expand into the actions that carry out this decision, assuming the
    /// turn starts on the first pile.
    ///
    /// ```
    /// use winston_draft::core::DraftAction;
    /// use winston_draft::policy::Decision;
    /// use winston_draft::zones::PileIndex;
    ///
    /// let take_second = Decision::TakePile(PileIndex::new(1).unwrap());
    /// assert_eq!(
    ///     take_second.actions().as_slice(),
    ///     &[DraftAction::Skip, DraftAction::TakePile]
    /// );
    /// assert_eq!(Decision::ForcedDraw.actions().len(), 3);
    /// ```
    #[must_use]
    pub fn actions(self) -> TurnActions {
        let mut actions = TurnActions::new();
        match self {
            Decision::TakePile(pile) => {
                actions.extend(std::iter::repeat(DraftAction::Skip).take(pile.index()));
                actions.push(DraftAction::TakePile);
            }
            Decision::ForcedDraw => {
                actions.extend(std::iter::repeat(DraftAction::Skip).take(PILE_COUNT));
            }
        }
        actions
    }
}

/// Policy that chooses a turn for an automated seat.
pub trait DecisionPolicy {
    /// Choose this turn's decision.
    ///
    /// Returns `None` when the policy has nothing to offer; the engine then
    /// leaves the turn with its caller.
    fn decide(&mut self, view: &PolicyView, rng: &mut DraftRng) -> Option<Decision>;
}

impl<P: DecisionPolicy + ?Sized> DecisionPolicy for Box<P> {
    fn decide(&mut self, view: &PolicyView, rng: &mut DraftRng) -> Option<Decision> {
        (**self).decide(view, rng)
    }
}
