//! Draft phase and read-only snapshots.
//!
//! ## DraftSnapshot
//!
//! What one observer may know about the draft at a moment:
//! - Progress counters (pool, deck, unused, cards used)
//! - Current player and pile
//! - Pile and hand contents, with cards the observer has not seen masked
//!
//! A fully revealed snapshot, with every card shown and the unused cards
//! listed, is available once the draft is complete. Snapshots borrow from
//! the engine and never mutate it.

use serde::Serialize;

use super::entity::CardHandle;
use super::player::{PlayerId, PlayerMap};
use crate::cards::Card;
use crate::zones::{PileIndex, PILE_COUNT};

/// Lifecycle of a draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DraftPhase {
    /// No deal has happened yet.
    #[default]
    NotStarted,
    /// Piles are on the table and players are acting.
    InProgress,
    /// Deck and piles are empty; every card is in a hand.
    Complete,
}

/// A card as one observer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardView<'a> {
    /// The observer has seen this card.
    Visible { handle: CardHandle, card: &'a Card },
    /// The observer has not seen this card.
    Hidden { handle: CardHandle },
}

impl<'a> CardView<'a> {
    /// The card's handle, visible or not.
    #[must_use]
    pub fn handle(&self) -> CardHandle {
        match self {
            CardView::Visible { handle, .. } | CardView::Hidden { handle } => *handle,
        }
    }

    /// The card, if visible.
    #[must_use]
    pub fn card(&self) -> Option<&'a Card> {
        match self {
            CardView::Visible { card, .. } => Some(card),
            CardView::Hidden { .. } => None,
        }
    }

    /// Check if the card is masked.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, CardView::Hidden { .. })
    }
}

/// Read-only picture of the draft for one observer.
#[derive(Clone, Debug, Serialize)]
pub struct DraftSnapshot<'a> {
    /// Whose knowledge this snapshot reflects.
    pub observer: PlayerId,

    /// True if masking was overridden and every card is shown.
    pub revealed: bool,

    pub phase: DraftPhase,

    /// Cards in the whole pool.
    pub pool_size: usize,

    /// Configured draft size.
    pub draft_size: usize,

    /// Cards left in the deck.
    pub deck_size: usize,

    /// Cards dealt out of the deck so far.
    pub cards_used: usize,

    /// Cards set aside at deal time.
    pub unused_count: usize,

    pub current_player: PlayerId,
    pub current_pile: PileIndex,

    /// Pile contents in arrival order.
    pub piles: [Vec<CardView<'a>>; PILE_COUNT],

    /// Hand contents in the order cards were kept.
    pub hands: PlayerMap<Vec<CardView<'a>>>,

    /// Unused cards; only listed in a revealed snapshot.
    pub unused: Vec<&'a Card>,
}

impl DraftSnapshot<'_> {
    /// Check if the draft is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == DraftPhase::Complete
    }

    /// Cards in each pile.
    #[must_use]
    pub fn pile_sizes(&self) -> [usize; PILE_COUNT] {
        [self.piles[0].len(), self.piles[1].len(), self.piles[2].len()]
    }

    /// Cards in each hand.
    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.hands.map(|_, hand| hand.len())
    }
}
