//! Per-card record of which players have seen it.
//!
//! A card is registered, unseen by both players, when it leaves the deck.
//! Flags only ever go from unseen to seen.

use rustc_hash::FxHashMap;

use crate::core::entity::CardHandle;
use crate::core::player::{PlayerId, PlayerMap};

/// Seen flags for every card that has left the deck.
#[derive(Clone, Debug, Default)]
pub struct VisibilityTracker {
    seen: FxHashMap<CardHandle, PlayerMap<bool>>,
}

impl VisibilityTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a card, unseen by both players.
    ///
    /// Registering a card that is already tracked keeps its flags.
    pub fn register(&mut self, card: CardHandle) {
        self.seen.entry(card).or_insert_with(|| PlayerMap::with_value(false));
    }

    /// Mark a card as seen by a player.
    ///
    /// Idempotent. Registers the card first if needed.
    pub fn mark_seen(&mut self, card: CardHandle, player: PlayerId) {
        self.seen
            .entry(card)
            .or_insert_with(|| PlayerMap::with_value(false))[player] = true;
    }

    /// Mark several cards as seen by a player.
    pub fn mark_all_seen(&mut self, cards: &[CardHandle], player: PlayerId) {
        for &card in cards {
            self.mark_seen(card, player);
        }
    }

    /// Check whether a player has seen a card.
    ///
    /// Untracked cards have been seen by nobody.
    #[must_use]
    pub fn has_seen(&self, card: CardHandle, player: PlayerId) -> bool {
        self.seen.get(&card).is_some_and(|flags| flags[player])
    }

    /// Check whether a card is tracked.
    #[must_use]
    pub fn is_tracked(&self, card: CardHandle) -> bool {
        self.seen.contains_key(&card)
    }

    /// Number of tracked cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no card is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
