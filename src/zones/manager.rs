//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns every container a drafted card can be in (deck,
//! unused, the three piles, both hands) and records each card's location.
//! All movement goes through its methods, which pop a handle from one
//! container and push it onto another, so a card is always in exactly one
//! zone.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::deck::Deck;
use super::piles::{PileBank, PileIndex};
use crate::cards::CardPool;
use crate::core::entity::CardHandle;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::DraftRng;
use crate::error::ConfigurationError;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Zone {
    /// Face down in the draft deck.
    Deck,
    /// Not dealt into this draft.
    Unused,
    /// Face up in one of the piles.
    Pile(PileIndex),
    /// Kept by a player.
    Hand(PlayerId),
}

/// Tracks card locations across zones.
///
/// ## Usage
///
/// ```
/// use winston_draft::cards::{Card, CardPool};
/// use winston_draft::core::{DraftRng, PlayerId};
/// use winston_draft::zones::{PileIndex, Zone, ZoneManager};
///
/// let cards = (0..5).map(|i| Card::new(format!("C{i}"), 0, "Land", "")).collect();
/// let pool = CardPool::new(cards).unwrap();
/// let mut zones = ZoneManager::deal(&pool, 4, &mut DraftRng::new(9)).unwrap();
///
/// let seeded = zones.draw_to_pile(PileIndex::FIRST).unwrap();
/// assert_eq!(zones.zone_of(seeded), Some(Zone::Pile(PileIndex::FIRST)));
///
/// zones.take_pile(PileIndex::FIRST, PlayerId::FIRST);
/// assert_eq!(zones.zone_of(seeded), Some(Zone::Hand(PlayerId::FIRST)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ZoneManager {
    /// Card locations: handle -> zone
    locations: FxHashMap<CardHandle, Zone>,

    deck: Deck,
    unused: Vec<CardHandle>,
    piles: PileBank,
    hands: PlayerMap<Vec<CardHandle>>,
}

impl ZoneManager {
    /// Create an empty zone manager (no cards anywhere).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle the pool and deal it into deck and unused.
    ///
    /// Piles and hands start empty.
    pub fn deal(
        pool: &CardPool,
        draft_size: usize,
        rng: &mut DraftRng,
    ) -> Result<Self, ConfigurationError> {
        let (deck, unused) = Deck::shuffled(pool, draft_size, rng)?;

        let mut locations = FxHashMap::default();
        locations.extend(deck.cards().iter().map(|&h| (h, Zone::Deck)));
        locations.extend(unused.iter().map(|&h| (h, Zone::Unused)));

        Ok(Self {
            locations,
            deck,
            unused,
            piles: PileBank::new(),
            hands: PlayerMap::with_default(),
        })
    }

    // === Movement ===

    /// Move the top card of the deck onto a pile.
    ///
    /// Returns the moved card, or `None` if the deck is empty.
    pub fn draw_to_pile(&mut self, pile: PileIndex) -> Option<CardHandle> {
        let card = self.deck.draw()?;
        self.piles.push(pile, card);
        self.locations.insert(card, Zone::Pile(pile));
        Some(card)
    }

    /// Move the top card of the deck into a player's hand.
    ///
    /// Returns the moved card, or `None` if the deck is empty.
    pub fn draw_to_hand(&mut self, player: PlayerId) -> Option<CardHandle> {
        let card = self.deck.draw()?;
        self.hands[player].push(card);
        self.locations.insert(card, Zone::Hand(player));
        Some(card)
    }

    /// Move every card of a pile into a player's hand, leaving the pile
    /// empty.
    ///
    /// Returns the moved cards in arrival order.
    pub fn take_pile(&mut self, pile: PileIndex, player: PlayerId) -> Vec<CardHandle> {
        let taken = self.piles.take(pile);
        for &card in &taken {
            self.locations.insert(card, Zone::Hand(player));
        }
        self.hands[player].extend_from_slice(&taken);
        taken
    }

    // === Queries ===

    /// Get the zone a card is in, or `None` if it was never dealt.
    #[must_use]
    pub fn zone_of(&self, card: CardHandle) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// The draft deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards set aside at deal time.
    #[must_use]
    pub fn unused(&self) -> &[CardHandle] {
        &self.unused
    }

    /// The three piles.
    #[must_use]
    pub fn piles(&self) -> &PileBank {
        &self.piles
    }

    /// Cards in a single pile.
    #[must_use]
    pub fn pile(&self, pile: PileIndex) -> &[CardHandle] {
        self.piles.pile(pile)
    }

    /// A player's hand, in the order cards were kept.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardHandle] {
        &self.hands[player]
    }

    /// Cards still in play: deck, piles and hands.
    #[must_use]
    pub fn in_play(&self) -> usize {
        self.deck.len() + self.piles.total() + self.hands.iter().map(|(_, h)| h.len()).sum::<usize>()
    }

    /// True once the deck and every pile are empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.piles.all_empty()
    }
}
