//! The card pool arena.
//!
//! The `CardPool` owns every `Card` for the lifetime of a draft. Cards are
//! addressed by `CardHandle`, their index in the pool, so duplicate names
//! remain distinct cards.

use std::ops::Index;

use super::definition::Card;
use crate::core::entity::CardHandle;
use crate::error::ConfigurationError;

/// Arena of cards available to a draft.
///
/// ## Example
///
/// ```
/// use winston_draft::cards::{Card, CardPool};
///
/// let pool = CardPool::new(vec![
///     Card::new("Lightning Bolt", 1, "Instant", "R"),
///     Card::new("Lightning Bolt", 1, "Instant", "R"),
/// ]).unwrap();
///
/// let handles: Vec<_> = pool.handles().collect();
/// assert_eq!(handles.len(), 2);
/// assert_ne!(handles[0], handles[1]);
/// assert_eq!(pool[handles[0]], pool[handles[1]]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// Build a pool from ingested cards.
    ///
    /// Fails if no cards were supplied.
    pub fn new(cards: Vec<Card>) -> Result<Self, ConfigurationError> {
        if cards.is_empty() {
            return Err(ConfigurationError::EmptyPool);
        }
        Ok(Self { cards })
    }

    /// Get a card by handle.
    #[must_use]
    pub fn get(&self, handle: CardHandle) -> Option<&Card> {
        self.cards.get(handle.index())
    }

    /// Get the number of cards in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over every handle, in ingestion order.
    pub fn handles(&self) -> impl Iterator<Item = CardHandle> {
        (0..self.cards.len() as u32).map(CardHandle)
    }

    /// Iterate over (handle, card) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardHandle, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardHandle(i as u32), card))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = (CardHandle, &Card)>
    where
        F: Fn(&Card) -> bool,
    {
        self.iter().filter(move |(_, card)| predicate(card))
    }
}

impl Index<CardHandle> for CardPool {
    type Output = Card;

    fn index(&self, handle: CardHandle) -> &Self::Output {
        &self.cards[handle.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ColorCategory;

    fn sample_pool() -> CardPool {
        CardPool::new(vec![
            Card::new("Goblin Guide", 1, "Creature - Goblin Scout", "R"),
            Card::new("Counterspell", 2, "Instant", "U"),
            Card::new("Electrolyze", 3, "Instant", "UR"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_pool_rejected() {
        assert_eq!(CardPool::new(vec![]).unwrap_err(), ConfigurationError::EmptyPool);
    }

    #[test]
    fn test_get_and_index() {
        let pool = sample_pool();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool.get(CardHandle(1)).unwrap().name, "Counterspell");
        assert_eq!(pool[CardHandle(2)].color, ColorCategory::Multicolor);
        assert!(pool.get(CardHandle(3)).is_none());
    }

    #[test]
    fn test_handles_in_order() {
        let pool = sample_pool();
        let handles: Vec<_> = pool.handles().collect();
        assert_eq!(handles, vec![CardHandle(0), CardHandle(1), CardHandle(2)]);
    }

    #[test]
    fn test_find_with_predicate() {
        let pool = sample_pool();
        let instants: Vec<_> = pool.find(|c| c.type_line == "Instant").collect();
        assert_eq!(instants.len(), 2);
        assert_eq!(instants[0].0, CardHandle(1));
    }
}
