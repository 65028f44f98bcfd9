//! The shuffled draft deck.
//!
//! Dealing draws a uniform permutation of the pool. The first `draft_size`
//! handles become the deck and the rest are set aside as unused. The deck
//! is a stack: index 0 is the bottom, the last index is the top, and
//! `draw` pops from the top.

use serde::{Deserialize, Serialize};

use crate::cards::CardPool;
use crate::core::entity::CardHandle;
use crate::core::rng::DraftRng;
use crate::error::ConfigurationError;

/// The private, face-down stack cards are drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<CardHandle>,
}

impl Deck {
    /// Build a deck from handles ordered bottom to top.
    #[must_use]
    pub fn from_handles(cards: Vec<CardHandle>) -> Self {
        Self { cards }
    }

    /// Shuffle the pool and split it into a deck of `draft_size` cards and
    /// the unused remainder.
    ///
    /// ```
    /// use winston_draft::cards::{Card, CardPool};
    /// use winston_draft::core::DraftRng;
    /// use winston_draft::zones::Deck;
    ///
    /// let cards = (0..9).map(|i| Card::new(format!("C{i}"), 1, "Instant", "U")).collect();
    /// let pool = CardPool::new(cards).unwrap();
    ///
    /// let (deck, unused) = Deck::shuffled(&pool, 6, &mut DraftRng::new(1)).unwrap();
    /// assert_eq!(deck.len(), 6);
    /// assert_eq!(unused.len(), 3);
    /// ```
    pub fn shuffled(
        pool: &CardPool,
        draft_size: usize,
        rng: &mut DraftRng,
    ) -> Result<(Deck, Vec<CardHandle>), ConfigurationError> {
        if pool.is_empty() {
            return Err(ConfigurationError::EmptyPool);
        }
        if draft_size == 0 {
            return Err(ConfigurationError::ZeroDraftSize);
        }
        if draft_size > pool.len() {
            return Err(ConfigurationError::DraftSizeExceedsPool {
                draft_size,
                pool_size: pool.len(),
            });
        }

        let mut order: Vec<CardHandle> = pool.handles().collect();
        rng.shuffle(&mut order);

        let unused = order.split_off(draft_size);
        Ok((Deck { cards: order }, unused))
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<CardHandle> {
        self.cards.pop()
    }

    /// Look at the top card without drawing it.
    #[must_use]
    pub fn top(&self) -> Option<CardHandle> {
        self.cards.last().copied()
    }

    /// Get the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[CardHandle] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn pool(n: usize) -> CardPool {
        CardPool::new(
            (0..n)
                .map(|i| Card::new(format!("Card {i}"), 2, "Sorcery", "B"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::from_handles(vec![CardHandle(1), CardHandle(2), CardHandle(3)]);

        assert_eq!(deck.top(), Some(CardHandle(3)));
        assert_eq!(deck.draw(), Some(CardHandle(3)));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_draw_empty_is_none() {
        let mut deck = Deck::default();
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn test_shuffled_partitions_pool() {
        let pool = pool(12);
        let (deck, unused) = Deck::shuffled(&pool, 8, &mut DraftRng::new(3)).unwrap();

        assert_eq!(deck.len(), 8);
        assert_eq!(unused.len(), 4);

        let mut all: Vec<_> = deck.cards().iter().chain(unused.iter()).copied().collect();
        all.sort_unstable();
        assert_eq!(all, pool.handles().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_is_reproducible() {
        let pool = pool(20);
        let (a, _) = Deck::shuffled(&pool, 10, &mut DraftRng::new(99)).unwrap();
        let (b, _) = Deck::shuffled(&pool, 10, &mut DraftRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_whole_pool_leaves_nothing_unused() {
        let pool = pool(5);
        let (deck, unused) = Deck::shuffled(&pool, 5, &mut DraftRng::new(0)).unwrap();
        assert_eq!(deck.len(), 5);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_shuffled_rejects_oversized_draft() {
        let pool = pool(4);
        let err = Deck::shuffled(&pool, 5, &mut DraftRng::new(0)).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DraftSizeExceedsPool {
                draft_size: 5,
                pool_size: 4
            }
        );
    }

    #[test]
    fn test_shuffled_rejects_zero_and_empty() {
        let mut rng = DraftRng::new(0);
        assert_eq!(
            Deck::shuffled(&pool(4), 0, &mut rng).unwrap_err(),
            ConfigurationError::ZeroDraftSize
        );
        assert_eq!(
            Deck::shuffled(&CardPool::default(), 1, &mut rng).unwrap_err(),
            ConfigurationError::EmptyPool
        );
    }
}
