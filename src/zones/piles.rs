//! The three face-up piles.
//!
//! Pile order within each pile is arrival order and carries no meaning
//! beyond display.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardHandle;

/// Number of piles in a Winston draft.
pub const PILE_COUNT: usize = 3;

/// Index of one of the three piles, always in `0..PILE_COUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PileIndex(u8);

impl PileIndex {
    /// The pile every turn starts on.
    pub const FIRST: PileIndex = PileIndex(0);

    /// The pile whose skip ends the turn with a forced draw.
    pub const LAST: PileIndex = PileIndex(PILE_COUNT as u8 - 1);

    /// Create a pile index, or `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < PILE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The following pile, or `None` from the last pile.
    ///
    /// ```
    /// use winston_draft::zones::PileIndex;
    ///
    /// let second = PileIndex::FIRST.next().unwrap();
    /// assert_eq!(second.index(), 1);
    /// assert_eq!(PileIndex::LAST.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::new(self.0 as usize + 1)
    }

    /// Iterate over all pile indices in order.
    pub fn all() -> impl Iterator<Item = PileIndex> {
        (0..PILE_COUNT as u8).map(PileIndex)
    }
}

impl std::fmt::Display for PileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile {}", self.0 + 1)
    }
}

/// Exactly three ordered piles of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileBank {
    piles: [Vec<CardHandle>; PILE_COUNT],
}

impl PileBank {
    /// Create three empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card to the end of a pile.
    pub fn push(&mut self, pile: PileIndex, card: CardHandle) {
        self.piles[pile.index()].push(card);
    }

    /// Empty a pile, returning its cards in arrival order.
    pub fn take(&mut self, pile: PileIndex) -> Vec<CardHandle> {
        std::mem::take(&mut self.piles[pile.index()])
    }

    /// Cards in a pile, in arrival order.
    #[must_use]
    pub fn pile(&self, pile: PileIndex) -> &[CardHandle] {
        &self.piles[pile.index()]
    }

    /// Number of cards in each pile.
    #[must_use]
    pub fn sizes(&self) -> [usize; PILE_COUNT] {
        [self.piles[0].len(), self.piles[1].len(), self.piles[2].len()]
    }

    /// Total cards across all piles.
    #[must_use]
    pub fn total(&self) -> usize {
        self.piles.iter().map(Vec::len).sum()
    }

    /// Check whether every pile is empty.
    #[must_use]
    pub fn all_empty(&self) -> bool {
        self.piles.iter().all(Vec::is_empty)
    }

    /// Iterate over (index, cards) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PileIndex, &[CardHandle])> {
        PileIndex::all().map(move |i| (i, self.pile(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_index_bounds() {
        assert_eq!(PileIndex::new(0), Some(PileIndex::FIRST));
        assert_eq!(PileIndex::new(2), Some(PileIndex::LAST));
        assert_eq!(PileIndex::new(3), None);
    }

    #[test]
    fn test_pile_index_walk() {
        let walked: Vec<_> = std::iter::successors(Some(PileIndex::FIRST), |p| p.next())
            .map(PileIndex::index)
            .collect();
        assert_eq!(walked, vec![0, 1, 2]);
    }

    #[test]
    fn test_pile_index_display() {
        assert_eq!(PileIndex::FIRST.to_string(), "Pile 1");
    }

    #[test]
    fn test_push_and_take() {
        let mut bank = PileBank::new();
        let second = PileIndex::new(1).unwrap();

        bank.push(second, CardHandle(4));
        bank.push(second, CardHandle(9));

        assert_eq!(bank.sizes(), [0, 2, 0]);
        assert_eq!(bank.pile(second), &[CardHandle(4), CardHandle(9)]);

        let taken = bank.take(second);
        assert_eq!(taken, vec![CardHandle(4), CardHandle(9)]);
        assert!(bank.all_empty());
    }

    #[test]
    fn test_total() {
        let mut bank = PileBank::new();
        for (i, pile) in PileIndex::all().enumerate() {
            bank.push(pile, CardHandle(i as u32));
        }
        assert_eq!(bank.total(), 3);
        assert_eq!(bank.iter().count(), PILE_COUNT);
    }
}
