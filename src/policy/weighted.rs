//! Size-weighted random policy.
//!
//! Each pile is a candidate once per card it holds, so bigger piles are
//! proportionally more likely. While the deck has cards, one extra
//! candidate stands for the forced draw. The decision is a uniform draw
//! from that multiset.

use super::{Decision, DecisionPolicy, PolicyView};
use crate::core::rng::DraftRng;
use crate::zones::PileIndex;

/// The default automated opponent.
#[derive(Clone, Debug, Default)]
pub struct WeightedPilePolicy;

impl WeightedPilePolicy {
    /// Create the policy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the weighted candidate multiset for a view.
    ///
    /// ```
    /// use winston_draft::policy::{Decision, PolicyView, WeightedPilePolicy};
    ///
    /// let view = PolicyView { pile_sizes: [2, 0, 1], deck_size: 5 };
    /// let candidates = WeightedPilePolicy::candidates(&view);
    ///
    /// assert_eq!(candidates.len(), 4);
    /// assert_eq!(candidates.last(), Some(&Decision::ForcedDraw));
    /// ```
    #[must_use]
    pub fn candidates(view: &PolicyView) -> Vec<Decision> {
        let mut candidates: Vec<Decision> = PileIndex::all()
            .flat_map(|pile| {
                std::iter::repeat(Decision::TakePile(pile)).take(view.pile_sizes[pile.index()])
            })
            .collect();

        if view.deck_size > 0 {
            candidates.push(Decision::ForcedDraw);
        }

        candidates
    }
}

impl DecisionPolicy for WeightedPilePolicy {
    fn decide(&mut self, view: &PolicyView, rng: &mut DraftRng) -> Option<Decision> {
        let candidates = Self::candidates(view);
        rng.choose(&candidates).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(pile_sizes: [usize; 3], deck_size: usize) -> PolicyView {
        PolicyView {
            pile_sizes,
            deck_size,
        }
    }

    #[test]
    fn test_candidates_repeat_by_size() {
        let second = PileIndex::new(1).unwrap();
        let candidates = WeightedPilePolicy::candidates(&view([2, 1, 0], 4));

        assert_eq!(
            candidates,
            vec![
                Decision::TakePile(PileIndex::FIRST),
                Decision::TakePile(PileIndex::FIRST),
                Decision::TakePile(second),
                Decision::ForcedDraw,
            ]
        );
    }

    #[test]
    fn test_no_forced_draw_when_deck_empty() {
        let candidates = WeightedPilePolicy::candidates(&view([1, 1, 1], 0));
        assert!(!candidates.contains(&Decision::ForcedDraw));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_only_nonempty_pile_is_chosen() {
        let mut policy = WeightedPilePolicy::new();
        let mut rng = DraftRng::new(11);

        for _ in 0..50 {
            assert_eq!(
                policy.decide(&view([0, 0, 3], 0), &mut rng),
                Some(Decision::TakePile(PileIndex::LAST))
            );
        }
    }

    #[test]
    fn test_only_forced_draw_when_piles_empty() {
        let mut policy = WeightedPilePolicy::new();
        let mut rng = DraftRng::new(11);

        assert_eq!(
            policy.decide(&view([0, 0, 0], 7), &mut rng),
            Some(Decision::ForcedDraw)
        );
    }

    #[test]
    fn test_nothing_to_decide() {
        let mut policy = WeightedPilePolicy::new();
        assert_eq!(policy.decide(&view([0, 0, 0], 0), &mut DraftRng::new(1)), None);
    }

    #[test]
    fn test_bigger_piles_win_more_often() {
        let mut policy = WeightedPilePolicy::new();
        let mut rng = DraftRng::new(2024);
        let big = view([9, 1, 0], 0);

        let first_picks = (0..1000)
            .filter(|_| policy.decide(&big, &mut rng) == Some(Decision::TakePile(PileIndex::FIRST)))
            .count();

        // Expected 900 of 1000.
        assert!(first_picks > 800, "first pile chosen {first_picks} times");
    }
}
