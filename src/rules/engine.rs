//! The Winston draft state machine.
//!
//! ## Turn structure
//!
//! The current player considers the piles in order, starting at pile 0.
//! - `Skip`: the pile gains the top card of the deck and the player moves
//!   on to the next pile. Skipping the last pile ends the turn with a
//!   forced draw of the deck's top card into the player's hand.
//! - `TakePile`: the whole pile goes to the player's hand, the top card of
//!   the deck reseeds it, and the turn ends.
//!
//! Draws from an empty deck are silent no-ops. The draft is complete when
//! the deck and all three piles are empty.
//!
//! ## Automated seats
//!
//! When the turn passes to an automated seat the engine queues an
//! automated turn instead of recursing into the policy. Every public entry
//! point drains that queue before returning, so control only comes back to
//! the caller on a human turn or at the end of the draft.

use tracing::{debug, info, trace, warn};

use super::queue::{TurnQueue, Work};
use crate::cards::{Card, CardPool};
use crate::core::action::{ActionRecord, ActionSource, DraftAction};
use crate::core::config::DraftConfig;
use crate::core::entity::CardHandle;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::DraftRng;
use crate::core::state::{CardView, DraftPhase, DraftSnapshot};
use crate::error::{DraftError, InvalidStateError};
use crate::policy::{DecisionPolicy, PolicyView, WeightedPilePolicy};
use crate::zones::{PileIndex, VisibilityTracker, Zone, ZoneManager, PILE_COUNT};

/// Owns the pool, zones, visibility and cursors of one draft.
///
/// ## Example
///
/// ```
/// use winston_draft::cards::Card;
/// use winston_draft::core::{DraftAction, DraftConfig, PlayerId};
/// use winston_draft::rules::DraftEngine;
///
/// let cards = (0..12).map(|i| Card::new(format!("C{i}"), 2, "Instant", "U")).collect();
/// let config = DraftConfig::default().with_draft_size(9).with_seed(3);
///
/// let mut engine = DraftEngine::new(config);
/// engine.set_card_pool(cards).unwrap();
/// engine.start_draft().unwrap();
///
/// // Seat 1 is automated by default, so every call returns on seat 0's turn.
/// while !engine.is_complete() {
///     assert_eq!(engine.current_player(), PlayerId::FIRST);
///     engine.apply_action(DraftAction::TakePile).unwrap();
/// }
///
/// let drafted = engine.hand(PlayerId::FIRST).len() + engine.hand(PlayerId::SECOND).len();
/// assert_eq!(drafted, 9);
/// ```
#[derive(Clone, Debug)]
pub struct DraftEngine<P: DecisionPolicy = WeightedPilePolicy> {
    config: DraftConfig,
    pool: CardPool,
    zones: ZoneManager,
    visibility: VisibilityTracker,

    phase: DraftPhase,
    current_player: PlayerId,
    current_pile: PileIndex,
    turn: u32,

    policy: P,
    shuffle_rng: DraftRng,
    policy_rng: DraftRng,

    queue: TurnQueue,
    history: Vec<ActionRecord>,
}

impl DraftEngine<WeightedPilePolicy> {
    /// Create an engine using the size-weighted policy for automated seats.
    #[must_use]
    pub fn new(config: DraftConfig) -> Self {
        Self::with_policy(config, WeightedPilePolicy::new())
    }
}

impl<P: DecisionPolicy> DraftEngine<P> {
    /// Create an engine with a custom policy for automated seats.
    ///
    /// Dealing and automated decisions use independent streams derived
    /// from `config.seed`.
    #[must_use]
    pub fn with_policy(config: DraftConfig, policy: P) -> Self {
        let root = DraftRng::new(config.seed);
        Self {
            shuffle_rng: root.for_context("shuffle"),
            policy_rng: root.for_context("policy"),
            config,
            pool: CardPool::default(),
            zones: ZoneManager::new(),
            visibility: VisibilityTracker::new(),
            phase: DraftPhase::NotStarted,
            current_player: PlayerId::FIRST,
            current_pile: PileIndex::FIRST,
            turn: 0,
            policy,
            queue: TurnQueue::new(),
            history: Vec::new(),
        }
    }

    /// Replace the dealing and decision random sources.
    #[must_use]
    pub fn with_rngs(mut self, shuffle: DraftRng, policy: DraftRng) -> Self {
        self.shuffle_rng = shuffle;
        self.policy_rng = policy;
        self
    }

    // === Setup ===

    /// Load the pool to draft from.
    ///
    /// Resets the engine to `NotStarted`. Rejected while a draft is in
    /// progress, and for an empty card list.
    pub fn set_card_pool(&mut self, cards: Vec<Card>) -> Result<(), DraftError> {
        if self.phase == DraftPhase::InProgress {
            return Err(InvalidStateError::InProgress.into());
        }

        self.pool = CardPool::new(cards)?;
        self.zones = ZoneManager::new();
        self.visibility = VisibilityTracker::new();
        self.history.clear();
        self.queue.clear();
        self.phase = DraftPhase::NotStarted;

        debug!(pool_size = self.pool.len(), "card pool loaded");
        Ok(())
    }

    /// Shuffle, deal and seed the three piles, then hand the first turn to
    /// seat 0.
    ///
    /// May be called again to restart from the same pool. If seat 0 is
    /// automated its turns run before this returns.
    pub fn start_draft(&mut self) -> Result<(), DraftError> {
        let zones = ZoneManager::deal(&self.pool, self.config.draft_size, &mut self.shuffle_rng)?;

        self.zones = zones;
        self.visibility = VisibilityTracker::new();
        self.history.clear();
        self.queue.clear();
        self.current_player = PlayerId::FIRST;
        self.current_pile = PileIndex::FIRST;
        self.turn = 1;
        self.phase = DraftPhase::InProgress;

        for pile in PileIndex::all() {
            if let Some(card) = self.zones.draw_to_pile(pile) {
                self.visibility.register(card);
            }
        }

        info!(
            pool_size = self.pool.len(),
            draft_size = self.config.draft_size,
            unused = self.zones.unused().len(),
            "draft started"
        );

        self.update_phase();
        if self.phase == DraftPhase::InProgress {
            self.reveal_current_pile();
            if self.config.is_automated(self.current_player) {
                self.queue.push(Work::AutomatedTurn(self.current_player));
            }
            self.drain();
        }

        Ok(())
    }

    // === Actions ===

    /// Apply the current player's decision on the current pile.
    ///
    /// Any automated turns triggered by it run before this returns.
    pub fn apply_action(&mut self, action: DraftAction) -> Result<(), DraftError> {
        self.ensure_in_progress()?;

        self.queue.push(Work::Apply {
            player: self.current_player,
            action,
            source: ActionSource::Human,
        });
        self.drain();

        Ok(())
    }

    /// Decline the current pile.
    pub fn skip(&mut self) -> Result<(), DraftError> {
        self.apply_action(DraftAction::Skip)
    }

    /// Take the current pile.
    pub fn take_pile(&mut self) -> Result<(), DraftError> {
        self.apply_action(DraftAction::TakePile)
    }

    /// Mark every card in the current pile as seen by the current player.
    ///
    /// The engine does this itself before every decision; calling it again
    /// has no effect.
    pub fn reveal_current_pile(&mut self) {
        if self.phase != DraftPhase::InProgress {
            return;
        }
        let pile = self.zones.pile(self.current_pile);
        trace!(
            player = %self.current_player,
            pile = self.current_pile.index(),
            cards = pile.len(),
            "revealing pile"
        );
        self.visibility.mark_all_seen(pile, self.current_player);
    }

    fn ensure_in_progress(&self) -> Result<(), InvalidStateError> {
        match self.phase {
            DraftPhase::NotStarted => Err(InvalidStateError::NotStarted),
            DraftPhase::Complete => Err(InvalidStateError::Complete),
            DraftPhase::InProgress => Ok(()),
        }
    }

    /// Run queued work until none is left or the draft ends.
    fn drain(&mut self) {
        while let Some(work) = self.queue.pop() {
            if self.phase != DraftPhase::InProgress {
                self.queue.clear();
                break;
            }

            match work {
                Work::Apply {
                    player,
                    action,
                    source,
                } => {
                    debug_assert_eq!(player, self.current_player);
                    self.step(action, source);
                    self.update_phase();
                    self.reveal_current_pile();
                }
                Work::AutomatedTurn(player) => self.plan_automated_turn(player),
            }
        }
        debug_assert!(self.queue.is_empty());
    }

    fn plan_automated_turn(&mut self, player: PlayerId) {
        if player != self.current_player {
            return;
        }
        debug_assert_eq!(self.current_pile, PileIndex::FIRST);

        let view = self.policy_view();
        match self.policy.decide(&view, &mut self.policy_rng) {
            Some(decision) => {
                debug!(player = %player, ?decision, ?view, "automated decision");
                for action in decision.actions() {
                    self.queue.push(Work::Apply {
                        player,
                        action,
                        source: ActionSource::Automated,
                    });
                }
            }
            None => {
                warn!(player = %player, ?view, "policy made no decision, turn left to caller");
            }
        }
    }

    fn step(&mut self, action: DraftAction, source: ActionSource) {
        let player = self.current_player;
        let pile = self.current_pile;

        self.history.push(ActionRecord {
            sequence: self.history.len() as u32,
            turn: self.turn,
            player,
            action,
            pile: pile.index() as u8,
            source,
        });

        match action {
            DraftAction::Skip => {
                if let Some(card) = self.zones.draw_to_pile(pile) {
                    self.visibility.register(card);
                }

                match pile.next() {
                    Some(next) => self.current_pile = next,
                    None => {
                        self.current_pile = PileIndex::FIRST;
                        if let Some(card) = self.zones.draw_to_hand(player) {
                            self.visibility.register(card);
                            self.visibility.mark_seen(card, player);
                        }
                        self.switch_player();
                    }
                }
            }
            DraftAction::TakePile => {
                let taken = self.zones.take_pile(pile, player);
                debug_assert!(taken.iter().all(|&c| self.visibility.has_seen(c, player)));

                if let Some(card) = self.zones.draw_to_pile(pile) {
                    self.visibility.register(card);
                }
                self.current_pile = PileIndex::FIRST;
                self.switch_player();
            }
        }

        debug!(
            player = %player,
            %action,
            ?source,
            pile = pile.index(),
            deck = self.zones.deck().len(),
            "applied action"
        );
    }

    fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
        self.turn += 1;

        if self.config.is_automated(self.current_player) {
            self.queue.push(Work::AutomatedTurn(self.current_player));
        }
    }

    fn update_phase(&mut self) {
        if self.phase == DraftPhase::InProgress && self.zones.is_exhausted() {
            self.phase = DraftPhase::Complete;
            self.queue.clear();
            info!(
                hand_0 = self.zones.hand(PlayerId::FIRST).len(),
                hand_1 = self.zones.hand(PlayerId::SECOND).len(),
                actions = self.history.len(),
                "draft complete"
            );
        }
    }

    fn policy_view(&self) -> PolicyView {
        PolicyView {
            pile_sizes: self.zones.piles().sizes(),
            deck_size: self.zones.deck().len(),
        }
    }

    // === Queries ===

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    /// Check if the draft is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == DraftPhase::Complete
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn current_pile(&self) -> PileIndex {
        self.current_pile
    }

    /// The loaded pool.
    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Look up a card by handle.
    #[must_use]
    pub fn card(&self, handle: CardHandle) -> Option<&Card> {
        self.pool.get(handle)
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.zones.deck().len()
    }

    /// Cards left out of this draft.
    #[must_use]
    pub fn unused(&self) -> &[CardHandle] {
        self.zones.unused()
    }

    /// Cards in a pile, in arrival order.
    #[must_use]
    pub fn pile(&self, pile: PileIndex) -> &[CardHandle] {
        self.zones.pile(pile)
    }

    /// A player's kept cards, in the order they were kept.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[CardHandle] {
        self.zones.hand(player)
    }

    /// Where a card currently is.
    #[must_use]
    pub fn zone_of(&self, card: CardHandle) -> Option<Zone> {
        self.zones.zone_of(card)
    }

    /// Check whether a player has seen a card.
    #[must_use]
    pub fn has_seen(&self, card: CardHandle, player: PlayerId) -> bool {
        self.visibility.has_seen(card, player)
    }

    /// Every action applied since the draft started.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// The policy driving automated seats.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    // === Snapshots ===

    /// Read-only picture of the draft as `observer` knows it.
    #[must_use]
    pub fn snapshot(&self, observer: PlayerId) -> DraftSnapshot<'_> {
        self.build_snapshot(observer, false)
    }

    /// Snapshot with every card shown and the unused cards listed.
    ///
    /// Only available once the draft is complete.
    pub fn revealed_snapshot(
        &self,
        observer: PlayerId,
    ) -> Result<DraftSnapshot<'_>, InvalidStateError> {
        if self.phase != DraftPhase::Complete {
            return Err(InvalidStateError::NotComplete);
        }
        Ok(self.build_snapshot(observer, true))
    }

    fn build_snapshot(&self, observer: PlayerId, reveal_all: bool) -> DraftSnapshot<'_> {
        let mut piles: [Vec<CardView<'_>>; PILE_COUNT] = Default::default();
        for pile in PileIndex::all() {
            piles[pile.index()] = self.card_views(self.zones.pile(pile), observer, reveal_all);
        }

        let unused = if reveal_all {
            self.zones
                .unused()
                .iter()
                .filter_map(|&handle| self.pool.get(handle))
                .collect()
        } else {
            Vec::new()
        };

        DraftSnapshot {
            observer,
            revealed: reveal_all,
            phase: self.phase,
            pool_size: self.pool.len(),
            draft_size: self.config.draft_size,
            deck_size: self.zones.deck().len(),
            cards_used: self.config.draft_size.saturating_sub(self.zones.deck().len()),
            unused_count: self.zones.unused().len(),
            current_player: self.current_player,
            current_pile: self.current_pile,
            piles,
            hands: PlayerMap::new(|player| {
                self.card_views(self.zones.hand(player), observer, reveal_all)
            }),
            unused,
        }
    }

    fn card_views(
        &self,
        cards: &[CardHandle],
        observer: PlayerId,
        reveal_all: bool,
    ) -> Vec<CardView<'_>> {
        cards
            .iter()
            .map(|&handle| self.card_view(handle, observer, reveal_all))
            .collect()
    }

    fn card_view(&self, handle: CardHandle, observer: PlayerId, reveal_all: bool) -> CardView<'_> {
        let visible = reveal_all || self.visibility.has_seen(handle, observer);
        match self.pool.get(handle) {
            Some(card) if visible => CardView::Visible { handle, card },
            _ => CardView::Hidden { handle },
        }
    }
}
