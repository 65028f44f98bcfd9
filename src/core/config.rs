//! Draft configuration.
//!
//! The engine consumes, never produces, its configuration:
//! - `draft_size`: how many pool cards are dealt into the deck
//! - `seed`: root of every random stream the engine uses
//! - `automated`: which seats are played by the decision policy

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Draft size used when none is configured.
pub const DEFAULT_DRAFT_SIZE: usize = 90;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Draft configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Number of cards dealt from the pool into the deck (default: 90).
    /// Must be positive and no larger than the pool.
    pub draft_size: usize,

    /// Random seed for dealing and automated decisions.
    /// Same seed and same human inputs produce the same draft.
    pub seed: u64,

    /// Seats driven by the decision policy rather than by the caller.
    pub automated: PlayerMap<bool>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            draft_size: DEFAULT_DRAFT_SIZE,
            seed: DEFAULT_SEED,
            automated: PlayerMap::new(|p| p == PlayerId::SECOND),
        }
    }
}

impl DraftConfig {
    /// Set the draft size.
    #[must_use]
    pub fn with_draft_size(mut self, draft_size: usize) -> Self {
        self.draft_size = draft_size;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the automated opponent in seat 1.
    #[must_use]
    pub fn with_automated_opponent(self, enabled: bool) -> Self {
        self.with_automated(PlayerId::SECOND, enabled)
    }

    /// Mark a single seat as automated or human.
    #[must_use]
    pub fn with_automated(mut self, player: PlayerId, enabled: bool) -> Self {
        self.automated[player] = enabled;
        self
    }

    /// Two human seats.
    #[must_use]
    pub fn human_only(mut self) -> Self {
        self.automated = PlayerMap::with_value(false);
        self
    }

    /// Check whether a seat is automated.
    #[must_use]
    pub fn is_automated(&self, player: PlayerId) -> bool {
        self.automated[player]
    }
}
