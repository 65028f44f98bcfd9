//! Core draft types: card handles, players, RNG, configuration, actions,
//! phase and snapshots.
//!
//! This module contains the building blocks the zones, policies and rules
//! are written against.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::CardHandle;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::DraftRng;
pub use config::{DraftConfig, DEFAULT_DRAFT_SIZE, DEFAULT_SEED};
pub use action::{ActionRecord, ActionSource, DraftAction};
pub use state::{CardView, DraftPhase, DraftSnapshot};
