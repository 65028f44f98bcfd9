//! # winston-draft
//!
//! A two-player Winston draft engine.
//!
//! Two players draft from a shuffled deck through three face-up piles.
//! On each turn the current player looks at the piles in order and either
//! takes one or skips it; skipping adds a card from the deck to the pile.
//! Skipping all three piles forces a blind draw from the deck. Any seat
//! may be driven by a `DecisionPolicy` instead of a human.
//!
//! ## Design
//!
//! - **Arena ownership**: cards live once in a `CardPool`; every zone holds
//!   `CardHandle`s into it.
//! - **Per-player knowledge**: a `VisibilityTracker` records which cards
//!   each player has seen, and snapshots mask everything else.
//! - **No recursion**: automated turns are queued and drained by an
//!   explicit work loop inside the engine.
//! - **Deterministic**: a seeded ChaCha8 stream drives dealing, a second one
//!   drives automated decisions.
//!
//! ## Modules
//!
//! - `core`: handles, players, RNG, configuration, actions, snapshots
//! - `cards`: card records and the pool
//! - `zones`: deck, piles, hands and visibility
//! - `policy`: automated decision policies
//! - `rules`: the `DraftEngine` state machine
//! - `ingest`: CubeCobra CSV loading
//! - `error`: engine error types

pub mod core;
pub mod cards;
pub mod zones;
pub mod policy;
pub mod rules;
pub mod ingest;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, ActionSource, CardHandle, CardView, DraftAction, DraftConfig, DraftPhase,
    DraftRng, DraftSnapshot, PlayerId, PlayerMap,
};
pub use crate::cards::{Card, CardPool, Color, ColorCategory};
pub use crate::zones::{PileIndex, Zone};
pub use crate::policy::{Decision, DecisionPolicy, PolicyView, ScriptedPolicy, WeightedPilePolicy};
pub use crate::rules::DraftEngine;
pub use crate::ingest::{load_cube_csv, read_cube_csv, IngestError};
pub use crate::error::{ConfigurationError, DraftError, InvalidStateError};
