//! Zone system for card locations.
//!
//! A drafted card is always in exactly one zone: the deck, the unused
//! set, one of the three piles, or a hand. Zones hold `CardHandle`s into
//! the pool arena, never cards.
//!
//! ## Key Types
//!
//! - `Deck`: Shuffled face-down stack, drawn from the top
//! - `PileBank` / `PileIndex`: The three face-up piles
//! - `ZoneManager`: Owns every container and moves cards between them
//! - `VisibilityTracker`: Which player has seen which card

pub mod deck;
pub mod manager;
pub mod piles;
pub mod visibility;

pub use deck::Deck;
pub use manager::{Zone, ZoneManager};
pub use piles::{PileBank, PileIndex, PILE_COUNT};
pub use visibility::VisibilityTracker;
