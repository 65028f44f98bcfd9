//! Card system: records and the pool arena.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card record (name, mana value, type line, color)
//! - `ColorCategory`: Closed color grouping derived from a raw color string
//! - `CardPool`: Arena owning every card, addressed by `CardHandle`

pub mod definition;
pub mod pool;

pub use definition::{Card, Color, ColorCategory};
pub use pool::CardPool;
