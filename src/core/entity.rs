//! Card identification.
//!
//! Every card in the pool has a unique `CardHandle`: its index in the
//! `CardPool` arena. Zones store handles, never cards, so two cards with
//! the same name stay distinguishable and a card can only ever be moved,
//! not copied.
//!
//! ## Usage
//!
//! ```
//! use winston_draft::core::CardHandle;
//!
//! let handle = CardHandle::new(3);
//! assert_eq!(handle.index(), 3);
//! assert_eq!(format!("{}", handle), "Card#3");
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier for a card in the pool arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardHandle(pub u32);

impl CardHandle {
    /// Create a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Get the arena index this handle refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardHandle {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}
