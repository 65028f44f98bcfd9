//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A Winston draft always has exactly two seats, `PlayerId::FIRST` (seat 0,
//! who acts first) and `PlayerId::SECOND` (seat 1).
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats in a draft.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier, 0 or 1.
///
/// The seat number is private, so every `PlayerId` is a valid seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Seat 0, who opens the draft.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Seat 1.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Seat must be 0 or 1");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat across the table.
    ///
    /// ```
    /// use winston_draft::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Iterate over both seats in order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(format!("seat {id} out of range"))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> u8 {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Seats are shown 1-based to people.
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use winston_draft::core::{PlayerId, PlayerMap};
///
/// let mut picks: PlayerMap<u32> = PlayerMap::with_value(0);
/// picks[PlayerId::SECOND] += 3;
///
/// assert_eq!(picks[PlayerId::FIRST], 0);
/// assert_eq!(picks[PlayerId::SECOND], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Transform every entry, keeping the seat association.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|p| f(p, self.get(p)))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
