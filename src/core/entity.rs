//! Card instance identification.
//!
//! Every card that exists during a game has a unique `InstanceId`.
//!
//! ## Allocation
//!
//! Ids are allocated monotonically by `GameState` starting at 1 and are
//! never reused, even after a card has been moved to a terminal zone.
//! Both running instances allocate in the same order, so the same logical
//! card carries the same id on both sides.
//!
//! ```
//! use ccg_solver::core::InstanceId;
//!
//! let card = InstanceId::new(10);
//! assert_eq!(card.raw(), 10);
//! assert_eq!(card.next(), InstanceId::new(11));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
///
/// Ordered so that candidate lists can be sorted into a stable key
/// before any random choice is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// The first id handed out in a game.
    pub const FIRST: InstanceId = InstanceId(1);

    /// Create an instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// The owner of a stat: either a player or a card instance.
///
/// Used as part of the key of the stat-watcher table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatOwner {
    /// A player's stat (life, mana, ...).
    Player(super::PlayerId),
    /// A card's stat (attack, life, ...).
    Card(InstanceId),
}

impl std::fmt::Display for StatOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatOwner::Player(player) => write!(f, "{}", player),
            StatOwner::Card(card) => write!(f, "{}", card),
        }
    }
}
