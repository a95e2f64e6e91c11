//! A player's zone: an ordered sequence of card instances.
//!
//! Order is significant everywhere: index 0 is the bottom, the last element
//! is the top. Moved cards are appended (they land on top), draws take from
//! the top.
//!
//! Card sequences are `im::Vector`s so the solver can take an O(1) snapshot
//! of a zone before dispatching triggers over it, while those triggers are
//! free to move cards in and out of the live zone.

use im::Vector;
use serde::Serialize;

use crate::core::config::{ZoneDefinition, ZoneId, ZoneKind, ZoneVisibility};
use crate::core::entity::InstanceId;

/// An ordered zone owned by one player.
///
/// Only the solver mutates zones; everything else sees them through
/// shared references.
///
/// ## Usage
///
/// ```
/// use ccg_solver::core::{ZoneDefinition, ZoneId};
/// use ccg_solver::zones::Zone;
///
/// let board = Zone::new(ZoneDefinition::new(ZoneId::new(2), "Board").dynamic());
///
/// assert!(board.is_empty());
/// assert!(board.is_triggering());
/// assert_eq!(board.name(), "Board");
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct Zone {
    definition: ZoneDefinition,
    cards: Vector<InstanceId>,
}

impl Zone {
    /// Create an empty zone from its definition.
    #[must_use]
    pub fn new(definition: ZoneDefinition) -> Self {
        Self {
            definition,
            cards: Vector::new(),
        }
    }

    /// Zone id.
    #[must_use]
    pub fn id(&self) -> ZoneId {
        self.definition.id
    }

    /// Zone name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// The zone's definition.
    #[must_use]
    pub fn definition(&self) -> &ZoneDefinition {
        &self.definition
    }

    /// Dynamic or static.
    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.definition.kind
    }

    /// Opponent visibility.
    #[must_use]
    pub fn visibility(&self) -> ZoneVisibility {
        self.definition.visibility
    }

    /// Whether cards here receive turn and stat triggers.
    #[must_use]
    pub fn is_triggering(&self) -> bool {
        self.definition.is_triggering()
    }

    /// Cards in order (bottom first).
    #[must_use]
    pub fn cards(&self) -> &Vector<InstanceId> {
        &self.cards
    }

    /// O(1) copy of the current card order.
    #[must_use]
    pub fn snapshot(&self) -> Vector<InstanceId> {
        self.cards.clone()
    }

    /// Check if a card is in this zone.
    #[must_use]
    pub fn contains(&self, card: InstanceId) -> bool {
        self.cards.contains(&card)
    }

    /// Position of a card (0 = bottom).
    #[must_use]
    pub fn position(&self, card: InstanceId) -> Option<usize> {
        self.cards.index_of(&card)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the zone is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card (last in order).
    #[must_use]
    pub fn top(&self) -> Option<InstanceId> {
        self.cards.last().copied()
    }

    /// Append a card on top.
    pub(crate) fn push(&mut self, card: InstanceId) {
        self.cards.push_back(card);
    }

    /// Remove a card wherever it is. Returns false if it was not here.
    pub(crate) fn remove(&mut self, card: InstanceId) -> bool {
        match self.cards.index_of(&card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the top card.
    pub(crate) fn pop_top(&mut self) -> Option<InstanceId> {
        self.cards.pop_back()
    }
}
