//! The card catalog.
//!
//! Definitions are kept in registration order, which is also the order
//! `GameConfig::validate` walks them. On disk the catalog is a plain list;
//! the id index is rebuilt on load.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// Card definitions by id.
///
/// ## Example
///
/// ```
/// use ccg_solver::cards::{CardDefinition, CardId, CardRegistry, CardTypeId};
///
/// let mut registry = CardRegistry::new();
///
/// let imp = CardDefinition::new(CardId::new(1), "Fire Imp", CardTypeId::new(0));
/// registry.register(imp.with_stat("Attack", 3));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Fire Imp");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CardDefinition>", into = "Vec<CardDefinition>")]
pub struct CardRegistry {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition.
    ///
    /// A repeated id is kept but shadowed by the first registration;
    /// `GameConfig::validate` rejects such a catalog.
    pub fn register(&mut self, card: CardDefinition) {
        self.index.entry(card.id).or_insert(self.cards.len());
        self.cards.push(card);
    }

    /// The definition registered first under `id`.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// The first id registered more than once, if any.
    #[must_use]
    pub fn first_duplicate(&self) -> Option<CardId> {
        self.cards
            .iter()
            .enumerate()
            .find(|(i, card)| self.index.get(&card.id) != Some(i))
            .map(|(_, card)| card.id)
    }

    /// Number of definitions, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }
}

impl From<Vec<CardDefinition>> for CardRegistry {
    fn from(cards: Vec<CardDefinition>) -> Self {
        let mut registry = CardRegistry::new();
        for card in cards {
            registry.register(card);
        }
        registry
    }
}

impl From<CardRegistry> for Vec<CardDefinition> {
    fn from(registry: CardRegistry) -> Self {
        registry.cards
    }
}
