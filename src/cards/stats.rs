//! Stats: named numeric values on players and cards.
//!
//! A stat has a base value, optional bounds, and a list of timed modifiers.
//! Its effective value is `clamp(base + sum(modifiers), min, max)`; combat
//! and conditions always read the effective value.
//!
//! Stats never call back into the engine themselves. Every mutation returns a
//! `StatChange` describing the effective value before and after, and the
//! solver hands that change to the stat's registered watchers.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Catalog definition of a stat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatDefinition {
    /// Stat name (unique within its owner).
    pub name: String,
    /// Starting base value.
    pub base_value: i64,
    /// Lowest effective value.
    pub min_value: i64,
    /// Highest effective value.
    pub max_value: i64,
}

impl StatDefinition {
    /// Create an unbounded stat definition.
    pub fn new(name: impl Into<String>, base_value: i64) -> Self {
        Self {
            name: name.into(),
            base_value,
            min_value: i64::MIN,
            max_value: i64::MAX,
        }
    }

    /// Bound the effective value (builder pattern).
    #[must_use]
    pub fn with_bounds(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }
}

/// A temporary adjustment to a stat's effective value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    /// Amount added to the effective value (may be negative).
    pub value: i64,
    /// Turns remaining; removed when it reaches zero.
    pub duration: u32,
}

/// Effective value of a stat before and after a mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatChange {
    pub old: i64,
    pub new: i64,
}

impl StatChange {
    #[must_use]
    pub fn increased(&self) -> bool {
        self.new > self.old
    }

    #[must_use]
    pub fn decreased(&self) -> bool {
        self.new < self.old
    }
}

/// A stat instance on a player or card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stat {
    name: String,
    base_value: i64,
    min_value: i64,
    max_value: i64,
    modifiers: SmallVec<[Modifier; 2]>,
}

impl Stat {
    /// Instantiate a stat from its definition.
    #[must_use]
    pub fn from_definition(definition: &StatDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            base_value: definition.base_value,
            min_value: definition.min_value,
            max_value: definition.max_value,
            modifiers: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn base_value(&self) -> i64 {
        self.base_value
    }

    /// Active modifiers, oldest first.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Base plus modifiers, clamped to the stat's bounds.
    #[must_use]
    pub fn effective_value(&self) -> i64 {
        let total = self
            .modifiers
            .iter()
            .fold(self.base_value, |acc, m| acc.saturating_add(m.value));
        total.clamp(self.min_value, self.max_value)
    }

    /// Overwrite the base value.
    pub fn set_base(&mut self, value: i64) -> StatChange {
        let old = self.effective_value();
        self.base_value = value;
        StatChange {
            old,
            new: self.effective_value(),
        }
    }

    /// Add to the base value.
    pub fn add_base(&mut self, delta: i64) -> StatChange {
        self.set_base(self.base_value.saturating_add(delta))
    }

    /// Attach a timed modifier. A zero duration is treated as one turn.
    pub fn add_modifier(&mut self, value: i64, duration: u32) -> StatChange {
        let old = self.effective_value();
        self.modifiers.push(Modifier {
            value,
            duration: duration.max(1),
        });
        StatChange {
            old,
            new: self.effective_value(),
        }
    }

    /// Age every modifier by one turn and drop the expired ones.
    ///
    /// Returns a change only if at least one modifier expired.
    pub fn tick_modifiers(&mut self) -> Option<StatChange> {
        if self.modifiers.is_empty() {
            return None;
        }
        let old = self.effective_value();
        let before = self.modifiers.len();
        for modifier in &mut self.modifiers {
            modifier.duration -= 1;
        }
        self.modifiers.retain(|m| m.duration > 0);
        if self.modifiers.len() == before {
            return None;
        }
        Some(StatChange {
            old,
            new: self.effective_value(),
        })
    }
}

/// A set of stats in declaration order, also reachable by name.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct StatBlock {
    stats: Vec<Stat>,
    #[serde(skip)]
    named: FxHashMap<String, usize>,
}

impl StatBlock {
    /// Instantiate every definition at its base value.
    #[must_use]
    pub fn from_definitions(definitions: &[StatDefinition]) -> Self {
        let stats: Vec<Stat> = definitions.iter().map(Stat::from_definition).collect();
        let named = stats
            .iter()
            .enumerate()
            .map(|(i, s)| (s.name.clone(), i))
            .collect();
        Self { stats, named }
    }

    /// Look up a stat by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Stat> {
        self.named.get(name).map(|&i| &self.stats[i])
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Stat> {
        let index = *self.named.get(name)?;
        Some(&mut self.stats[index])
    }

    /// Effective value of a stat, if present.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<i64> {
        self.get(name).map(Stat::effective_value)
    }

    /// Stats in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Stat> {
        self.stats.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Stat> {
        self.stats.iter_mut()
    }

    /// Stat names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stats.iter().map(Stat::name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
