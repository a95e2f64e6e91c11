//! Stat-watcher table.
//!
//! Maps `(stat owner, stat name)` to the watchers registered on that stat,
//! in registration order. The solver consults it after every stat
//! mutation and runs each watcher synchronously.
//!
//! Watchers are plain descriptors, not callbacks, so the table can live in
//! `GameState` and be cloned with it.

use rustc_hash::FxHashMap;

use crate::core::{InstanceId, PlayerId, StatOwner};
use crate::triggers::StatSubject;

/// Something to run when a watched stat changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Watcher {
    /// Dispatch the three stat trigger kinds to every card in `player`'s
    /// triggering zones, matching triggers on `subject`.
    Propagate {
        player: PlayerId,
        subject: StatSubject,
    },

    /// Re-check destroy condition `condition` (index into the card type's
    /// destroy conditions) of `card`, owned by `player`.
    Destroy {
        player: PlayerId,
        card: InstanceId,
        condition: usize,
    },
}

/// `(owner, stat) -> [Watcher]`.
#[derive(Clone, Debug, Default)]
pub struct StatWatchers {
    table: FxHashMap<StatOwner, FxHashMap<String, Vec<Watcher>>>,
}

impl StatWatchers {
    /// Register a watcher. Returns false if the same watcher was already
    /// registered on this stat (it is not added twice).
    pub fn register(&mut self, owner: StatOwner, stat: &str, watcher: Watcher) -> bool {
        let list = self
            .table
            .entry(owner)
            .or_default()
            .entry(stat.to_string())
            .or_default();
        if list.contains(&watcher) {
            return false;
        }
        list.push(watcher);
        true
    }

    /// Watchers on a stat, in registration order.
    #[must_use]
    pub fn get(&self, owner: StatOwner, stat: &str) -> &[Watcher] {
        self.table
            .get(&owner)
            .and_then(|stats| stats.get(stat))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered watchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table
            .values()
            .flat_map(FxHashMap::values)
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
