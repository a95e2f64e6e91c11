//! Player identification and per-player zones and stats.
//!
//! ## PlayerId
//!
//! Stable player identifier assigned by the session (not a seat index).
//!
//! ## PlayerInfo
//!
//! A player's zones (in configuration-declared order, also reachable by
//! name) and stats (also reachable by name). Both name indices are built
//! once from the configuration and never diverge from the underlying
//! vectors.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::{ZoneDefinition, ZoneId};
use super::entity::InstanceId;
use crate::cards::{Stat, StatBlock, StatDefinition};
use crate::zones::Zone;

/// Stable player identifier.
///
/// Ordered so random player selection can sort candidates by id
/// before consulting the generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's runtime data: zones and stats.
///
/// ## Example
///
/// ```
/// use ccg_solver::cards::StatDefinition;
/// use ccg_solver::core::{PlayerId, PlayerInfo, ZoneDefinition, ZoneId};
///
/// let zones = [
///     ZoneDefinition::new(ZoneId::new(0), "Hand").hidden(),
///     ZoneDefinition::new(ZoneId::new(1), "Board").dynamic(),
/// ];
/// let stats = [StatDefinition::new("Life", 20)];
///
/// let player = PlayerInfo::new(PlayerId::new(7), &zones, &stats);
///
/// assert_eq!(player.named_zone("Board").map(|z| z.id()), Some(ZoneId::new(1)));
/// assert_eq!(player.stat("Life").map(|s| s.effective_value()), Some(20));
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct PlayerInfo {
    /// Stable player id.
    pub id: PlayerId,

    /// Zones in configuration order.
    zones: Vec<Zone>,

    /// Zone name -> index into `zones`.
    #[serde(skip)]
    named_zones: FxHashMap<String, usize>,

    /// Player stats (life, mana, ...).
    stats: StatBlock,
}

impl PlayerInfo {
    /// Create a player with empty zones and stats at their base values.
    #[must_use]
    pub fn new(id: PlayerId, zones: &[ZoneDefinition], stats: &[StatDefinition]) -> Self {
        let zones: Vec<Zone> = zones.iter().cloned().map(Zone::new).collect();
        let named_zones = zones
            .iter()
            .enumerate()
            .map(|(i, zone)| (zone.name().to_string(), i))
            .collect();

        Self {
            id,
            zones,
            named_zones,
            stats: StatBlock::from_definitions(stats),
        }
    }

    // === Zones ===

    /// All zones, in configuration order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Look up a zone by id.
    #[must_use]
    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id() == id)
    }

    pub(crate) fn zone_mut(&mut self, id: ZoneId) -> Option<&mut Zone> {
        self.zones.iter_mut().find(|z| z.id() == id)
    }

    /// Look up a zone by name.
    #[must_use]
    pub fn named_zone(&self, name: &str) -> Option<&Zone> {
        self.named_zones.get(name).map(|&i| &self.zones[i])
    }

    /// Zones whose cards react to turn and stat triggers
    /// (dynamic and visible to the opponent), in configuration order.
    pub fn triggering_zones(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter().filter(|z| z.is_triggering())
    }

    /// Find which zone holds a card.
    #[must_use]
    pub fn zone_of(&self, card: InstanceId) -> Option<ZoneId> {
        self.zones.iter().find(|z| z.contains(card)).map(Zone::id)
    }

    // === Stats ===

    /// The player's stats.
    #[must_use]
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    /// Look up a stat by name.
    #[must_use]
    pub fn stat(&self, name: &str) -> Option<&Stat> {
        self.stats.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> Vec<ZoneDefinition> {
        vec![
            ZoneDefinition::new(ZoneId::new(0), "Deck").hidden(),
            ZoneDefinition::new(ZoneId::new(1), "Board").dynamic(),
            ZoneDefinition::new(ZoneId::new(2), "Graveyard"),
        ]
    }

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(3);
        assert_eq!(p.raw(), 3);
        assert_eq!(format!("{}", p), "Player 3");
        assert!(PlayerId::new(1) < PlayerId::new(2));
    }

    #[test]
    fn test_zone_views_agree() {
        let player = PlayerInfo::new(PlayerId::new(0), &zones(), &[]);

        for (i, zone) in player.zones().iter().enumerate() {
            let by_name = player.named_zone(zone.name()).unwrap();
            let by_id = player.zone(zone.id()).unwrap();
            assert_eq!(by_name.id(), by_id.id());
            assert_eq!(by_id.id(), ZoneId::new(i as u16));
        }
        assert!(player.named_zone("Hand").is_none());
        assert!(player.zone(ZoneId::new(9)).is_none());
    }

    #[test]
    fn test_triggering_zones() {
        let player = PlayerInfo::new(PlayerId::new(0), &zones(), &[]);
        let triggering: Vec<_> = player.triggering_zones().map(Zone::id).collect();
        assert_eq!(triggering, vec![ZoneId::new(1)]);
    }

    #[test]
    fn test_zone_of() {
        let mut player = PlayerInfo::new(PlayerId::new(0), &zones(), &[]);
        player.zone_mut(ZoneId::new(1)).unwrap().push(InstanceId(5));

        assert_eq!(player.zone_of(InstanceId(5)), Some(ZoneId::new(1)));
        assert_eq!(player.zone_of(InstanceId(6)), None);
    }

    #[test]
    fn test_player_stats() {
        let stats = [
            StatDefinition::new("Life", 20),
            StatDefinition::new("Mana", 1),
        ];
        let player = PlayerInfo::new(PlayerId::new(0), &[], &stats);

        assert_eq!(player.stat("Life").unwrap().base_value(), 20);
        assert_eq!(player.stat("Mana").unwrap().base_value(), 1);
        assert!(player.stat("Attack").is_none());
    }
}
