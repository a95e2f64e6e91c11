//! Game state: players, zones, cards, stats, and the generator.
//!
//! ## GameState
//!
//! The single source of truth for one running instance:
//! - The configuration handle (`Arc<GameConfig>`, read-only)
//! - Exactly two players in seat order, one of them current
//! - Every card instance ever created, by id
//! - The session random generator
//! - The stat-watcher table
//!
//! Read access is public. Mutation is `pub(crate)`: only the solver and
//! the effect applier change state, so both instances of a session apply
//! the same mutations in the same order.
//!
//! ## Snapshots
//!
//! `snapshot_bytes` encodes everything that must agree between instances
//! (players, zones, stats, cards ordered by id, generator position,
//! current player) with `bincode`, so two instances can be compared
//! byte for byte.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use super::config::{GameConfig, ZoneId};
use super::entity::{InstanceId, StatOwner};
use super::error::{ConfigError, LookupError, Result, SolverError};
use super::player::{PlayerId, PlayerInfo};
use super::rng::{GameRng, GameRngState};
use crate::cards::{CardId, RuntimeCard, StatBlock};
use crate::rules::watchers::StatWatchers;
use crate::zones::Zone;

/// A player joining the session, with their initial deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSetup {
    pub id: PlayerId,
    /// Card definitions, bottom of the deck first.
    pub deck: Vec<CardId>,
}

impl PlayerSetup {
    pub fn new(id: PlayerId, deck: Vec<CardId>) -> Self {
        Self { id, deck }
    }
}

/// Complete state of one running instance.
#[derive(Clone, Debug)]
pub struct GameState {
    config: Arc<GameConfig>,
    players: Vec<PlayerInfo>,
    current: usize,
    cards: FxHashMap<InstanceId, RuntimeCard>,
    next_instance: InstanceId,
    rng: GameRng,
    watchers: StatWatchers,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    current: PlayerId,
    next_instance: InstanceId,
    rng: GameRngState,
    players: &'a [PlayerInfo],
    cards: Vec<&'a RuntimeCard>,
}

impl GameState {
    /// Create the state for a new game.
    ///
    /// Validates the configuration, creates both players with empty zones
    /// and stats at their base values, and instantiates each deck into the
    /// deck zone (in list order, so the last card is on top). The first
    /// player in `players` is current.
    pub fn new(config: Arc<GameConfig>, seed: u64, players: [PlayerSetup; 2]) -> Result<Self> {
        config.validate()?;
        if players[0].id == players[1].id {
            return Err(ConfigError::InvalidPlayers.into());
        }

        let mut state = Self {
            players: players
                .iter()
                .map(|setup| PlayerInfo::new(setup.id, &config.zones, &config.player_stats))
                .collect(),
            config,
            current: 0,
            cards: FxHashMap::default(),
            next_instance: InstanceId::FIRST,
            rng: GameRng::new(seed),
            watchers: StatWatchers::default(),
        };

        let deck_zone = state.config.rules.deck_zone;
        for setup in &players {
            for &card_id in &setup.deck {
                state.create_card(setup.id, card_id, deck_zone)?;
            }
        }

        debug!(seed, cards = state.cards.len(), "game state created");
        Ok(state)
    }

    // === Configuration ===

    /// The shared configuration handle.
    #[must_use]
    pub fn config(&self) -> &Arc<GameConfig> {
        &self.config
    }

    // === Players ===

    /// Both players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    /// Look up a player.
    pub fn player(&self, id: PlayerId) -> std::result::Result<&PlayerInfo, LookupError> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(LookupError::PlayerNotFound(id))
    }

    pub(crate) fn player_mut(
        &mut self,
        id: PlayerId,
    ) -> std::result::Result<&mut PlayerInfo, LookupError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LookupError::PlayerNotFound(id))
    }

    /// The other player.
    pub fn opponent_of(&self, id: PlayerId) -> std::result::Result<PlayerId, LookupError> {
        self.player(id)?;
        self.players
            .iter()
            .map(|p| p.id)
            .find(|&p| p != id)
            .ok_or(LookupError::PlayerNotFound(id))
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current].id
    }

    pub(crate) fn set_current_player(
        &mut self,
        id: PlayerId,
    ) -> std::result::Result<(), LookupError> {
        self.current = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(LookupError::PlayerNotFound(id))?;
        Ok(())
    }

    // === Zones ===

    /// Look up one of a player's zones.
    pub fn zone(&self, player: PlayerId, zone: ZoneId) -> std::result::Result<&Zone, LookupError> {
        self.player(player)?
            .zone(zone)
            .ok_or(LookupError::ZoneNotFound { player, zone })
    }

    pub(crate) fn zone_mut(
        &mut self,
        player: PlayerId,
        zone: ZoneId,
    ) -> std::result::Result<&mut Zone, LookupError> {
        self.player_mut(player)?
            .zone_mut(zone)
            .ok_or(LookupError::ZoneNotFound { player, zone })
    }

    /// Where a card currently is: its owner and the owner's zone holding it.
    #[must_use]
    pub fn location_of(&self, card: InstanceId) -> Option<(PlayerId, ZoneId)> {
        let owner = self.cards.get(&card)?.owner;
        let zone = self.player(owner).ok()?.zone_of(card)?;
        Some((owner, zone))
    }

    // === Cards ===

    /// Look up a card instance.
    pub fn card(&self, id: InstanceId) -> std::result::Result<&RuntimeCard, LookupError> {
        self.cards.get(&id).ok_or(LookupError::CardNotFound(id))
    }

    pub(crate) fn card_mut(
        &mut self,
        id: InstanceId,
    ) -> std::result::Result<&mut RuntimeCard, LookupError> {
        self.cards.get_mut(&id).ok_or(LookupError::CardNotFound(id))
    }

    /// Number of card instances created so far.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Instantiate a card and append it to one of its owner's zones.
    ///
    /// No triggers are dispatched.
    pub(crate) fn create_card(
        &mut self,
        owner: PlayerId,
        card_id: CardId,
        zone: ZoneId,
    ) -> Result<InstanceId> {
        let definition = self
            .config
            .card(card_id)
            .ok_or(LookupError::CardDefinitionNotFound(card_id))?;
        let card_type = self
            .config
            .card_type(definition.card_type)
            .ok_or(LookupError::CardTypeNotFound(definition.card_type))?;
        self.zone(owner, zone)?;

        let id = self.next_instance;
        let card = RuntimeCard::new(id, definition, card_type, owner);
        self.next_instance = id.next();
        self.cards.insert(id, card);
        self.zone_mut(owner, zone)?.push(id);
        Ok(id)
    }

    // === Stats ===

    /// Stats of a player or card.
    pub fn stats(&self, owner: StatOwner) -> std::result::Result<&StatBlock, LookupError> {
        match owner {
            StatOwner::Player(player) => Ok(self.player(player)?.stats()),
            StatOwner::Card(card) => Ok(self.card(card)?.stats()),
        }
    }

    pub(crate) fn stats_mut(
        &mut self,
        owner: StatOwner,
    ) -> std::result::Result<&mut StatBlock, LookupError> {
        match owner {
            StatOwner::Player(player) => Ok(self.player_mut(player)?.stats_mut()),
            StatOwner::Card(card) => Ok(self.card_mut(card)?.stats_mut()),
        }
    }

    /// Effective value of a stat, if the owner exists and has it.
    #[must_use]
    pub fn stat_value(&self, owner: StatOwner, stat: &str) -> Option<i64> {
        self.stats(owner).ok()?.value(stat)
    }

    // === Generator ===

    /// The session generator.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    pub(crate) fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    // === Watchers ===

    /// The stat-watcher table.
    #[must_use]
    pub fn watchers(&self) -> &StatWatchers {
        &self.watchers
    }

    pub(crate) fn watchers_mut(&mut self) -> &mut StatWatchers {
        &mut self.watchers
    }

    // === Snapshots ===

    /// Canonical encoding of the replicated state.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>> {
        let mut cards: Vec<&RuntimeCard> = self.cards.values().collect();
        cards.sort_by_key(|c| c.instance_id);

        let snapshot = Snapshot {
            current: self.current_player(),
            next_instance: self.next_instance,
            rng: self.rng.state(),
            players: &self.players,
            cards,
        };
        bincode::serialize(&snapshot).map_err(|e| SolverError::Snapshot(e.to_string()))
    }
}
