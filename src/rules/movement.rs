//! Card movement: moves between zones, draws, and card creation.

use std::sync::Arc;

use tracing::{debug, trace};

use super::solver::EffectSolver;
use crate::cards::CardId;
use crate::core::{InstanceId, LookupError, PlayerId, Result, ZoneId};
use crate::effects::TargetSelection;
use crate::triggers::{Trigger, TriggerKind};

impl EffectSolver {
    /// Move `card` from `origin` to the top of `destination`, both zones of
    /// `player`.
    ///
    /// Dispatches `CardLeftZone` (origin) then `CardEnteredZone`
    /// (destination) on the moved card. Afterwards, if the card's type
    /// names a post-trigger zone and the card is still in `destination`, it
    /// is relocated there directly, without further triggers.
    ///
    /// Every lookup is checked before anything moves.
    pub fn move_card(
        &mut self,
        player: PlayerId,
        card: InstanceId,
        origin: ZoneId,
        destination: ZoneId,
        selection: Option<&TargetSelection>,
    ) -> Result<()> {
        let card_type = self.state.card(card)?.card_type;
        if !self.state.zone(player, origin)?.contains(card) {
            return Err(LookupError::CardNotInZone { card, zone: origin }.into());
        }
        self.state.zone(player, destination)?;

        self.state.zone_mut(player, origin)?.remove(card);
        self.state.zone_mut(player, destination)?.push(card);
        debug!(%player, %card, from = %origin, to = %destination, "card moved");

        self.dispatch(
            player,
            card,
            TriggerKind::CardLeftZone,
            |trigger| matches!(trigger, Trigger::CardLeftZone { zone } if *zone == origin),
            selection,
        )?;
        self.dispatch(
            player,
            card,
            TriggerKind::CardEnteredZone,
            |trigger| matches!(trigger, Trigger::CardEnteredZone { zone } if *zone == destination),
            selection,
        )?;

        let config = Arc::clone(self.state.config());
        let Some(after) = config.card_type(card_type).and_then(|t| t.zone_after_trigger) else {
            return Ok(());
        };
        if after == destination || !self.state.zone(player, destination)?.contains(card) {
            return Ok(());
        }
        self.state.zone(player, after)?;
        self.state.zone_mut(player, destination)?.remove(card);
        self.state.zone_mut(player, after)?.push(card);
        debug!(%card, to = %after, "card relocated after triggers");
        Ok(())
    }

    /// Move up to `count` cards from the top of `player`'s deck to their
    /// hand, without dispatching zone triggers.
    ///
    /// Stops early when the deck runs out. Returns the drawn cards in draw
    /// order.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> Result<Vec<InstanceId>> {
        let config = Arc::clone(self.state.config());
        let (deck, hand) = (config.rules.deck_zone, config.rules.hand_zone);
        self.state.zone(player, deck)?;
        self.state.zone(player, hand)?;

        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(card) = self.state.zone_mut(player, deck)?.pop_top() else {
                trace!(%player, "deck empty");
                break;
            };
            self.state.zone_mut(player, hand)?.push(card);
            drawn.push(card);
        }
        debug!(%player, drawn = drawn.len(), "cards drawn");
        Ok(drawn)
    }

    /// Instantiate a card from the catalog on top of one of `owner`'s zones,
    /// without dispatching zone triggers.
    pub fn create_card(
        &mut self,
        owner: PlayerId,
        card: CardId,
        zone: ZoneId,
    ) -> Result<InstanceId> {
        let id = self.state.create_card(owner, card, zone)?;
        debug!(%owner, %card, instance = %id, %zone, "card created");
        Ok(id)
    }
}
