//! Abilities: an effect, a target, and how they are set off.
//!
//! Each ability carries exactly one effect and one target. Triggered
//! abilities fire when the solver dispatches a matching trigger on their
//! card; activated abilities fire when the driver activates them by index
//! among the card's activated abilities.

use serde::{Deserialize, Serialize};

use super::trigger::Trigger;
use crate::effects::{Effect, Target};

/// An ability that fires on a trigger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredAbility {
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Event the ability listens for.
    pub trigger: Trigger,

    /// What happens.
    pub effect: Effect,

    /// To whom.
    pub target: Target,
}

impl TriggeredAbility {
    pub fn new(trigger: Trigger, effect: Effect, target: Target) -> Self {
        Self {
            name: None,
            trigger,
            effect,
            target,
        }
    }

    /// Set a display name (builder pattern).
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// An ability the driver activates explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivatedAbility {
    pub effect: Effect,
    pub target: Target,
}

impl ActivatedAbility {
    pub fn new(effect: Effect, target: Target) -> Self {
        Self { effect, target }
    }
}

/// A card ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Triggered(TriggeredAbility),
    Activated(ActivatedAbility),
}

impl Ability {
    #[must_use]
    pub fn effect(&self) -> &Effect {
        match self {
            Ability::Triggered(a) => &a.effect,
            Ability::Activated(a) => &a.effect,
        }
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        match self {
            Ability::Triggered(a) => &a.target,
            Ability::Activated(a) => &a.target,
        }
    }

    /// The trigger, for triggered abilities.
    #[must_use]
    pub fn trigger(&self) -> Option<&Trigger> {
        match self {
            Ability::Triggered(a) => Some(&a.trigger),
            Ability::Activated(_) => None,
        }
    }
}

impl From<TriggeredAbility> for Ability {
    fn from(ability: TriggeredAbility) -> Self {
        Ability::Triggered(ability)
    }
}

impl From<ActivatedAbility> for Ability {
    fn from(ability: ActivatedAbility) -> Self {
        Ability::Activated(ability)
    }
}
