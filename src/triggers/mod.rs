//! Trigger system for event-driven abilities.
//!
//! Abilities are data: a trigger (or explicit activation), one effect and
//! one target. The solver decides when a trigger is set off; this module
//! only describes what the catalog can express.
//!
//! ## Key Components
//!
//! - [`Trigger`]: The event a triggered ability listens for
//! - [`TriggerKind`]: Fieldless discriminant used for dispatch
//! - [`Ability`]: Triggered or activated ability
//! - [`Condition`]: Stat comparison used by targets and destroy rules
//!
//! ## Example Usage
//!
//! ```
//! use ccg_solver::core::ZoneId;
//! use ccg_solver::effects::{Effect, PlayerEffect, PlayerTarget, Target, Value};
//! use ccg_solver::triggers::{Ability, Trigger, TriggerKind, TriggeredAbility};
//!
//! // "When this card enters the board, its owner gains 2 life"
//! let ability = Ability::Triggered(TriggeredAbility::new(
//!     Trigger::CardEnteredZone { zone: ZoneId::new(2) },
//!     Effect::Player(PlayerEffect::increase("Life", Value::Constant(2))),
//!     Target::player(PlayerTarget::Self_),
//! ));
//!
//! assert_eq!(ability.trigger().map(Trigger::kind), Some(TriggerKind::CardEnteredZone));
//! ```

mod ability;
mod condition;
mod trigger;

pub use ability::{Ability, ActivatedAbility, TriggeredAbility};
pub use condition::{Comparison, Condition};
pub use trigger::{StatSubject, Trigger, TriggerKind};
