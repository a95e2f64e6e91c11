//! The effect-resolution engine.
//!
//! `EffectSolver` owns a `GameState` and exposes the operations an external
//! driver calls:
//! - Turn boundaries: `on_turn_started`, `on_turn_ended`
//! - Movement: `move_card`, `draw_cards`, `create_card`
//! - Combat: `fight_player`, `fight_creature`
//! - Abilities: `dispatch`, `activate_ability`
//! - Wiring: `set_triggers_for_player`, `set_triggers_for_card`,
//!   `set_destroy_conditions_for_card`
//!
//! The engine never decides when these happen; turn and phase sequencing
//! belong to the driver.

mod combat;
mod movement;
pub mod solver;
pub mod watchers;

pub use solver::{EffectSolver, SolverConfig};
pub use watchers::{StatWatchers, Watcher};
