//! Card system: definitions, instances, stats, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardTypeId`: Opaque type identifier (games define types)
//! - `CardTypeDefinition`: Stat layout, destroy conditions and relocation of a type
//! - `CardDefinition`: Static card data: type, stat overrides, abilities
//! - `RuntimeCard`: Runtime card state (owner, stats)
//! - `Stat` / `StatBlock`: Named values with bounds and timed modifiers
//! - `CardRegistry`: Card definition lookup

pub mod definition;
pub mod instance;
pub mod registry;
pub mod stats;

pub use definition::{CardDefinition, CardId, CardTypeDefinition, CardTypeId};
pub use instance::RuntimeCard;
pub use registry::CardRegistry;
pub use stats::{Modifier, Stat, StatBlock, StatChange, StatDefinition};
