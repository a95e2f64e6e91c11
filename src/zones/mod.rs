//! Zone system for card locations.
//!
//! Zones are **game-configured**, not hardcoded. Games define their zones
//! (deck, hand, board, graveyard, etc.) via `ZoneDefinition` at startup, and
//! every player receives one `Zone` per definition.
//!
//! ## Key Types
//!
//! - `ZoneId`: Opaque zone identifier (from `core::config`)
//! - `ZoneDefinition`: Zone properties (kind, opponent visibility)
//! - `Zone`: A player's ordered sequence of card instances

pub mod zone;

pub use zone::Zone;

// Re-export zone types from core for convenience
pub use crate::core::config::{ZoneDefinition, ZoneId, ZoneKind, ZoneVisibility};
