//! Reference game configurations.
//!
//! - `standard`: Deck, Hand, Board, Graveyard; Life and Mana; Creatures and Spells

pub mod standard;
