//! A conventional two-player card game catalog.
//!
//! - Each player has a hidden Deck and Hand, a Board where creatures fight,
//!   and a Graveyard
//! - Players have Life (default 20, clamped to 0..=99) and Mana
//! - Creatures carry Life and Attack and are destroyed at 0 life or less
//! - Spells go to the graveyard once their enter-board triggers resolve
//!
//! Games add their own cards on top of the two built-in ones through
//! `StandardGameBuilder::with_card`.

mod catalog;

pub use catalog::{
    config, creature_type, spell_type, StandardGameBuilder, BOARD, CREATURE, CREATURE_CARD, DECK,
    GRAVEYARD, HAND, SPELL, SPELL_CARD,
};
