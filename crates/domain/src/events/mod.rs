//! Aggregate mutation outcomes
//!
//! Mutations on `CharacterSheet` return these enums instead of `()`, so the
//! presentation boundary can tell a change from a refused or empty edit.

pub mod character_events;

pub use character_events::*;
