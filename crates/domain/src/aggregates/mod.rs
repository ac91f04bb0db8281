//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns outcome enums from mutations

pub mod character_sheet;

pub use character_sheet::{
    CharacterSheet, SheetDefaults, DEFAULT_ARMOR_CLASS, DEFAULT_PROFICIENCY_BONUS,
};
