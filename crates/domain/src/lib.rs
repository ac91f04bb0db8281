//! Sheetz domain model
//!
//! The character sheet, its value objects and the arithmetic behind them
//! (ability modifiers, damage and healing, coin valuation). Pure and
//! in-memory: no I/O, no logging, no platform code.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod reference;
pub mod value_objects;

pub use aggregates::{CharacterSheet, SheetDefaults};
pub use entities::{Inventory, InventoryItem};
pub use error::DomainError;
pub use events::{
    DamageOutcome, HealOutcome, IdentityUpdate, InventoryUpdate, PortraitChange, StatUpdate,
    WealthUpdate,
};
pub use ids::{ItemId, SubscriptionId};
pub use reference::ReferenceLink;
pub use value_objects::{
    ability_modifier, format_modifier, Ability, AbilityScores, CharacterClass, Coin,
    GoldConversion, HitPoints, Level, Portrait, PortraitPick, Quantity, Wealth,
};
