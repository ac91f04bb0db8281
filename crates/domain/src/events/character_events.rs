//! Character sheet mutation outcomes
//!
//! These enums communicate what happened when sheet state was modified,
//! allowing callers to react appropriately.

use crate::ids::ItemId;
use crate::value_objects::{
    Ability, CharacterClass, Coin, GoldConversion, Level, Portrait, Quantity,
};

/// Outcome of applying damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Hit points dropped but stayed above zero
    Wounded { damage_dealt: u32, remaining_hp: u32 },
    /// Hit points reached zero
    Downed { damage_dealt: u32 },
    /// Zero damage, or already at zero
    NoEffect,
}

/// Outcome of healing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealOutcome {
    /// Healing applied
    Healed { amount_healed: u32, new_hp: u32 },
    /// Current was above max and got pulled down to it
    Capped { new_hp: u32 },
    /// Already at max HP, or zero healing
    AlreadyFull,
}

/// Outcome of editing a locked-able identity field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityUpdate {
    NameChanged { from: String, to: String },
    ClassChanged {
        from: Option<CharacterClass>,
        to: Option<CharacterClass>,
    },
    RaceChanged { from: String, to: String },
    LevelChanged { from: Level, to: Level },
    /// The identity lock is on; nothing changed
    Locked { field: &'static str },
}

impl IdentityUpdate {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }
}

/// Outcome of editing a combat or ability field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatUpdate {
    AbilityChanged { ability: Ability, from: i32, to: i32 },
    HitPointsChanged { from: u32, to: u32 },
    MaxHitPointsChanged { from: u32, to: u32 },
    ArmorClassChanged { from: i32, to: i32 },
    ProficiencyBonusChanged { from: i32, to: i32 },
}

/// Outcome of an inventory operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryUpdate {
    Added { id: ItemId },
    Renamed { id: ItemId, from: String, to: String },
    QuantityChanged { id: ItemId, from: Quantity, to: Quantity },
    Removed { id: ItemId, name: String },
    /// Add was refused: name empty after trimming
    EmptyName,
    /// No item carries this id; nothing changed
    UnknownItem { id: ItemId },
}

impl InventoryUpdate {
    /// Whether the inventory actually changed.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::EmptyName | Self::UnknownItem { .. })
    }
}

/// Outcome of a purse operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WealthUpdate {
    CoinsChanged { coin: Coin, from: u32, to: u32 },
    ConvertedToGold(GoldConversion),
}

/// Outcome of replacing or clearing the portrait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortraitChange {
    pub from: Option<Portrait>,
    pub to: Option<Portrait>,
}
