//! Character sheet aggregate - the single live character of a session
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all state is reached through accessors and named mutators
//! - **Newtypes**: `Level`, `Quantity` and `HitPoints` keep their ranges by construction
//! - **Outcome enums**: every mutation reports what happened (`DamageOutcome`,
//!   `IdentityUpdate`, ...)
//! - **Lock flag**: gates name, class, race and level only
//!
//! The sheet does no parsing. Raw form text is coerced at the presentation
//! boundary and arrives here as typed values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entities::{Inventory, InventoryItem};
use crate::error::DomainError;
use crate::events::{
    DamageOutcome, HealOutcome, IdentityUpdate, InventoryUpdate, PortraitChange, StatUpdate,
    WealthUpdate,
};
use crate::ids::ItemId;
use crate::value_objects::{
    Ability, AbilityScores, CharacterClass, Coin, HitPoints, Level, Portrait, Quantity, Wealth,
};

/// Armor class of a fresh sheet
pub const DEFAULT_ARMOR_CLASS: i32 = 10;

/// Proficiency bonus of a fresh sheet
pub const DEFAULT_PROFICIENCY_BONUS: i32 = 2;

/// Per-layout starting values.
///
/// The browser and mobile layouts only disagree on starting hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetDefaults {
    pub starting_hit_points: u32,
}

impl SheetDefaults {
    pub const BROWSER: SheetDefaults = SheetDefaults {
        starting_hit_points: 8,
    };
    pub const MOBILE: SheetDefaults = SheetDefaults {
        starting_hit_points: 10,
    };
}

impl Default for SheetDefaults {
    fn default() -> Self {
        Self::BROWSER
    }
}

/// A player character sheet.
///
/// # Example
///
/// ```
/// use sheetz_domain::aggregates::{CharacterSheet, SheetDefaults};
/// use sheetz_domain::value_objects::Ability;
///
/// let mut sheet = CharacterSheet::new(SheetDefaults::BROWSER);
/// sheet.set_ability(Ability::Strength, 16);
/// sheet.apply_damage(3);
///
/// assert_eq!(sheet.modifier(Ability::Strength), 3);
/// assert_eq!(sheet.hit_points().current(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    defaults: SheetDefaults,

    // Identity (lockable)
    name: String,
    class: Option<CharacterClass>,
    race: String,
    level: Level,
    locked: bool,

    abilities: AbilityScores,

    // Combat
    hit_points: HitPoints,
    armor_class: i32,
    proficiency_bonus: i32,

    inventory: Inventory,
    wealth: Wealth,
    portrait: Option<Portrait>,
}

impl CharacterSheet {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// A fresh sheet with every field at its default.
    pub fn new(defaults: SheetDefaults) -> Self {
        Self {
            defaults,
            name: String::new(),
            class: None,
            race: String::new(),
            level: Level::default(),
            locked: false,
            abilities: AbilityScores::default(),
            hit_points: HitPoints::full(defaults.starting_hit_points),
            armor_class: DEFAULT_ARMOR_CLASS,
            proficiency_bonus: DEFAULT_PROFICIENCY_BONUS,
            inventory: Inventory::new(),
            wealth: Wealth::new(),
            portrait: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn defaults(&self) -> SheetDefaults {
        self.defaults
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> Option<CharacterClass> {
        self.class
    }

    #[inline]
    pub fn race(&self) -> &str {
        &self.race
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    /// Derived modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    #[inline]
    pub fn hit_points(&self) -> HitPoints {
        self.hit_points
    }

    #[inline]
    pub fn armor_class(&self) -> i32 {
        self.armor_class
    }

    #[inline]
    pub fn proficiency_bonus(&self) -> i32 {
        self.proficiency_bonus
    }

    #[inline]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[inline]
    pub fn items(&self) -> &[InventoryItem] {
        self.inventory.items()
    }

    #[inline]
    pub fn wealth(&self) -> &Wealth {
        &self.wealth
    }

    #[inline]
    pub fn portrait(&self) -> Option<&Portrait> {
        self.portrait.as_ref()
    }

    // =========================================================================
    // Identity (gated by the lock)
    // =========================================================================

    /// Fails with `DomainError::Locked` while the identity lock is on.
    pub fn ensure_unlocked(&self, field: &'static str) -> Result<(), DomainError> {
        if self.locked {
            Err(DomainError::locked(field))
        } else {
            Ok(())
        }
    }

    /// Flip the lock. Returns the new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        self.locked
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> IdentityUpdate {
        if self.locked {
            return IdentityUpdate::Locked { field: "name" };
        }
        let from = std::mem::replace(&mut self.name, name.into());
        IdentityUpdate::NameChanged {
            from,
            to: self.name.clone(),
        }
    }

    pub fn set_class(&mut self, class: Option<CharacterClass>) -> IdentityUpdate {
        if self.locked {
            return IdentityUpdate::Locked { field: "class" };
        }
        let from = std::mem::replace(&mut self.class, class);
        IdentityUpdate::ClassChanged { from, to: class }
    }

    pub fn set_race(&mut self, race: impl Into<String>) -> IdentityUpdate {
        if self.locked {
            return IdentityUpdate::Locked { field: "race" };
        }
        let from = std::mem::replace(&mut self.race, race.into());
        IdentityUpdate::RaceChanged {
            from,
            to: self.race.clone(),
        }
    }

    pub fn set_level(&mut self, level: Level) -> IdentityUpdate {
        if self.locked {
            return IdentityUpdate::Locked { field: "level" };
        }
        let from = std::mem::replace(&mut self.level, level);
        IdentityUpdate::LevelChanged { from, to: level }
    }

    // =========================================================================
    // Abilities and combat stats
    // =========================================================================

    /// Scores are stored unclamped.
    pub fn set_ability(&mut self, ability: Ability, score: i32) -> StatUpdate {
        let from = self.abilities.set(ability, score);
        StatUpdate::AbilityChanged {
            ability,
            from,
            to: score,
        }
    }

    /// Direct edit. Not clamped to max hit points.
    pub fn set_hit_points(&mut self, value: u32) -> StatUpdate {
        let from = self.hit_points.set_current(value);
        StatUpdate::HitPointsChanged { from, to: value }
    }

    pub fn set_max_hit_points(&mut self, value: u32) -> StatUpdate {
        let from = self.hit_points.set_max(value);
        StatUpdate::MaxHitPointsChanged { from, to: value }
    }

    pub fn set_armor_class(&mut self, value: i32) -> StatUpdate {
        let from = std::mem::replace(&mut self.armor_class, value);
        StatUpdate::ArmorClassChanged { from, to: value }
    }

    pub fn set_proficiency_bonus(&mut self, value: i32) -> StatUpdate {
        let from = std::mem::replace(&mut self.proficiency_bonus, value);
        StatUpdate::ProficiencyBonusChanged { from, to: value }
    }

    /// Apply damage, flooring hit points at zero.
    ///
    /// Returns a `DamageOutcome` indicating what happened:
    /// - `Wounded` if hit points dropped but stayed positive
    /// - `Downed` if hit points reached zero
    /// - `NoEffect` for zero damage or a sheet already at zero
    pub fn apply_damage(&mut self, amount: u32) -> DamageOutcome {
        let result = self.hit_points.apply_damage(amount);
        let damage_dealt = result.previous - result.current;
        if damage_dealt == 0 {
            DamageOutcome::NoEffect
        } else if result.current == 0 {
            DamageOutcome::Downed { damage_dealt }
        } else {
            DamageOutcome::Wounded {
                damage_dealt,
                remaining_hp: result.current,
            }
        }
    }

    /// Heal, capping hit points at max.
    pub fn heal(&mut self, amount: u32) -> HealOutcome {
        let result = self.hit_points.heal(amount);
        if result.current > result.previous {
            HealOutcome::Healed {
                amount_healed: result.current - result.previous,
                new_hp: result.current,
            }
        } else if result.current < result.previous {
            HealOutcome::Capped {
                new_hp: result.current,
            }
        } else {
            HealOutcome::AlreadyFull
        }
    }

    // =========================================================================
    // Inventory
    // =========================================================================

    pub fn add_item(&mut self, name: impl Into<String>) -> InventoryUpdate {
        self.inventory.add(name)
    }

    pub fn rename_item(&mut self, id: ItemId, name: impl Into<String>) -> InventoryUpdate {
        self.inventory.rename(id, name)
    }

    pub fn set_item_quantity(&mut self, id: ItemId, quantity: Quantity) -> InventoryUpdate {
        self.inventory.set_quantity(id, quantity)
    }

    pub fn remove_item(&mut self, id: ItemId) -> InventoryUpdate {
        self.inventory.remove(id)
    }

    // =========================================================================
    // Wealth
    // =========================================================================

    pub fn set_coins(&mut self, coin: Coin, count: u32) -> WealthUpdate {
        let from = self.wealth.set(coin, count);
        WealthUpdate::CoinsChanged {
            coin,
            from,
            to: count,
        }
    }

    /// Collapse the purse into whole gold. Sub-gold change is discarded.
    pub fn convert_all_to_gold(&mut self) -> WealthUpdate {
        WealthUpdate::ConvertedToGold(self.wealth.convert_all_to_gold())
    }

    // =========================================================================
    // Portrait
    // =========================================================================

    /// Replace or clear the portrait. Not gated by the lock.
    pub fn set_portrait(&mut self, portrait: Option<Portrait>) -> PortraitChange {
        let from = std::mem::replace(&mut self.portrait, portrait);
        PortraitChange {
            from,
            to: self.portrait.clone(),
        }
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Restore every field to its default, the lock included.
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults);
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new(SheetDefaults::default())
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterSheetWireFormat {
    #[serde(default)]
    defaults: SheetDefaults,
    #[serde(default)]
    name: String,
    #[serde(default)]
    class_name: Option<CharacterClass>,
    #[serde(default)]
    race: String,
    #[serde(default)]
    level: Level,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    abilities: AbilityScores,
    hit_points: HitPoints,
    armor_class: i32,
    proficiency_bonus: i32,
    #[serde(default)]
    inventory: Inventory,
    #[serde(default)]
    wealth: Wealth,
    #[serde(default)]
    portrait: Option<Portrait>,
}

impl Serialize for CharacterSheet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CharacterSheetWireFormat {
            defaults: self.defaults,
            name: self.name.clone(),
            class_name: self.class,
            race: self.race.clone(),
            level: self.level,
            locked: self.locked,
            abilities: self.abilities,
            hit_points: self.hit_points,
            armor_class: self.armor_class,
            proficiency_bonus: self.proficiency_bonus,
            inventory: self.inventory.clone(),
            wealth: self.wealth,
            portrait: self.portrait.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CharacterSheet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CharacterSheetWireFormat::deserialize(deserializer)?;

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = wire.inventory.items().iter().find(|i| !seen.insert(i.id())) {
            return Err(serde::de::Error::custom(format!(
                "duplicate inventory item id {}",
                dup.id()
            )));
        }

        Ok(Self {
            defaults: wire.defaults,
            name: wire.name,
            class: wire.class_name,
            race: wire.race,
            level: wire.level,
            locked: wire.locked,
            abilities: wire.abilities,
            hit_points: wire.hit_points,
            armor_class: wire.armor_class,
            proficiency_bonus: wire.proficiency_bonus,
            inventory: wire.inventory,
            wealth: wire.wealth,
            portrait: wire.portrait,
        })
    }
}
