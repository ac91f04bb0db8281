//! Value objects - Immutable objects defined by their attributes

mod ability;
mod character_class;
mod hit_points;
mod level;
mod portrait;
mod quantity;
mod wealth;

pub use ability::{
    ability_modifier, format_modifier, Ability, AbilityScores, DEFAULT_ABILITY_SCORE,
};
pub use character_class::CharacterClass;
pub use hit_points::{DamageResult, HealResult, HitPoints};
pub use level::Level;
pub use portrait::{Portrait, PortraitPick};
pub use quantity::Quantity;
pub use wealth::{Coin, GoldConversion, Wealth, CONVERSION_REFERENCE};
