//! Display snapshot of a character sheet
//!
//! Everything a layout renders, already formatted. Both form adapters
//! render from this so the modifier and total-gold text is computed once.

use serde::Serialize;

use sheetz_domain::value_objects::CONVERSION_REFERENCE;
use sheetz_domain::{format_modifier, Ability, CharacterSheet, Coin, ItemId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityView {
    pub ability: Ability,
    pub label: &'static str,
    pub score: i32,
    pub modifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinView {
    pub coin: Coin,
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub name: String,
    pub class_name: Option<String>,
    pub race: String,
    pub level: u8,
    pub locked: bool,
    pub abilities: Vec<AbilityView>,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub armor_class: i32,
    pub proficiency_bonus: i32,
    pub items: Vec<ItemView>,
    pub coins: Vec<CoinView>,
    pub total_gold: String,
    pub conversion_reference: Vec<&'static str>,
    pub portrait: Option<String>,
}

impl SheetView {
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            name: sheet.name().to_string(),
            class_name: sheet.class().map(|c| c.to_string()),
            race: sheet.race().to_string(),
            level: sheet.level().value(),
            locked: sheet.is_locked(),
            abilities: Ability::all()
                .into_iter()
                .map(|ability| AbilityView {
                    ability,
                    label: ability.abbreviation(),
                    score: sheet.abilities().get(ability),
                    modifier: format_modifier(sheet.modifier(ability)),
                })
                .collect(),
            hit_points: sheet.hit_points().current(),
            max_hit_points: sheet.hit_points().max(),
            armor_class: sheet.armor_class(),
            proficiency_bonus: sheet.proficiency_bonus(),
            items: sheet
                .items()
                .iter()
                .map(|item| ItemView {
                    id: item.id(),
                    name: item.name().to_string(),
                    quantity: item.quantity().value(),
                })
                .collect(),
            // Largest denomination first, as the purse is laid out
            coins: Coin::all()
                .into_iter()
                .rev()
                .map(|coin| CoinView {
                    coin,
                    label: coin.display_name(),
                    count: sheet.wealth().get(coin),
                })
                .collect(),
            total_gold: sheet.wealth().total_gold_display(),
            conversion_reference: CONVERSION_REFERENCE.to_vec(),
            portrait: sheet.portrait().map(|p| p.as_str().to_string()),
        }
    }
}

impl From<&CharacterSheet> for SheetView {
    fn from(sheet: &CharacterSheet) -> Self {
        Self::from_sheet(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetz_domain::SheetDefaults;

    #[test]
    fn fresh_sheet_view() {
        let view = SheetView::from(&CharacterSheet::new(SheetDefaults::MOBILE));
        assert_eq!(view.level, 1);
        assert_eq!(view.class_name, None);
        assert_eq!(view.hit_points, 10);
        assert!(view.abilities.iter().all(|a| a.modifier == "+0"));
        assert_eq!(view.proficiency_bonus, 2);
        assert_eq!(view.total_gold, "0.00");
        assert_eq!(view.coins[0].coin, Coin::Platinum);
        assert_eq!(view.conversion_reference.len(), 4);
    }

    #[test]
    fn modifiers_are_signed() {
        let mut sheet = CharacterSheet::default();
        sheet.set_ability(Ability::Dexterity, 9);
        sheet.set_ability(Ability::Charisma, 17);
        let view = SheetView::from(&sheet);
        assert_eq!(view.abilities[1].modifier, "-1");
        assert_eq!(view.abilities[5].modifier, "+3");
    }
}
