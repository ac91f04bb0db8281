//! Coin purse with five denominations.
//!
//! Valuation is done in whole copper pieces so totals stay exact. One gold
//! piece is 100 copper; the display total is that figure with two decimals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A coin denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Coin {
    Copper,
    Silver,
    Electrum,
    Gold,
    Platinum,
}

impl Coin {
    /// Smallest to largest.
    pub fn all() -> [Coin; 5] {
        [
            Self::Copper,
            Self::Silver,
            Self::Electrum,
            Self::Gold,
            Self::Platinum,
        ]
    }

    /// Worth of one coin in copper pieces.
    pub fn copper_value(&self) -> u64 {
        match self {
            Self::Copper => 1,
            Self::Silver => 10,
            Self::Electrum => 50,
            Self::Gold => 100,
            Self::Platinum => 1000,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Copper => "cp",
            Self::Silver => "sp",
            Self::Electrum => "ep",
            Self::Gold => "gp",
            Self::Platinum => "pp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Copper => "Copper",
            Self::Silver => "Silver",
            Self::Electrum => "Electrum",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Coin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cp" | "copper" => Ok(Self::Copper),
            "sp" | "silver" => Ok(Self::Silver),
            "ep" | "electrum" => Ok(Self::Electrum),
            "gp" | "gold" => Ok(Self::Gold),
            "pp" | "platinum" => Ok(Self::Platinum),
            _ => Err(DomainError::parse(format!("Unknown coin: {}", s))),
        }
    }
}

/// Exchange reference shown beside the purse.
pub const CONVERSION_REFERENCE: [&str; 4] = [
    "1 pp = 10 gp",
    "1 gp = 10 sp",
    "1 ep = 5 sp",
    "1 sp = 10 cp",
];

/// Outcome of collapsing the purse into gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldConversion {
    /// Gold held after the conversion
    pub gold: u32,
    /// Value that did not fit into `gold`, in copper: change below one
    /// gold piece plus anything above the saturated gold count
    pub discarded_copper: u64,
}

/// Five independent coin counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wealth {
    copper: u32,
    silver: u32,
    electrum: u32,
    gold: u32,
    platinum: u32,
}

impl Wealth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of one denomination.
    pub fn get(&self, coin: Coin) -> u32 {
        match coin {
            Coin::Copper => self.copper,
            Coin::Silver => self.silver,
            Coin::Electrum => self.electrum,
            Coin::Gold => self.gold,
            Coin::Platinum => self.platinum,
        }
    }

    /// Replace one counter, returning the previous count.
    pub fn set(&mut self, coin: Coin, count: u32) -> u32 {
        let slot = match coin {
            Coin::Copper => &mut self.copper,
            Coin::Silver => &mut self.silver,
            Coin::Electrum => &mut self.electrum,
            Coin::Gold => &mut self.gold,
            Coin::Platinum => &mut self.platinum,
        };
        std::mem::replace(slot, count)
    }

    pub fn with(mut self, coin: Coin, count: u32) -> Self {
        self.set(coin, count);
        self
    }

    /// Total value in copper pieces.
    pub fn total_copper(&self) -> u64 {
        Coin::all()
            .into_iter()
            .map(|coin| u64::from(self.get(coin)) * coin.copper_value())
            .sum()
    }

    /// Total value in gold with two decimals, e.g. `"12.35"`.
    pub fn total_gold_display(&self) -> String {
        let copper = self.total_copper();
        format!("{}.{:02}", copper / 100, copper % 100)
    }

    /// Collapse every denomination into whole gold pieces.
    ///
    /// Change worth less than one gold piece is lost. The gold count
    /// saturates at `u32::MAX` and the excess is lost too.
    pub fn convert_all_to_gold(&mut self) -> GoldConversion {
        let copper = self.total_copper();
        let gold = u32::try_from(copper / 100).unwrap_or(u32::MAX);
        *self = Self::default().with(Coin::Gold, gold);
        GoldConversion {
            gold,
            discarded_copper: copper - u64::from(gold) * Coin::Gold.copper_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn purse(cp: u32, sp: u32, ep: u32, gp: u32, pp: u32) -> Wealth {
        Wealth::new()
            .with(Coin::Copper, cp)
            .with(Coin::Silver, sp)
            .with(Coin::Electrum, ep)
            .with(Coin::Gold, gp)
            .with(Coin::Platinum, pp)
    }

    mod valuation {
        use super::*;

        #[test]
        fn empty_purse_is_worth_nothing() {
            assert_eq!(Wealth::new().total_copper(), 0);
            assert_eq!(Wealth::new().total_gold_display(), "0.00");
        }

        #[test]
        fn each_rate() {
            assert_eq!(purse(1, 0, 0, 0, 0).total_gold_display(), "0.01");
            assert_eq!(purse(0, 1, 0, 0, 0).total_gold_display(), "0.10");
            assert_eq!(purse(0, 0, 1, 0, 0).total_gold_display(), "0.50");
            assert_eq!(purse(0, 0, 0, 1, 0).total_gold_display(), "1.00");
            assert_eq!(purse(0, 0, 0, 0, 1).total_gold_display(), "10.00");
        }

        #[test]
        fn mixed_purse_display() {
            let wealth = purse(5, 3, 1, 2, 1);
            // 5 + 30 + 50 + 200 + 1000 copper
            assert_eq!(wealth.total_copper(), 1285);
            assert_eq!(wealth.total_gold_display(), "12.85");
        }

        #[test]
        fn total_is_linear_in_each_counter() {
            let base = purse(7, 4, 2, 9, 3);
            for coin in Coin::all() {
                let bumped = base.with(coin, base.get(coin) + 5);
                assert_eq!(
                    bumped.total_copper(),
                    base.total_copper() + 5 * coin.copper_value()
                );
            }
        }

        #[test]
        fn maximum_counters_do_not_overflow() {
            let wealth = purse(u32::MAX, u32::MAX, u32::MAX, u32::MAX, u32::MAX);
            assert_eq!(wealth.total_copper(), u64::from(u32::MAX) * 1161);
        }
    }

    mod conversion {
        use super::*;

        #[test]
        fn collapses_into_gold_and_reports_remainder() {
            let mut wealth = purse(5, 3, 1, 2, 1);
            let result = wealth.convert_all_to_gold();
            assert_eq!(
                result,
                GoldConversion {
                    gold: 12,
                    discarded_copper: 85
                }
            );
            assert_eq!(wealth, purse(0, 0, 0, 12, 0));
        }

        #[test]
        fn sub_gold_change_is_lost() {
            let mut wealth = purse(99, 0, 0, 0, 0);
            let result = wealth.convert_all_to_gold();
            assert_eq!(result.gold, 0);
            assert_eq!(result.discarded_copper, 99);
            assert_eq!(wealth.total_copper(), 0);
        }

        #[test]
        fn is_idempotent() {
            let mut wealth = purse(150, 25, 3, 8, 2);
            wealth.convert_all_to_gold();
            let once = wealth;
            let second = wealth.convert_all_to_gold();
            assert_eq!(wealth, once);
            assert_eq!(second.discarded_copper, 0);
        }

        #[test]
        fn saturates_gold() {
            let mut wealth = purse(0, 0, 0, 0, u32::MAX);
            let result = wealth.convert_all_to_gold();
            assert_eq!(result.gold, u32::MAX);
        }

        #[test]
        fn saturated_conversion_reports_the_whole_loss() {
            let mut wealth = purse(42, 0, 0, 0, u32::MAX);
            let before = wealth.total_copper();
            let result = wealth.convert_all_to_gold();
            // worth 10 * MAX gold plus 42 cp; only MAX gold fits
            assert_eq!(result.discarded_copper, u64::from(u32::MAX) * 900 + 42);
            assert_eq!(wealth.total_copper() + result.discarded_copper, before);
        }
    }

    #[test]
    fn coin_from_str() {
        assert_eq!("gp".parse::<Coin>().unwrap(), Coin::Gold);
        assert_eq!("Electrum".parse::<Coin>().unwrap(), Coin::Electrum);
        assert!("doubloon".parse::<Coin>().is_err());
    }

    #[test]
    fn reference_lines() {
        assert_eq!(CONVERSION_REFERENCE[0], "1 pp = 10 gp");
        assert_eq!(CONVERSION_REFERENCE.len(), 4);
    }
}
