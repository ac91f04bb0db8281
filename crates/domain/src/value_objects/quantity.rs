//! Quantity value object for inventory items

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many of an item the character carries. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Values below 1 fall back to 1.
    pub fn new(value: i64) -> Self {
        if value < 1 {
            Self::ONE
        } else {
            Self(value.min(i64::from(u32::MAX)) as u32)
        }
    }

    /// Parsed form input; unparsable text falls back to 1.
    pub fn from_parsed(value: Option<i64>) -> Self {
        value.map_or(Self::ONE, Self::new)
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> u32 {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_one_falls_back_to_one() {
        assert_eq!(Quantity::new(0), Quantity::ONE);
        assert_eq!(Quantity::new(-3), Quantity::ONE);
    }

    #[test]
    fn keeps_positive_values() {
        assert_eq!(Quantity::new(7).value(), 7);
    }

    #[test]
    fn unparsable_falls_back_to_one() {
        assert_eq!(Quantity::from_parsed(None), Quantity::ONE);
        assert_eq!(Quantity::from_parsed(Some(4)).value(), 4);
    }

    #[test]
    fn deserialization_applies_the_fallback() {
        let quantity: Quantity = serde_json::from_str("0").unwrap();
        assert_eq!(quantity, Quantity::ONE);
    }
}
