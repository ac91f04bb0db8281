//! Current and maximum hit points.
//!
//! Damage and healing keep `current` inside `0..=max`. Direct edits only
//! guarantee non-negative values: a current value above max typed into the
//! form is kept as typed until the next heal.

use serde::{Deserialize, Serialize};

/// Hit point pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HitPoints {
    current: u32,
    max: u32,
}

/// Result of applying damage to a hit point pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResult {
    pub previous: u32,
    pub current: u32,
}

/// Result of healing a hit point pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealResult {
    pub previous: u32,
    pub current: u32,
}

impl HitPoints {
    /// Full hit points at the given maximum.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn new(current: u32, max: u32) -> Self {
        Self { current, max }
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn set_current(&mut self, value: u32) -> u32 {
        std::mem::replace(&mut self.current, value)
    }

    pub fn set_max(&mut self, value: u32) -> u32 {
        std::mem::replace(&mut self.max, value)
    }

    /// `current := max(0, current - amount)`
    pub fn apply_damage(&mut self, amount: u32) -> DamageResult {
        let previous = self.current;
        self.current = previous.saturating_sub(amount);
        DamageResult {
            previous,
            current: self.current,
        }
    }

    /// `current := min(max, current + amount)`
    ///
    /// A current value already above max (possible after a direct edit) is
    /// pulled down to max.
    pub fn heal(&mut self, amount: u32) -> HealResult {
        let previous = self.current;
        self.current = previous.saturating_add(amount).min(self.max);
        HealResult {
            previous,
            current: self.current,
        }
    }
}
