//! Component definitions shared by every archetype.

use crate::error::{RulesError, RulesResult};
use crate::mechanics::MAX_ARMOR;

/// A bounded counter used for health, mana, and arrows.
///
/// `0 <= current <= maximum` and `maximum >= 1` hold after every operation,
/// including construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePool {
    current: i32,
    maximum: i32,
}

impl ResourcePool {
    /// Create a full pool. A `maximum` below 1 is raised to 1.
    pub fn new(maximum: i32) -> Self {
        let maximum = maximum.max(1);
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Create a pool with an explicit starting value, clamped into range.
    pub fn with_current(current: i32, maximum: i32) -> Self {
        let maximum = maximum.max(1);
        Self {
            current: current.clamp(0, maximum),
            maximum,
        }
    }

    /// Amount currently in the pool.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Upper bound of the pool.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Lower the pool by `amount`, flooring at zero.
    pub fn decrease(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("decrease", amount)?;
        self.current = (self.current - amount).max(0);
        Ok(())
    }

    /// Raise the pool by `amount`, capping at the maximum.
    pub fn increase(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("increase", amount)?;
        self.current = self.current.saturating_add(amount).min(self.maximum);
        Ok(())
    }

    /// Raise the pool by `amount`, lifting the maximum along with it if needed.
    pub fn grow(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("grow", amount)?;
        self.current = self.current.saturating_add(amount);
        self.maximum = self.maximum.max(self.current);
        Ok(())
    }

    /// Check if the pool is empty.
    pub fn is_exhausted(&self) -> bool {
        self.current == 0
    }

    /// Check if the pool is at its maximum.
    pub fn is_full(&self) -> bool {
        self.current == self.maximum
    }
}

impl std::fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

/// Percentage damage reduction, always within `0..=MAX_ARMOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Armor(i32);

impl Armor {
    /// Clamp `value` into the valid range.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(0, MAX_ARMOR))
    }

    /// Validate `value` without clamping.
    pub fn try_new(value: i32) -> RulesResult<Self> {
        if (0..=MAX_ARMOR).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RulesError::ArmorOutOfRange {
                value,
                max: MAX_ARMOR,
            })
        }
    }

    /// Armor as a percentage.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Damage left over after this armor absorbs its share of `amount`.
    ///
    /// The absorbed part is truncated toward zero, so odd amounts round in the
    /// attacker's favour: 25 damage against 50 armor leaves 13.
    pub fn reduce(&self, amount: i32) -> i32 {
        let absorbed = (i64::from(amount) * i64::from(self.0)) / 100;
        (i64::from(amount) - absorbed).max(0) as i32
    }
}

impl std::fmt::Display for Armor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
