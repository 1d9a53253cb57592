//! Mana-powered casters.

use super::{Character, Combatant, ResourcePool};
use crate::error::{RulesError, RulesResult};

/// A character that spends mana to cast spells.
#[derive(Debug, Clone)]
pub struct Caster {
    character: Character,
    mana: ResourcePool,
}

impl Caster {
    /// Create a caster with full health and a full mana pool.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        level: i32,
        max_mana: i32,
    ) -> RulesResult<Self> {
        Ok(Self {
            character: Character::new(name, max_health, level)?,
            mana: ResourcePool::new(max_mana),
        })
    }

    /// The mana pool.
    pub fn mana(&self) -> &ResourcePool {
        &self.mana
    }

    /// Spend `cost` mana if the pool can cover it.
    ///
    /// Returns `false` without touching the pool when `cost` is not positive or
    /// exceeds the remaining mana.
    pub fn cast_spell(&mut self, cost: i32) -> bool {
        if cost <= 0 || self.mana.current() < cost {
            return false;
        }
        self.mana.decrease(cost).is_ok()
    }

    /// Refill mana by `amount`, capping at the maximum.
    pub fn restore_mana(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("mana", amount)?;
        self.mana.increase(amount)
    }
}

impl Combatant for Caster {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn describe(&self) -> String {
        format!("{} | Mana: {}", self.character.summary(), self.mana)
    }
}

impl PartialEq for Caster {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character
    }
}

impl Eq for Caster {}

impl std::fmt::Display for Caster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
