//! Armored fighters.

use super::{Armor, Character, Combatant};
use crate::error::{RulesError, RulesResult};

/// A character whose armor absorbs a percentage of incoming damage.
#[derive(Debug, Clone)]
pub struct Fighter {
    character: Character,
    armor: Armor,
}

impl Fighter {
    /// Create a fighter at full health. `armor` is clamped into `0..=100`.
    pub fn new(
        name: impl Into<String>,
        max_health: i32,
        level: i32,
        armor: i32,
    ) -> RulesResult<Self> {
        Ok(Self {
            character: Character::new(name, max_health, level)?,
            armor: Armor::clamped(armor),
        })
    }

    /// Current armor rating.
    pub fn armor(&self) -> Armor {
        self.armor
    }

    /// Replace the armor rating. Values outside `0..=100` are rejected.
    pub fn set_armor(&mut self, armor: i32) -> RulesResult<()> {
        self.armor = Armor::try_new(armor)?;
        Ok(())
    }

    /// Announce a power attack. Changes nothing.
    pub fn power_attack(&self) -> String {
        format!("{} performs a powerful attack!", self.character.name())
    }
}

impl Combatant for Fighter {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn take_damage(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("damage", amount)?;
        let effective = self.armor.reduce(amount);
        self.character.health_mut().decrease(effective)
    }

    fn describe(&self) -> String {
        format!("{} | Armor: {}", self.character.summary(), self.armor)
    }
}

impl PartialEq for Fighter {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character
    }
}

impl Eq for Fighter {}

impl std::fmt::Display for Fighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
