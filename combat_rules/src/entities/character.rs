//! The base character every archetype is built on.

use super::{Combatant, ResourcePool};
use crate::error::{RulesError, RulesResult};

/// Identity, level, and health shared by every archetype.
///
/// Characters compare equal when their names match. Level and health do not
/// take part in equality.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    level: u32,
    health: ResourcePool,
}

impl Character {
    /// Create a character at full health.
    ///
    /// `max_health` and `level` are raised to 1 if lower. Blank names are
    /// rejected.
    pub fn new(name: impl Into<String>, max_health: i32, level: i32) -> RulesResult<Self> {
        let max_health = max_health.max(1);
        Self::with_health(name, max_health, max_health, level)
    }

    /// Create a character with an explicit starting health, clamped into
    /// `0..=max_health`.
    pub fn with_health(
        name: impl Into<String>,
        health: i32,
        max_health: i32,
        level: i32,
    ) -> RulesResult<Self> {
        Ok(Self {
            name: RulesError::check_name(name.into())?,
            level: level.max(1) as u32,
            health: ResourcePool::with_current(health, max_health),
        })
    }

    /// The character's name, also its identity for equality.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current level, never below 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The health pool.
    pub fn health(&self) -> &ResourcePool {
        &self.health
    }

    pub(crate) fn health_mut(&mut self) -> &mut ResourcePool {
        &mut self.health
    }

    /// The one-line summary every archetype's description starts with.
    pub fn summary(&self) -> String {
        format!(
            "{} (Level {}) | HP: {}/{}",
            self.name,
            self.level,
            self.health.current(),
            self.health.maximum()
        )
    }
}

impl Combatant for Character {
    fn character(&self) -> &Character {
        self
    }

    fn character_mut(&mut self) -> &mut Character {
        self
    }
}

impl PartialEq for Character {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Character {}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_character() {
        let character = Character::new("Test Hero", 100, 1).unwrap();
        assert_eq!(character.name(), "Test Hero");
        assert_eq!(character.health().current(), 100);
        assert!(character.is_alive());
        assert_eq!(character.describe(), "Test Hero (Level 1) | HP: 100/100");
    }

    #[test]
    fn test_construction_clamps() {
        let character = Character::new("Frail", -20, 0).unwrap();
        assert_eq!(character.health().maximum(), 1);
        assert_eq!(character.health().current(), 1);
        assert_eq!(character.level(), 1);

        let character = Character::with_health("Overfed", 500, 100, 3).unwrap();
        assert_eq!(character.health().current(), 100);

        let character = Character::with_health("Fallen", -5, 100, 3).unwrap();
        assert_eq!(character.health().current(), 0);
        assert!(!character.is_alive());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            Character::new("  ", 100, 1).unwrap_err(),
            RulesError::EmptyName
        );
    }

    #[test]
    fn test_character_death_and_revival() {
        let mut character = Character::new("Doomed", 30, 1).unwrap();
        character.take_damage(50).unwrap();
        assert_eq!(character.health().current(), 0);
        assert!(!character.is_alive());

        character.heal(10).unwrap();
        assert!(character.is_alive());
        assert_eq!(character.health().current(), 10);
    }

    #[test]
    fn test_zero_deltas_are_noops() {
        let mut character = Character::with_health("Steady", 40, 100, 1).unwrap();
        character.take_damage(0).unwrap();
        character.heal(0).unwrap();
        assert_eq!(character.health().current(), 40);
    }

    #[test]
    fn test_negative_deltas_rejected() {
        let mut character = Character::with_health("Steady", 40, 100, 1).unwrap();
        assert!(matches!(
            character.take_damage(-1),
            Err(RulesError::NegativeAmount { what: "damage", .. })
        ));
        assert!(character.heal(-1).is_err());
        assert_eq!(character.health().current(), 40);
    }

    #[test]
    fn test_equality_ignores_level_and_health() {
        let a = Character::new("Twin", 100, 1).unwrap();
        let mut b = Character::new("Twin", 10, 9).unwrap();
        b.take_damage(3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Character::new("Other", 100, 1).unwrap());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Damage(i32),
        Heal(i32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..500i32).prop_map(Op::Damage),
            (0..500i32).prop_map(Op::Heal),
        ]
    }

    proptest! {
        #[test]
        fn test_health_stays_in_bounds(max in 1..1000i32, ops in prop::collection::vec(op(), 0..64)) {
            let mut character = Character::new("Subject", max, 1).unwrap();
            for op in ops {
                match op {
                    Op::Damage(amount) => character.take_damage(amount).unwrap(),
                    Op::Heal(amount) => character.heal(amount).unwrap(),
                }
                let health = character.health();
                prop_assert!(health.current() >= 0);
                prop_assert!(health.current() <= health.maximum());
                prop_assert_eq!(health.maximum(), max);
            }
        }
    }
}
