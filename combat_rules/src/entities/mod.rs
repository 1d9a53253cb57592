//! Entity definitions for the arena.
//!
//! Every archetype wraps a [`Character`] and exposes the shared capability set
//! through [`Combatant`]. [`Entity`] closes the set so callers can `match` over
//! every archetype.

mod caster;
mod character;
mod components;
mod fighter;
mod holder;
mod marksman;

pub use caster::*;
pub use character::*;
pub use components::*;
pub use fighter::*;
pub use holder::*;
pub use marksman::*;

use crate::error::{RulesError, RulesResult};
use crate::mechanics::Archetype;

/// Capabilities shared by every archetype.
///
/// Implementors only supply access to their [`Character`]. Archetypes that
/// react to damage differently override [`Combatant::take_damage`], and each
/// one appends its own resource to [`Combatant::describe`].
pub trait Combatant {
    fn character(&self) -> &Character;

    fn character_mut(&mut self) -> &mut Character;

    fn name(&self) -> &str {
        self.character().name()
    }

    fn level(&self) -> u32 {
        self.character().level()
    }

    fn health(&self) -> &ResourcePool {
        self.character().health()
    }

    /// Lose `amount` health, flooring at zero.
    fn take_damage(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("damage", amount)?;
        self.character_mut().health_mut().decrease(amount)
    }

    /// Regain `amount` health, capping at the maximum.
    fn heal(&mut self, amount: i32) -> RulesResult<()> {
        let amount = RulesError::check_non_negative("heal amount", amount)?;
        self.character_mut().health_mut().increase(amount)
    }

    fn is_alive(&self) -> bool {
        !self.health().is_exhausted()
    }

    /// One-line summary of this entity.
    fn describe(&self) -> String {
        self.character().summary()
    }
}

/// Any participant in a battle.
///
/// Entities compare equal when their names match, regardless of archetype.
#[derive(Debug, Clone)]
pub enum Entity {
    Base(Character),
    Fighter(Fighter),
    Caster(Caster),
    Marksman(Marksman),
    InventoryHolder(InventoryHolder),
}

impl Entity {
    /// The archetype tag for this entity.
    pub fn archetype(&self) -> Archetype {
        match self {
            Entity::Base(_) => Archetype::Base,
            Entity::Fighter(_) => Archetype::Fighter,
            Entity::Caster(_) => Archetype::Caster,
            Entity::Marksman(_) => Archetype::Marksman,
            Entity::InventoryHolder(_) => Archetype::InventoryHolder,
        }
    }

    fn combatant(&self) -> &dyn Combatant {
        match self {
            Entity::Base(c) => c,
            Entity::Fighter(f) => f,
            Entity::Caster(c) => c,
            Entity::Marksman(m) => m,
            Entity::InventoryHolder(h) => h,
        }
    }

    fn combatant_mut(&mut self) -> &mut dyn Combatant {
        match self {
            Entity::Base(c) => c,
            Entity::Fighter(f) => f,
            Entity::Caster(c) => c,
            Entity::Marksman(m) => m,
            Entity::InventoryHolder(h) => h,
        }
    }
}

impl Combatant for Entity {
    fn character(&self) -> &Character {
        self.combatant().character()
    }

    fn character_mut(&mut self) -> &mut Character {
        self.combatant_mut().character_mut()
    }

    fn take_damage(&mut self, amount: i32) -> RulesResult<()> {
        self.combatant_mut().take_damage(amount)
    }

    fn heal(&mut self, amount: i32) -> RulesResult<()> {
        self.combatant_mut().heal(amount)
    }

    fn describe(&self) -> String {
        self.combatant().describe()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Entity {}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Character> for Entity {
    fn from(character: Character) -> Self {
        Entity::Base(character)
    }
}

impl From<Fighter> for Entity {
    fn from(fighter: Fighter) -> Self {
        Entity::Fighter(fighter)
    }
}

impl From<Caster> for Entity {
    fn from(caster: Caster) -> Self {
        Entity::Caster(caster)
    }
}

impl From<Marksman> for Entity {
    fn from(marksman: Marksman) -> Self {
        Entity::Marksman(marksman)
    }
}

impl From<InventoryHolder> for Entity {
    fn from(holder: InventoryHolder) -> Self {
        Entity::InventoryHolder(holder)
    }
}
