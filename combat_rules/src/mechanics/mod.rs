//! Game mechanics: archetype tags and the constants the rules are tuned by.

/// Upper bound for armor, expressed as a percentage.
pub const MAX_ARMOR: i32 = 100;

/// Chance that a marksman's shot is a critical hit.
pub const CRITICAL_HIT_CHANCE: f64 = 0.2;

/// Slots in an inventory holder's bag unless configured otherwise.
pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

/// The closed set of archetypes an entity can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    /// Plain character with no archetype action.
    Base,
    /// Armored melee fighter.
    Fighter,
    /// Mana-powered spellcaster.
    Caster,
    /// Ranged attacker limited by arrows.
    Marksman,
    /// Character carrying an inventory.
    InventoryHolder,
}

impl Archetype {
    /// Human-readable label for this archetype.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Base => "Character",
            Archetype::Fighter => "Fighter",
            Archetype::Caster => "Caster",
            Archetype::Marksman => "Marksman",
            Archetype::InventoryHolder => "Adventurer",
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Archetype::Fighter.to_string(), "Fighter");
        assert_eq!(Archetype::InventoryHolder.label(), "Adventurer");
    }
}
