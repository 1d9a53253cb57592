//! Characters that carry an inventory.

use super::{Character, Combatant};
use crate::error::RulesResult;
use crate::items::{Inventory, Item};
use crate::mechanics::DEFAULT_INVENTORY_CAPACITY;

/// A character that owns exactly one inventory.
#[derive(Debug, Clone)]
pub struct InventoryHolder {
    character: Character,
    inventory: Inventory,
}

impl InventoryHolder {
    /// Create a holder with a bag of the default size.
    pub fn new(name: impl Into<String>, max_health: i32, level: i32) -> RulesResult<Self> {
        Self::with_capacity(name, max_health, level, DEFAULT_INVENTORY_CAPACITY)
    }

    /// Create a holder whose bag holds `capacity` items.
    pub fn with_capacity(
        name: impl Into<String>,
        max_health: i32,
        level: i32,
        capacity: usize,
    ) -> RulesResult<Self> {
        Ok(Self {
            character: Character::new(name, max_health, level)?,
            inventory: Inventory::new(capacity),
        })
    }

    /// The holder's bag.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Put `item` in the bag. Returns `false` if the bag is full.
    pub fn add_to_inventory(&mut self, item: Item) -> bool {
        self.inventory.add(item)
    }

    /// Use the first item called `name`.
    ///
    /// Potions heal the holder and are consumed. Anything else, or a missing
    /// item, leaves everything untouched and yields `false`.
    pub fn use_item(&mut self, name: &str) -> RulesResult<bool> {
        let Some(heal) = self.inventory.find(name).and_then(Item::heal_amount) else {
            return Ok(false);
        };
        self.heal(heal)?;
        self.inventory.remove(name);
        Ok(true)
    }
}

impl Combatant for InventoryHolder {
    fn character(&self) -> &Character {
        &self.character
    }

    fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    fn describe(&self) -> String {
        format!(
            "{} | Inventory: {}/{}",
            self.character.summary(),
            self.inventory.len(),
            self.inventory.capacity()
        )
    }
}

impl PartialEq for InventoryHolder {
    fn eq(&self, other: &Self) -> bool {
        self.character == other.character
    }
}

impl Eq for InventoryHolder {}

impl std::fmt::Display for InventoryHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    #[test]
    fn test_potion_heals_and_is_consumed() {
        let mut holder = InventoryHolder::new("Robin Hood", 90, 1).unwrap();
        holder.take_damage(50).unwrap();
        assert!(holder.add_to_inventory(Item::potion("Health Potion", 50, 20)));

        assert!(holder.use_item("Health Potion").unwrap());
        assert_eq!(holder.health().current(), 60);
        assert!(holder.inventory().is_empty());

        assert!(!holder.use_item("Health Potion").unwrap());
        assert_eq!(holder.health().current(), 60);
    }

    #[test]
    fn test_healing_caps_at_maximum() {
        let mut holder = InventoryHolder::new("Robin Hood", 90, 1).unwrap();
        holder.add_to_inventory(Item::potion("Health Potion", 50, 20));
        assert!(holder.use_item("Health Potion").unwrap());
        assert_eq!(holder.health().current(), 90);
    }

    #[test]
    fn test_non_consumables_stay_in_bag() {
        let mut holder = InventoryHolder::new("Robin Hood", 90, 1).unwrap();
        holder.take_damage(10).unwrap();
        holder.add_to_inventory(Item::new("Longbow", 120, ItemKind::Weapon));

        assert!(!holder.use_item("Longbow").unwrap());
        assert_eq!(holder.inventory().len(), 1);
        assert_eq!(holder.health().current(), 80);
    }

    #[test]
    fn test_bag_capacity() {
        let mut holder = InventoryHolder::with_capacity("Packrat", 50, 1, 1).unwrap();
        assert!(holder.add_to_inventory(Item::new("Rope", 2, ItemKind::Other("tool".into()))));
        assert!(!holder.add_to_inventory(Item::new("Torch", 1, ItemKind::Other("tool".into()))));
    }

    #[test]
    fn test_describe_appends_bag_usage() {
        let mut holder = InventoryHolder::new("Robin Hood", 90, 1).unwrap();
        holder.add_to_inventory(Item::potion("Health Potion", 50, 20));
        assert_eq!(
            holder.to_string(),
            "Robin Hood (Level 1) | HP: 90/90 | Inventory: 1/10"
        );
    }
}
