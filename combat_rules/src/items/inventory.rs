//! Bounded, insertion-ordered item storage.

use super::Item;
use crate::mechanics::DEFAULT_INVENTORY_CAPACITY;

/// An ordered bag of items that never holds more than `capacity` entries.
///
/// Duplicate names are allowed. Lookups and removals act on the first match.
#[derive(Debug, Clone)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_CAPACITY)
    }
}

impl Inventory {
    /// Create an empty inventory. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append `item` if there is room. Returns `false` when full.
    pub fn add(&mut self, item: Item) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the first item called `name`. Returns `false` if there is none.
    pub fn remove(&mut self, name: &str) -> bool {
        self.take(name).is_some()
    }

    /// Remove and return the first item called `name`.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(index))
    }

    /// First item called `name`.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Sum of every item's value.
    pub fn total_value(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.value())).sum()
    }

    /// Check if every slot is taken.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Check if the inventory holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Inventory: [")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemKind;

    fn sword() -> Item {
        Item::new("Sword", 100, ItemKind::Weapon)
    }

    #[test]
    fn test_capacity_limit() {
        let mut inventory = Inventory::new(2);
        assert!(inventory.add(sword()));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.add(Item::potion("Health Potion", 50, 20)));
        assert_eq!(inventory.len(), 2);
        assert!(inventory.is_full());

        assert!(!inventory.add(Item::new("Shield", 80, ItemKind::Armor)));
        assert_eq!(inventory.len(), 2);
        assert!(inventory.find("Shield").is_none());
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut inventory = Inventory::new(0);
        assert_eq!(inventory.capacity(), 1);
        assert!(inventory.add(sword()));
        assert!(!inventory.add(sword()));
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(Inventory::default().capacity(), DEFAULT_INVENTORY_CAPACITY);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut inventory = Inventory::new(5);
        inventory.add(Item::potion("Potion", 10, 20));
        inventory.add(sword());
        inventory.add(Item::potion("Potion", 30, 50));

        assert!(inventory.remove("Potion"));
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.items()[0].name(), "Sword");
        assert_eq!(inventory.find("Potion").map(Item::value), Some(30));

        assert!(inventory.remove("Potion"));
        assert!(!inventory.remove("Potion"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut inventory = Inventory::new(3);
        inventory.add(Item::potion("Potion", 10, 20));
        inventory.add(Item::potion("Potion", 30, 50));
        assert_eq!(inventory.find("Potion").map(Item::value), Some(10));
        assert!(inventory.find("Bow").is_none());
    }

    #[test]
    fn test_total_value() {
        let mut inventory = Inventory::new(3);
        assert_eq!(inventory.total_value(), 0);
        inventory.add(sword());
        inventory.add(Item::potion("Health Potion", 50, 20));
        assert_eq!(inventory.total_value(), 150);
    }

    #[test]
    fn test_display() {
        let mut inventory = Inventory::new(3);
        assert_eq!(inventory.to_string(), "Inventory: []");
        inventory.add(sword());
        inventory.add(Item::potion("Health Potion", 50, 20));
        assert_eq!(
            inventory.to_string(),
            "Inventory: [Sword (100 gold), Health Potion (50 gold)]"
        );
    }
}
