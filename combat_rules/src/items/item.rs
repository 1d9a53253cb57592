//! Item definitions.

/// What an item is, and for consumables, what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Armor,
    /// Restores `heal_amount` health when used. Consumed on use.
    Potion { heal_amount: i32 },
    /// Free-form category tag for anything else.
    Other(String),
}

impl ItemKind {
    /// Category tag for this kind (e.g. `"potion"`).
    pub fn tag(&self) -> &str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Potion { .. } => "potion",
            ItemKind::Other(tag) => tag,
        }
    }
}

/// A named item with a gold value.
///
/// Items compare equal when their names match; value and kind are ignored.
#[derive(Debug, Clone)]
pub struct Item {
    name: String,
    value: i32,
    kind: ItemKind,
}

impl Item {
    /// Create an item. A negative value is raised to zero.
    pub fn new(name: impl Into<String>, value: i32, kind: ItemKind) -> Self {
        let kind = match kind {
            ItemKind::Potion { heal_amount } => ItemKind::Potion {
                heal_amount: heal_amount.max(0),
            },
            other => other,
        };
        Self {
            name: name.into(),
            value: value.max(0),
            kind,
        }
    }

    /// Create a healing potion.
    pub fn potion(name: impl Into<String>, value: i32, heal_amount: i32) -> Self {
        Self::new(name, value, ItemKind::Potion { heal_amount })
    }

    /// The item's name, also its identity for equality.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value in gold, never negative.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// What kind of item this is.
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Health restored by using this item, if it is a potion.
    pub fn heal_amount(&self) -> Option<i32> {
        match self.kind {
            ItemKind::Potion { heal_amount } => Some(heal_amount),
            _ => None,
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Item {}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} gold)", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_value_clamped() {
        let item = Item::new("Cursed Coin", -10, ItemKind::Other("junk".into()));
        assert_eq!(item.value(), 0);
        assert_eq!(item.kind().tag(), "junk");
    }

    #[test]
    fn test_item_equality_by_name() {
        let a = Item::new("Sword", 100, ItemKind::Weapon);
        let b = Item::potion("Sword", 5, 20);
        let c = Item::new("Shield", 100, ItemKind::Armor);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_potion_heal_amount() {
        assert_eq!(Item::potion("Health Potion", 50, 20).heal_amount(), Some(20));
        assert_eq!(Item::potion("Flat Potion", 1, -5).heal_amount(), Some(0));
        assert_eq!(Item::new("Bow", 30, ItemKind::Weapon).heal_amount(), None);
    }

    #[test]
    fn test_item_display() {
        let item = Item::potion("Health Potion", 50, 20);
        assert_eq!(item.to_string(), "Health Potion (50 gold)");
        assert_eq!(item.kind().tag(), "potion");
    }
}
