//! Rosters - the list of entities a battle is fought with, loaded from TOML.
//!
//! ```toml
//! [[entity]]
//! archetype = "fighter"
//! name = "Sir Galahad"
//! max_health = 100
//! armor = 50
//!
//! [[entity]]
//! archetype = "inventory_holder"
//! name = "Frodo"
//! max_health = 40
//! items = [{ name = "Health Potion", value = 50, kind = "potion" }]
//! ```

use std::path::Path;

use combat_rules::{
    Caster, Character, Entity, Fighter, InventoryHolder, Item, ItemKind, Marksman,
};
use serde::Deserialize;

use crate::config::{read_file, SimConfig};
use crate::error::ConfigResult;

/// Health restored by a roster potion that does not name an amount.
pub const DEFAULT_POTION_HEAL: i32 = 20;

fn default_level() -> i32 {
    1
}

/// An item as written in a roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    #[serde(default)]
    pub value: i32,
    /// `"weapon"`, `"armor"`, `"potion"`, or any other tag.
    #[serde(default = "ItemEntry::default_kind")]
    pub kind: String,
    pub heal_amount: Option<i32>,
}

impl ItemEntry {
    fn default_kind() -> String {
        "misc".to_string()
    }

    /// Convert to a rules item, mapping `kind` onto [`ItemKind`].
    pub fn to_item(&self) -> Item {
        let kind = match self.kind.as_str() {
            "weapon" => ItemKind::Weapon,
            "armor" => ItemKind::Armor,
            "potion" => ItemKind::Potion {
                heal_amount: self.heal_amount.unwrap_or(DEFAULT_POTION_HEAL),
            },
            other => ItemKind::Other(other.to_string()),
        };
        Item::new(self.name.clone(), self.value, kind)
    }
}

/// One entity as written in a roster file, tagged by `archetype`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "archetype", rename_all = "snake_case")]
pub enum RosterEntry {
    Base {
        name: String,
        max_health: i32,
        #[serde(default = "default_level")]
        level: i32,
    },
    Fighter {
        name: String,
        max_health: i32,
        #[serde(default = "default_level")]
        level: i32,
        armor: i32,
    },
    Caster {
        name: String,
        max_health: i32,
        #[serde(default = "default_level")]
        level: i32,
        max_mana: i32,
    },
    Marksman {
        name: String,
        max_health: i32,
        #[serde(default = "default_level")]
        level: i32,
        arrows: i32,
    },
    InventoryHolder {
        name: String,
        max_health: i32,
        #[serde(default = "default_level")]
        level: i32,
        #[serde(default)]
        items: Vec<ItemEntry>,
    },
}

impl RosterEntry {
    /// Build the entity through the validating constructors.
    pub fn build(self, config: &SimConfig) -> ConfigResult<Entity> {
        let entity = match self {
            RosterEntry::Base {
                name,
                max_health,
                level,
            } => Character::new(name, max_health, level)?.into(),
            RosterEntry::Fighter {
                name,
                max_health,
                level,
                armor,
            } => Fighter::new(name, max_health, level, armor)?.into(),
            RosterEntry::Caster {
                name,
                max_health,
                level,
                max_mana,
            } => Caster::new(name, max_health, level, max_mana)?.into(),
            RosterEntry::Marksman {
                name,
                max_health,
                level,
                arrows,
            } => Marksman::new(name, max_health, level, arrows)?.into(),
            RosterEntry::InventoryHolder {
                name,
                max_health,
                level,
                items,
            } => {
                let mut holder =
                    InventoryHolder::with_capacity(name, max_health, level, config.inventory.capacity)?;
                for entry in &items {
                    if !holder.add_to_inventory(entry.to_item()) {
                        tracing::warn!(item = %entry.name, "inventory full, item left behind");
                    }
                }
                holder.into()
            }
        };
        Ok(entity)
    }
}

/// An ordered list of roster entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    #[serde(rename = "entity", default)]
    pub entries: Vec<RosterEntry>,
}

impl Roster {
    /// Parse a roster from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a roster from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let roster = Self::from_toml_str(&read_file(path)?)?;
        tracing::debug!(path = %path.display(), entries = roster.entries.len(), "loaded roster");
        Ok(roster)
    }

    /// The stock party: a fighter, a caster, a marksman, and an adventurer
    /// carrying a potion.
    pub fn demo() -> Self {
        Self {
            entries: vec![
                RosterEntry::Fighter {
                    name: "Sir Galahad".into(),
                    max_health: 100,
                    level: 1,
                    armor: 50,
                },
                RosterEntry::Caster {
                    name: "Merlin the Wise".into(),
                    max_health: 80,
                    level: 1,
                    max_mana: 100,
                },
                RosterEntry::Marksman {
                    name: "Robin Hood".into(),
                    max_health: 90,
                    level: 1,
                    arrows: 20,
                },
                RosterEntry::InventoryHolder {
                    name: "Frodo".into(),
                    max_health: 40,
                    level: 1,
                    items: vec![ItemEntry {
                        name: "Health Potion".into(),
                        value: 50,
                        kind: "potion".into(),
                        heal_amount: None,
                    }],
                },
            ],
        }
    }

    /// Build every entry in order, stopping at the first invalid one.
    pub fn into_entities(self, config: &SimConfig) -> ConfigResult<Vec<Entity>> {
        self.entries
            .into_iter()
            .map(|entry| entry.build(config))
            .collect()
    }
}
