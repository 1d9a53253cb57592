//! Simulation configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! standard rules: 20 damage per pass, 10 mana per spell, 10 bag slots.

use std::fs;
use std::path::Path;

use combat_rules::DEFAULT_INVENTORY_CAPACITY;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};

/// Tuning for a single battle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    /// Damage every entity takes once per pass.
    pub damage: i32,
    /// Mana a caster spends on its follow-up spell.
    pub spell_cost: i32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            damage: 20,
            spell_cost: 10,
        }
    }
}

impl BattleConfig {
    /// Reject negative damage or spell cost.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.damage < 0 {
            return Err(ConfigError::Invalid(format!(
                "battle.damage cannot be negative (got {})",
                self.damage
            )));
        }
        if self.spell_cost < 0 {
            return Err(ConfigError::Invalid(format!(
                "battle.spell_cost cannot be negative (got {})",
                self.spell_cost
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Bag slots for inventory holders built from a roster.
    pub capacity: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_INVENTORY_CAPACITY,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub battle: BattleConfig,
    pub inventory: InventoryConfig,
}

impl SimConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let config = Self::from_toml_str(&read_file(path)?)?;
        tracing::debug!(path = %path.display(), ?config, "loaded simulation config");
        Ok(config)
    }

    /// Check every section of the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.battle.validate()?;
        if self.inventory.capacity == 0 {
            return Err(ConfigError::Invalid(
                "inventory.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub(crate) fn read_file(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
