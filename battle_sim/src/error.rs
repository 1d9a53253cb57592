//! Error types for configuration loading and battle runs.

use std::path::PathBuf;

use combat_rules::RulesError;

/// Failures while loading configuration or building a roster.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The file parsed but holds a value the simulation cannot use.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// A roster entry was rejected by the rules.
    #[error("invalid roster entry: {0}")]
    Rules(#[from] RulesError),
}

/// Failures during a battle pass.
#[derive(Debug, thiserror::Error)]
pub enum BattleError {
    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type BattleResult<T> = Result<T, BattleError>;
