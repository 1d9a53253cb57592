//! # Battle Sim
//!
//! Drives the arena. This crate owns the battle loop and everything around it,
//! while `combat_rules` owns the entities and the rules that mutate them.
//!
//! ## Core Components
//!
//! - **battle**: The battle driver, one deterministic pass per call
//! - **events**: What a pass reports, and the sinks that receive it
//! - **config**: TOML tuning for damage, spell cost, and bag size
//! - **roster**: TOML descriptions of the entities to fight with

pub mod battle;
pub mod config;
pub mod error;
pub mod events;
pub mod roster;

pub use battle::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use roster::*;
