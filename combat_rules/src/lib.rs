//! # Combat Rules
//!
//! Character archetypes, bounded resource pools, items, and inventories for the
//! arena simulation. This crate holds state and the rules that mutate it; it
//! performs no I/O and drives no battles.

pub mod entities;
pub mod error;
pub mod items;
pub mod mechanics;

pub use entities::*;
pub use error::*;
pub use items::*;
pub use mechanics::*;
