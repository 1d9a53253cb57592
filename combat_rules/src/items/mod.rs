//! Items and the bounded inventory that holds them.

mod inventory;
mod item;

pub use inventory::*;
pub use item::*;
