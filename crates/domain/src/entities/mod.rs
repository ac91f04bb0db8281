//! Domain entities - Core business objects with identity

mod inventory;

pub use inventory::{Inventory, InventoryItem};
