//! Carried items.
//!
//! Display order is insertion order. Item ids are fresh UUIDs, so an id is
//! never handed out twice even after its item is removed.

use serde::{Deserialize, Serialize};

use crate::events::InventoryUpdate;
use crate::ids::ItemId;
use crate::value_objects::Quantity;

/// One line in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
}

impl InventoryItem {
    fn new(name: String) -> Self {
        Self {
            id: ItemId::new(),
            name,
            quantity: Quantity::ONE,
        }
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }
}

/// Ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append an item with quantity 1.
    ///
    /// The name must contain something besides whitespace. It is stored as
    /// typed, surrounding whitespace included.
    pub fn add(&mut self, name: impl Into<String>) -> InventoryUpdate {
        let name = name.into();
        if name.trim().is_empty() {
            return InventoryUpdate::EmptyName;
        }
        let item = InventoryItem::new(name);
        let id = item.id;
        self.items.push(item);
        InventoryUpdate::Added { id }
    }

    /// Replace the name of an item. Any text is accepted, including empty.
    pub fn rename(&mut self, id: ItemId, name: impl Into<String>) -> InventoryUpdate {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                let from = std::mem::replace(&mut item.name, name.into());
                InventoryUpdate::Renamed {
                    id,
                    from,
                    to: item.name.clone(),
                }
            }
            None => InventoryUpdate::UnknownItem { id },
        }
    }

    pub fn set_quantity(&mut self, id: ItemId, quantity: Quantity) -> InventoryUpdate {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                let from = std::mem::replace(&mut item.quantity, quantity);
                InventoryUpdate::QuantityChanged {
                    id,
                    from,
                    to: quantity,
                }
            }
            None => InventoryUpdate::UnknownItem { id },
        }
    }

    pub fn remove(&mut self, id: ItemId) -> InventoryUpdate {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                let item = self.items.remove(index);
                InventoryUpdate::Removed {
                    id,
                    name: item.name,
                }
            }
            None => InventoryUpdate::UnknownItem { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn added_id(update: InventoryUpdate) -> ItemId {
        match update {
            InventoryUpdate::Added { id } => id,
            other => panic!("expected Added, got {:?}", other),
        }
    }

    mod add {
        use super::*;

        #[test]
        fn appends_with_quantity_one() {
            let mut inventory = Inventory::new();
            let id = added_id(inventory.add("Rope"));
            let item = inventory.get(id).unwrap();
            assert_eq!(item.name(), "Rope");
            assert_eq!(item.quantity(), Quantity::ONE);
        }

        #[test]
        fn keeps_insertion_order() {
            let mut inventory = Inventory::new();
            inventory.add("Rope");
            inventory.add("Torch");
            inventory.add("Rations");
            let names: Vec<_> = inventory.items().iter().map(|i| i.name()).collect();
            assert_eq!(names, ["Rope", "Torch", "Rations"]);
        }

        #[test]
        fn whitespace_name_is_a_no_op() {
            let mut inventory = Inventory::new();
            assert_eq!(inventory.add("   \t"), InventoryUpdate::EmptyName);
            assert_eq!(inventory.add(""), InventoryUpdate::EmptyName);
            assert!(inventory.is_empty());
        }

        #[test]
        fn stores_the_name_as_typed() {
            let mut inventory = Inventory::new();
            let id = added_id(inventory.add("  Lantern "));
            assert_eq!(inventory.get(id).unwrap().name(), "  Lantern ");
        }

        #[test]
        fn ids_are_fresh_after_removal() {
            let mut inventory = Inventory::new();
            let mut seen = HashSet::new();
            for _ in 0..20 {
                let id = added_id(inventory.add("Dagger"));
                assert!(seen.insert(id));
                inventory.remove(id);
            }
            assert!(inventory.is_empty());
        }
    }

    mod update {
        use super::*;

        #[test]
        fn rename_by_id() {
            let mut inventory = Inventory::new();
            let id = added_id(inventory.add("Rope"));
            let update = inventory.rename(id, "Silk Rope");
            assert!(update.is_change());
            assert_eq!(inventory.get(id).unwrap().name(), "Silk Rope");
        }

        #[test]
        fn quantity_by_id() {
            let mut inventory = Inventory::new();
            let other = added_id(inventory.add("Torch"));
            let id = added_id(inventory.add("Arrows"));
            inventory.set_quantity(id, Quantity::new(20));
            assert_eq!(inventory.get(id).unwrap().quantity().value(), 20);
            assert_eq!(inventory.get(other).unwrap().quantity(), Quantity::ONE);
        }

        #[test]
        fn unknown_id_changes_nothing() {
            let mut inventory = Inventory::new();
            inventory.add("Rope");
            let before = inventory.clone();
            let stray = ItemId::new();
            assert_eq!(
                inventory.rename(stray, "x"),
                InventoryUpdate::UnknownItem { id: stray }
            );
            assert_eq!(
                inventory.set_quantity(stray, Quantity::new(3)),
                InventoryUpdate::UnknownItem { id: stray }
            );
            assert_eq!(inventory, before);
        }
    }

    mod remove {
        use super::*;

        #[test]
        fn add_then_remove_restores_the_list() {
            let mut inventory = Inventory::new();
            inventory.add("Rope");
            let before = inventory.clone();
            let id = added_id(inventory.add("Torch"));
            let update = inventory.remove(id);
            assert_eq!(
                update,
                InventoryUpdate::Removed {
                    id,
                    name: "Torch".to_string()
                }
            );
            assert_eq!(inventory, before);
        }

        #[test]
        fn unknown_id_is_a_no_op() {
            let mut inventory = Inventory::new();
            inventory.add("Rope");
            let update = inventory.remove(ItemId::new());
            assert!(!update.is_change());
            assert_eq!(inventory.len(), 1);
        }
    }
}
