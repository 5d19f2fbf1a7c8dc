use crate::error::{InventoryError, InventoryResult};
use crate::item::Item;

/// The bounded, ordered collection of items.
///
/// Insertion order is preserved; removal closes the gap so the remaining
/// items keep their relative order. Lookup is a sequential scan, which is
/// fine at this capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Maximum number of items the inventory can hold.
    pub const CAPACITY: usize = 10;

    /// Create an empty inventory.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inventory pre-populated with the fixed starter pack.
    pub fn starter() -> Self {
        let mut inventory = Self::new();
        for (name, category, quantity) in [
            ("agua", "alimento", 2),
            ("casaco", "roupas", 1),
            ("lanterna", "equipamento", 1),
            ("remedios", "farmacia", 3),
        ] {
            let item = Item::new(name, category, quantity).expect("starter item is valid");
            inventory.add(item).expect("starter pack fits within capacity");
        }
        inventory
    }

    /// Append an item.
    ///
    /// Capacity is checked before uniqueness, so a full inventory reports
    /// `CapacityExceeded` even for a duplicate name.
    pub fn add(&mut self, item: Item) -> InventoryResult<()> {
        if self.is_full() {
            return Err(InventoryError::capacity_exceeded(Self::CAPACITY));
        }
        if self.find(item.name()).is_some() {
            return Err(InventoryError::duplicate(item.name()));
        }

        tracing::debug!(name = item.name(), quantity = item.quantity(), "item added");
        self.items.push(item);
        Ok(())
    }

    /// Remove the item with the given name, returning it.
    ///
    /// `Vec::remove` shifts the tail left by one, preserving the relative
    /// order of the remaining items.
    pub fn remove(&mut self, name: &str) -> InventoryResult<Item> {
        let index = self
            .position(name)
            .ok_or_else(|| InventoryError::not_found(name))?;
        let item = self.items.remove(index);

        tracing::debug!(name = item.name(), "item removed");
        Ok(item)
    }

    /// Sequential scan by exact, case-sensitive name equality.
    ///
    /// Names are unique, so the first hit is the only one.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// The full ordered sequence of items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= Self::CAPACITY
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }
}
