use crate::error::{InventoryError, InventoryResult};

/// A named, categorized, quantified inventory record.
///
/// Constructed only through [`Item::new`], so a stored item always has a
/// non-empty name and a quantity of at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    category: String,
    quantity: u32,
}

impl Item {
    /// Validating constructor.
    ///
    /// The name must be non-empty after trimming; the category is free-form
    /// and may be empty; the quantity must be at least 1.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
    ) -> InventoryResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::EmptyName);
        }
        if quantity == 0 {
            return Err(InventoryError::invalid_quantity("0"));
        }
        Ok(Self {
            name,
            category: category.into(),
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_item_with_given_fields() {
        let item = Item::new("agua", "alimento", 2).unwrap();
        assert_eq!(item.name(), "agua");
        assert_eq!(item.category(), "alimento");
        assert_eq!(item.quantity(), 2);
    }

    #[test]
    fn new_rejects_blank_name() {
        let err = Item::new("   ", "alimento", 2).unwrap_err();
        assert_eq!(err, InventoryError::EmptyName);
    }

    #[test]
    fn new_rejects_zero_quantity() {
        let err = Item::new("agua", "alimento", 0).unwrap_err();
        match err {
            InventoryError::InvalidQuantity(_) => {}
            other => panic!("expected InvalidQuantity, got {other:?}"),
        }
    }

    #[test]
    fn new_accepts_empty_category() {
        let item = Item::new("corda", "", 1).unwrap();
        assert_eq!(item.category(), "");
    }
}
