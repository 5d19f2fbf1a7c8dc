//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is a deterministic domain failure. These are reported to the
/// user and never terminate the session; IO failures live in the frontend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The inventory already holds its maximum number of items.
    #[error("inventory full: capacity of {capacity} items reached")]
    CapacityExceeded { capacity: usize },

    /// An item with the same name is already stored.
    #[error("an item named '{0}' is already stored")]
    DuplicateName(String),

    /// A quantity was zero, negative, or not a number.
    #[error("invalid quantity '{0}': expected a whole number of at least 1")]
    InvalidQuantity(String),

    /// An item name was empty after trimming.
    #[error("item name cannot be empty")]
    EmptyName,

    /// No stored item matches the requested name.
    #[error("no item named '{0}' in the inventory")]
    NotFound(String),
}

impl InventoryError {
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn invalid_quantity(raw: impl Into<String>) -> Self {
        Self::InvalidQuantity(raw.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}
