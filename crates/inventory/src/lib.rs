//! Inventory domain module.
//!
//! This crate contains the business rules for the bounded item collection,
//! implemented purely as deterministic domain logic (no IO, no terminal
//! concerns).

pub mod error;
pub mod item;
pub mod store;

pub use error::{InventoryError, InventoryResult};
pub use item::Item;
pub use store::Inventory;
