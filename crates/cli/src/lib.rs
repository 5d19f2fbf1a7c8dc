//! Interactive menu frontend for the rucksack inventory tracker.
//!
//! The loop is generic over its input/output streams so tests can drive a
//! whole session from a scripted buffer.

pub mod input;
pub mod menu;
pub mod render;

pub use menu::{MenuChoice, MenuSession};
