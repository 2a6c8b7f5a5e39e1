//! Inventory domain module.
//!
//! This crate contains business rules for the stock dashboard, implemented
//! purely as deterministic domain logic (no IO, no rendering, no timers).

pub mod collection;
pub mod item;
pub mod quantity;
pub mod sample;
pub mod status;
pub mod update;

pub use collection::InventoryCollection;
pub use item::InventoryItem;
pub use quantity::Quantity;
pub use sample::sample_inventory;
pub use status::{LOW_STOCK_THRESHOLD, StockStatus};
pub use update::{QuantityParsing, QuantityUpdate};
