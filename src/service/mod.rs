//! InventoryStore: House CRUD and cascade over pluggable storage.

mod inventory;
mod validation;
pub use inventory::{InventoryStore, RemovalSummary};
pub use validation::{RequestValidator, HOUSE_REQUIRED};
