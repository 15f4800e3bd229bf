//! Home inventory: REST backend for houses, rooms and devices stored as JSON documents.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod storage;

pub use config::Settings;
pub use error::{AppError, ConfigError, StorageError};
pub use model::{Device, House, HouseFilter, HousePatch, NewHouse, Room};
pub use routes::{app, common_routes_with_ready, house_routes, scaffold_routes};
pub use service::{InventoryStore, RemovalSummary, RequestValidator};
pub use state::AppState;
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
