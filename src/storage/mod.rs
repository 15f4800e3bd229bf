//! Collection persistence: one document per collection, loaded and saved whole.

mod json_file;
mod memory;

pub use json_file::{
    temp_path, JsonFileStorage, DEFAULT_DEVICES_FILE, DEFAULT_HOUSES_FILE, DEFAULT_ROOMS_FILE, TEMP_SUFFIX,
};
pub use memory::MemoryStorage;

use crate::error::StorageError;
use crate::model::{Device, House, Room};
use async_trait::async_trait;

/// Load/save seam for the three inventory collections. Every save replaces the
/// whole collection; there is no partial update.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn load_houses(&self) -> Result<Vec<House>, StorageError>;
    async fn save_houses(&self, houses: &[House]) -> Result<(), StorageError>;

    async fn load_rooms(&self) -> Result<Vec<Room>, StorageError>;
    async fn save_rooms(&self, rooms: &[Room]) -> Result<(), StorageError>;

    async fn load_devices(&self) -> Result<Vec<Device>, StorageError>;
    async fn save_devices(&self, devices: &[Device]) -> Result<(), StorageError>;
}
