//! In-memory collections, used by tests and for ephemeral runs.

use super::Storage;
use crate::error::StorageError;
use crate::model::{Device, House, Room};
use async_trait::async_trait;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    houses: RwLock<Vec<House>>,
    rooms: RwLock<Vec<Room>>,
    devices: RwLock<Vec<Device>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collections(houses: Vec<House>, rooms: Vec<Room>, devices: Vec<Device>) -> Self {
        MemoryStorage {
            houses: RwLock::new(houses),
            rooms: RwLock::new(rooms),
            devices: RwLock::new(devices),
        }
    }
}

fn read<T: Clone>(lock: &RwLock<Vec<T>>) -> Vec<T> {
    match lock.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn replace<T: Clone>(lock: &RwLock<Vec<T>>, items: &[T]) {
    let mut guard = match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = items.to_vec();
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_houses(&self) -> Result<Vec<House>, StorageError> {
        Ok(read(&self.houses))
    }

    async fn save_houses(&self, houses: &[House]) -> Result<(), StorageError> {
        replace(&self.houses, houses);
        Ok(())
    }

    async fn load_rooms(&self) -> Result<Vec<Room>, StorageError> {
        Ok(read(&self.rooms))
    }

    async fn save_rooms(&self, rooms: &[Room]) -> Result<(), StorageError> {
        replace(&self.rooms, rooms);
        Ok(())
    }

    async fn load_devices(&self) -> Result<Vec<Device>, StorageError> {
        Ok(read(&self.devices))
    }

    async fn save_devices(&self, devices: &[Device]) -> Result<(), StorageError> {
        replace(&self.devices, devices);
        Ok(())
    }
}
