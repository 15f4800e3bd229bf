//! Collections stored as JSON array documents on disk, replaced atomically on save.

use super::Storage;
use crate::config::Settings;
use crate::error::StorageError;
use crate::model::{Device, House, Room};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_HOUSES_FILE: &str = "houses.json";
pub const DEFAULT_ROOMS_FILE: &str = "rooms.json";
pub const DEFAULT_DEVICES_FILE: &str = "devices.json";
/// Suffix appended to a document path while its replacement is being written.
pub const TEMP_SUFFIX: &str = ".tmp";

#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    houses: PathBuf,
    rooms: PathBuf,
    devices: PathBuf,
}

impl JsonFileStorage {
    /// Storage rooted at `dir` with the default document names.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        JsonFileStorage {
            houses: dir.join(DEFAULT_HOUSES_FILE),
            rooms: dir.join(DEFAULT_ROOMS_FILE),
            devices: dir.join(DEFAULT_DEVICES_FILE),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        JsonFileStorage {
            houses: settings.data_dir.join(&settings.houses_file),
            rooms: settings.data_dir.join(&settings.rooms_file),
            devices: settings.data_dir.join(&settings.devices_file),
        }
    }

    pub fn houses_path(&self) -> &Path {
        &self.houses
    }

    pub fn rooms_path(&self) -> &Path {
        &self.rooms
    }

    pub fn devices_path(&self) -> &Path {
        &self.devices
    }
}

/// A missing or blank document is an empty collection.
async fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&bytes).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `<file>.tmp` next to the document.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

async fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StorageError> {
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    let bytes = serde_json::to_vec_pretty(items)?;
    let tmp = temp_path(path);
    tokio::fs::write(&tmp, &bytes).await.map_err(io_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_err)?;
    tracing::debug!(path = %path.display(), records = items.len(), "collection saved");
    Ok(())
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load_houses(&self) -> Result<Vec<House>, StorageError> {
        read_collection(&self.houses).await
    }

    async fn save_houses(&self, houses: &[House]) -> Result<(), StorageError> {
        write_collection(&self.houses, houses).await
    }

    async fn load_rooms(&self) -> Result<Vec<Room>, StorageError> {
        read_collection(&self.rooms).await
    }

    async fn save_rooms(&self, rooms: &[Room]) -> Result<(), StorageError> {
        write_collection(&self.rooms, rooms).await
    }

    async fn load_devices(&self) -> Result<Vec<Device>, StorageError> {
        read_collection(&self.devices).await
    }

    async fn save_devices(&self, devices: &[Device]) -> Result<(), StorageError> {
        write_collection(&self.devices, devices).await
    }
}
