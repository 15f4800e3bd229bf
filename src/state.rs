//! Shared application state for all routes.

use crate::service::InventoryStore;
use crate::storage::Storage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InventoryStore>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        AppState {
            store: Arc::new(InventoryStore::new(storage)),
        }
    }
}
