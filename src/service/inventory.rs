//! House CRUD over the injected [`Storage`], including the House → Room → Device cascade.

use crate::error::AppError;
use crate::model::{House, HouseFilter, HousePatch, NewHouse};
use crate::storage::Storage;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;

/// What a successful remove took with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalSummary {
    pub rooms: usize,
    pub devices: usize,
}

pub struct InventoryStore {
    storage: Arc<dyn Storage>,
    /// Held for the whole read-modify-write of every mutating operation.
    write_lock: Mutex<()>,
}

impl InventoryStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        InventoryStore {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// Append a House under a freshly generated uid and persist the collection.
    pub async fn create(&self, new: NewHouse) -> Result<String, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut houses = self.storage.load_houses().await?;
        let uid = loop {
            let candidate = uuid::Uuid::new_v4().simple().to_string();
            if !houses.iter().any(|h| h.uid == candidate) {
                break candidate;
            }
        };
        houses.push(House::new(uid.clone(), new));
        self.storage.save_houses(&houses).await?;
        tracing::info!(uid = %uid, "house created");
        Ok(uid)
    }

    /// Remove a House, its Rooms, and every Device attached to one of those
    /// Rooms by name. Nothing is written when the uid is unknown.
    pub async fn remove(&self, uid: &str) -> Result<RemovalSummary, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut houses = self.storage.load_houses().await?;
        let before = houses.len();
        houses.retain(|h| h.uid != uid);
        if houses.len() == before {
            tracing::debug!(uid = %uid, "remove: house not found");
            return Err(house_not_found());
        }

        let rooms = self.storage.load_rooms().await?;
        let (removed_rooms, kept_rooms): (Vec<_>, Vec<_>) =
            rooms.into_iter().partition(|r| r.belong_to_house == uid);
        let removed_names: HashSet<&str> = removed_rooms.iter().map(|r| r.name.as_str()).collect();

        for shared in kept_rooms.iter().filter(|r| removed_names.contains(r.name.as_str())) {
            tracing::warn!(
                room = %shared.name,
                house = %shared.belong_to_house,
                "room name also used by a removed room; its devices are removed too"
            );
        }

        let mut devices = self.storage.load_devices().await?;
        let devices_before = devices.len();
        devices.retain(|d| !removed_names.contains(d.belong_to_room.as_str()));

        let summary = RemovalSummary {
            rooms: removed_rooms.len(),
            devices: devices_before - devices.len(),
        };

        self.storage.save_houses(&houses).await?;
        self.storage.save_rooms(&kept_rooms).await?;
        self.storage.save_devices(&devices).await?;
        tracing::info!(uid = %uid, rooms = summary.rooms, devices = summary.devices, "house removed");
        Ok(summary)
    }

    /// Overwrite the supplied fields of an existing House; its uid never changes.
    pub async fn update(&self, uid: &str, patch: HousePatch) -> Result<House, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut houses = self.storage.load_houses().await?;
        let house = houses.iter_mut().find(|h| h.uid == uid).ok_or_else(|| {
            tracing::debug!(uid = %uid, "update: house not found");
            house_not_found()
        })?;
        house.apply(patch);
        let updated = house.clone();
        self.storage.save_houses(&houses).await?;
        tracing::info!(uid = %uid, "house updated");
        Ok(updated)
    }

    /// Houses matching every key of `filter`, in collection order.
    pub async fn query(&self, filter: &HouseFilter) -> Result<Vec<House>, AppError> {
        let houses = self.storage.load_houses().await?;
        if filter.is_empty() {
            return Ok(houses);
        }
        Ok(houses.into_iter().filter(|h| filter.matches(h)).collect())
    }
}

fn house_not_found() -> AppError {
    AppError::NotFound("House not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Device, Room};
    use crate::storage::MemoryStorage;

    fn new_house(name: &str) -> NewHouse {
        NewHouse {
            name: name.into(),
            lat: 40.7128,
            lon: -74.006,
            addr: "123 Main St, NY".into(),
            floors: 2,
            size: 120,
        }
    }

    fn room(name: &str, house: &str) -> Room {
        Room {
            name: name.into(),
            belong_to_house: house.into(),
            size: 30,
            floor: 1,
        }
    }

    fn device(name: &str, room: &str) -> Device {
        Device {
            name: name.into(),
            belong_to_room: room.into(),
            kind: "Lighting".into(),
        }
    }

    fn store_with(storage: Arc<MemoryStorage>) -> InventoryStore {
        InventoryStore::new(storage)
    }

    #[tokio::test]
    async fn create_issues_distinct_uids() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let mut seen = HashSet::new();
        for i in 0..50 {
            let uid = store.create(new_house(&format!("House {}", i))).await.unwrap();
            assert!(!uid.is_empty());
            assert!(seen.insert(uid));
        }
        assert_eq!(store.query(&HouseFilter::default()).await.unwrap().len(), 50);
    }

    #[tokio::test]
    async fn query_returns_created_record() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let uid = store.create(new_house("Dream House")).await.unwrap();
        let filter = HouseFilter {
            uid: Some(uid.clone()),
            ..Default::default()
        };
        let found = store.query(&filter).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].uid, uid);
        assert_eq!(found[0].name, "Dream House");
    }

    #[tokio::test]
    async fn query_keeps_collection_order() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let a = store.create(new_house("Same")).await.unwrap();
        store.create(new_house("Other")).await.unwrap();
        let b = store.create(new_house("Same")).await.unwrap();
        let filter = HouseFilter {
            name: Some("Same".into()),
            ..Default::default()
        };
        let uids: Vec<_> = store.query(&filter).await.unwrap().into_iter().map(|h| h.uid).collect();
        assert_eq!(uids, vec![a, b]);
    }

    #[tokio::test]
    async fn remove_cascades_to_rooms_and_devices() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        let u1 = store.create(new_house("One")).await.unwrap();
        let u2 = store.create(new_house("Two")).await.unwrap();
        storage
            .save_rooms(&[room("Bedroom", &u1), room("Kitchen", &u1), room("Study", &u2)])
            .await
            .unwrap();
        storage
            .save_devices(&[device("Light", "Bedroom"), device("Oven", "Kitchen"), device("Lamp", "Study")])
            .await
            .unwrap();

        let summary = store.remove(&u1).await.unwrap();
        assert_eq!(summary, RemovalSummary { rooms: 2, devices: 2 });

        let houses = storage.load_houses().await.unwrap();
        assert_eq!(houses.len(), 1);
        assert_eq!(houses[0].uid, u2);
        assert_eq!(storage.load_rooms().await.unwrap(), vec![room("Study", &u2)]);
        assert_eq!(storage.load_devices().await.unwrap(), vec![device("Lamp", "Study")]);
    }

    #[tokio::test]
    async fn remove_with_shared_room_name_keeps_other_room_but_drops_devices() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        let u1 = store.create(new_house("One")).await.unwrap();
        let u2 = store.create(new_house("Two")).await.unwrap();
        storage
            .save_rooms(&[room("Bedroom", &u1), room("Bedroom", &u2)])
            .await
            .unwrap();
        storage.save_devices(&[device("Light", "Bedroom")]).await.unwrap();

        let summary = store.remove(&u1).await.unwrap();
        assert_eq!(summary, RemovalSummary { rooms: 1, devices: 1 });
        assert_eq!(storage.load_rooms().await.unwrap(), vec![room("Bedroom", &u2)]);
        assert!(storage.load_devices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_unknown_uid_leaves_collections_untouched() {
        let storage = Arc::new(MemoryStorage::with_collections(
            Vec::new(),
            vec![room("Bedroom", "h1")],
            vec![device("Light", "Bedroom")],
        ));
        let store = store_with(storage.clone());
        let uid = store.create(new_house("Kept")).await.unwrap();

        let err = store.remove("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "House not found"));
        assert_eq!(storage.load_houses().await.unwrap()[0].uid, uid);
        assert_eq!(storage.load_rooms().await.unwrap().len(), 1);
        assert_eq!(storage.load_devices().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn removed_house_is_no_longer_queryable() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let uid = store.create(new_house("Dream House")).await.unwrap();
        store.remove(&uid).await.unwrap();
        let filter = HouseFilter {
            uid: Some(uid),
            ..Default::default()
        };
        assert!(store.query(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let uid = store.create(new_house("Dream House")).await.unwrap();
        let updated = store
            .update(
                &uid,
                HousePatch {
                    name: Some("X".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.uid, uid);
        assert_eq!(updated.name, "X");
        assert_eq!(updated.lat, 40.7128);
        assert_eq!(updated.addr, "123 Main St, NY");
        assert_eq!((updated.floors, updated.size), (2, 120));
    }

    #[tokio::test]
    async fn update_unknown_uid_is_not_found() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let err = store.update("nope", HousePatch::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn concurrent_creates_are_not_lost() {
        let store = Arc::new(store_with(Arc::new(MemoryStorage::new())));
        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(new_house(&format!("H{}", i))).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(store.query(&HouseFilter::default()).await.unwrap().len(), 20);
    }
}
