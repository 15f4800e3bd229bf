//! Inventory records as persisted in the collection documents, plus the
//! create/update/filter shapes the store works with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Fields a House query may filter on.
pub const HOUSE_FILTER_KEYS: [&str; 5] = ["name", "lat", "lon", "addr", "uid"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub uid: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub addr: String,
    pub floors: i64,
    pub size: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    pub belong_to_house: String,
    pub size: i64,
    pub floor: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    /// Room name, not a stable room id.
    pub belong_to_room: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Validated payload for a new House. The uid is assigned by the store.
#[derive(Clone, Debug, PartialEq)]
pub struct NewHouse {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub addr: String,
    pub floors: i64,
    pub size: i64,
}

/// Validated partial update. `None` leaves the stored field unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HousePatch {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub addr: Option<String>,
    pub floors: Option<i64>,
    pub size: Option<i64>,
}

/// Exact-match filter over the stringified House fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HouseFilter {
    pub name: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub addr: Option<String>,
    pub uid: Option<String>,
}

impl House {
    pub fn new(uid: String, new: NewHouse) -> Self {
        House {
            uid,
            name: new.name,
            lat: new.lat,
            lon: new.lon,
            addr: new.addr,
            floors: new.floors,
            size: new.size,
        }
    }

    pub fn apply(&mut self, patch: HousePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(lat) = patch.lat {
            self.lat = lat;
        }
        if let Some(lon) = patch.lon {
            self.lon = lon;
        }
        if let Some(addr) = patch.addr {
            self.addr = addr;
        }
        if let Some(floors) = patch.floors {
            self.floors = floors;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
    }

    /// String form of a filterable field, as it appears in the JSON document
    /// (`2.0` stays `"2.0"`).
    pub fn field_text(&self, key: &str) -> Option<String> {
        match key {
            "uid" => Some(self.uid.clone()),
            "name" => Some(self.name.clone()),
            "addr" => Some(self.addr.clone()),
            "lat" => Some(float_text(self.lat)),
            "lon" => Some(float_text(self.lon)),
            _ => None,
        }
    }
}

fn float_text(v: f64) -> String {
    serde_json::Number::from_f64(v)
        .map(|n| n.to_string())
        .unwrap_or_else(|| v.to_string())
}

impl HouseFilter {
    /// Build a filter from query-string params; unknown keys are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let text = |key: &str| params.get(key).cloned();
        HouseFilter {
            name: text("name"),
            lat: text("lat"),
            lon: text("lon"),
            addr: text("addr"),
            uid: text("uid"),
        }
    }

    /// Build a filter from a JSON object body. Non-string scalars are compared
    /// by their JSON text; nulls and unknown keys are ignored.
    pub fn from_json(body: &Map<String, Value>) -> Self {
        let text = |key: &str| match body.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        HouseFilter {
            name: text("name"),
            lat: text("lat"),
            lon: text("lon"),
            addr: text("addr"),
            uid: text("uid"),
        }
    }

    fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        HOUSE_FILTER_KEYS
            .into_iter()
            .zip([&self.name, &self.lat, &self.lon, &self.addr, &self.uid])
            .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    pub fn matches(&self, house: &House) -> bool {
        self.entries()
            .all(|(key, want)| house.field_text(key).as_deref() == Some(want))
    }
}

/// Query-string params echoed by `/room/query`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RoomQuery {
    pub name: Option<String>,
    pub belong_to_house: Option<String>,
}

/// Query-string params echoed by `/device/query`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeviceQuery {
    pub name: Option<String>,
    pub belong_to_room: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query-string params echoed by `/users/query`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
    pub name: Option<String>,
}

/// Query-string params echoed by `/house-user/query`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct HouseUserQuery {
    pub user_id: Option<String>,
    pub house_uid: Option<String>,
}
