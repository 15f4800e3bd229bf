//! Runtime settings read from the environment (after `.env` is loaded by the binary).

use crate::config::validate;
use crate::error::ConfigError;
use crate::storage::{DEFAULT_DEVICES_FILE, DEFAULT_HOUSES_FILE, DEFAULT_ROOMS_FILE};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const BIND_VAR: &str = "INVENTORY_BIND";
pub const DATA_DIR_VAR: &str = "INVENTORY_DATA_DIR";
pub const HOUSES_FILE_VAR: &str = "INVENTORY_HOUSES_FILE";
pub const ROOMS_FILE_VAR: &str = "INVENTORY_ROOMS_FILE";
pub const DEVICES_FILE_VAR: &str = "INVENTORY_DEVICES_FILE";
pub const BODY_LIMIT_VAR: &str = "INVENTORY_BODY_LIMIT";

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;
/// Used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "home_inventory=info,tower_http=info";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub bind: SocketAddr,
    pub data_dir: PathBuf,
    pub houses_file: String,
    pub rooms_file: String,
    pub devices_file: String,
    pub body_limit: usize,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from an arbitrary variable source. Unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let bind_raw = get(BIND_VAR, DEFAULT_BIND);
        let bind = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: BIND_VAR,
            reason: format!("'{}' is not a socket address", bind_raw),
        })?;

        let body_limit = match lookup(BODY_LIMIT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: BODY_LIMIT_VAR,
                reason: format!("'{}' is not a byte count", raw),
            })?,
            None => DEFAULT_BODY_LIMIT,
        };

        let settings = Settings {
            bind,
            data_dir: PathBuf::from(get(DATA_DIR_VAR, DEFAULT_DATA_DIR)),
            houses_file: get(HOUSES_FILE_VAR, DEFAULT_HOUSES_FILE),
            rooms_file: get(ROOMS_FILE_VAR, DEFAULT_ROOMS_FILE),
            devices_file: get(DEVICES_FILE_VAR, DEFAULT_DEVICES_FILE),
            body_limit,
        };
        validate(&settings)?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            bind: SocketAddr::from(([0, 0, 0, 0], 5000)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            houses_file: DEFAULT_HOUSES_FILE.into(),
            rooms_file: DEFAULT_ROOMS_FILE.into(),
            devices_file: DEFAULT_DEVICES_FILE.into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind.port(), 5000);
    }

    #[test]
    fn overrides_are_applied() {
        let settings = Settings::from_lookup(lookup(&[
            (BIND_VAR, "127.0.0.1:8080"),
            (DATA_DIR_VAR, "/var/lib/inventory"),
            (ROOMS_FILE_VAR, "r.json"),
            (BODY_LIMIT_VAR, "4096"),
        ]))
        .unwrap();
        assert_eq!(settings.bind.to_string(), "127.0.0.1:8080");
        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/inventory"));
        assert_eq!(settings.rooms_file, "r.json");
        assert_eq!(settings.body_limit, 4096);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = Settings::from_lookup(lookup(&[(BIND_VAR, "nowhere")])).unwrap_err();
        assert!(err.to_string().contains(BIND_VAR));

        let err = Settings::from_lookup(lookup(&[(BODY_LIMIT_VAR, "lots")])).unwrap_err();
        assert!(err.to_string().contains(BODY_LIMIT_VAR));
    }
}
