//! Settings validation: the three documents must be distinct, named files, and
//! none may be mistaken for another's in-progress temp file.

use crate::config::{Settings, BODY_LIMIT_VAR, DEVICES_FILE_VAR, HOUSES_FILE_VAR, ROOMS_FILE_VAR};
use crate::error::ConfigError;
use crate::storage::TEMP_SUFFIX;

pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let files = [
        (HOUSES_FILE_VAR, settings.houses_file.as_str()),
        (ROOMS_FILE_VAR, settings.rooms_file.as_str()),
        (DEVICES_FILE_VAR, settings.devices_file.as_str()),
    ];

    for (i, (var, name)) in files.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: *var,
                reason: "file name must not be empty".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(ConfigError::Invalid {
                var: *var,
                reason: format!("'{}' must be a bare file name inside the data directory", name),
            });
        }
        if name.ends_with(TEMP_SUFFIX) {
            return Err(ConfigError::Invalid {
                var: *var,
                reason: format!("'{}' must not end in {}", name, TEMP_SUFFIX),
            });
        }
        if let Some((other, _)) = files[..i].iter().find(|(_, n)| n == name) {
            return Err(ConfigError::Invalid {
                var: *var,
                reason: format!("'{}' is already used by {}", name, other),
            });
        }
    }

    if settings.body_limit == 0 {
        return Err(ConfigError::Invalid {
            var: BODY_LIMIT_VAR,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}
