//! Request validation for House payloads and the required-field checks used by
//! the scaffold endpoints.

use crate::error::AppError;
use crate::model::{HousePatch, NewHouse};
use serde_json::{Map, Value};

/// Required House fields, in the order they are checked.
pub const HOUSE_REQUIRED: [&str; 6] = ["name", "lat", "lon", "addr", "floors", "size"];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full House payload. The first missing field is reported; a
    /// caller-supplied uid is ignored.
    pub fn new_house(body: &Map<String, Value>) -> Result<NewHouse, AppError> {
        Self::require_each(body, &HOUSE_REQUIRED)?;
        Ok(NewHouse {
            name: text_field(body, "name")?.unwrap_or_default(),
            lat: latitude(body)?.unwrap_or_default(),
            lon: longitude(body)?.unwrap_or_default(),
            addr: text_field(body, "addr")?.unwrap_or_default(),
            floors: positive_int(body, "floors")?.unwrap_or_default(),
            size: positive_int(body, "size")?.unwrap_or_default(),
        })
    }

    /// Validate only the fields present in body (for update). `uid` is not part of the patch.
    pub fn house_patch(body: &Map<String, Value>) -> Result<HousePatch, AppError> {
        Ok(HousePatch {
            name: text_field(body, "name")?,
            lat: latitude(body)?,
            lon: longitude(body)?,
            addr: text_field(body, "addr")?,
            floors: positive_int(body, "floors")?,
            size: positive_int(body, "size")?,
        })
    }

    /// The uid identifying an existing House.
    pub fn uid(body: Option<&Map<String, Value>>) -> Result<String, AppError> {
        let value = body.and_then(|b| present(b, "uid"));
        match value {
            None => Err(AppError::Validation("uid is required".into())),
            Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
            Some(_) => Err(invalid("uid", "must be a non-empty string")),
        }
    }

    /// Every field must be present; reports `Missing required parameter: <field>`
    /// for the first absent one.
    pub fn require_each(body: &Map<String, Value>, fields: &[&str]) -> Result<(), AppError> {
        match fields.iter().find(|f| present(body, f).is_none()) {
            Some(missing) => Err(AppError::Validation(format!(
                "Missing required parameter: {}",
                missing
            ))),
            None => Ok(()),
        }
    }

    /// Every field must be present; reports them all together
    /// (`a and b are required`). A missing body counts as all fields missing.
    pub fn require_all(body: Option<&Map<String, Value>>, fields: &[&str]) -> Result<(), AppError> {
        let complete = body.map_or(false, |b| fields.iter().all(|f| present(b, f).is_some()));
        if complete {
            return Ok(());
        }
        let verb = if fields.len() == 1 { "is" } else { "are" };
        Err(AppError::Validation(format!("{} {} required", fields.join(" and "), verb)))
    }
}

fn present<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    body.get(field).filter(|v| !v.is_null())
}

fn invalid(field: &str, reason: &str) -> AppError {
    AppError::Validation(format!("Invalid '{}': {}", field, reason))
}

fn text_field(body: &Map<String, Value>, field: &str) -> Result<Option<String>, AppError> {
    match present(body, field) {
        None => Ok(None),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(Some(s.clone())),
        Some(_) => Err(invalid(field, "must be a non-empty string")),
    }
}

fn float_field(body: &Map<String, Value>, field: &str) -> Result<Option<f64>, AppError> {
    let parsed = match present(body, field) {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(invalid(field, "must be a valid floating-point number")),
    }
}

fn latitude(body: &Map<String, Value>) -> Result<Option<f64>, AppError> {
    match float_field(body, "lat")? {
        Some(lat) if !(-90.0..=90.0).contains(&lat) => Err(invalid("lat", "must be between -90 and 90")),
        other => Ok(other),
    }
}

fn longitude(body: &Map<String, Value>) -> Result<Option<f64>, AppError> {
    match float_field(body, "lon")? {
        Some(lon) if !(-180.0..=180.0).contains(&lon) => Err(invalid("lon", "must be between -180 and 180")),
        other => Ok(other),
    }
}

fn positive_int(body: &Map<String, Value>, field: &str) -> Result<Option<i64>, AppError> {
    let parsed = match present(body, field) {
        None => return Ok(None),
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };
    match parsed {
        None => Err(invalid(field, "must be an integer")),
        Some(v) if v <= 0 => Err(invalid(field, "must be a positive integer")),
        Some(v) => Ok(Some(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    fn dream_house() -> Map<String, Value> {
        obj(json!({
            "name": "Dream House",
            "lat": 40.7128,
            "lon": -74.0060,
            "addr": "123 Main St, NY",
            "floors": 2,
            "size": 120
        }))
    }

    fn error_message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_a_complete_house() {
        let house = RequestValidator::new_house(&dream_house()).unwrap();
        assert_eq!(house.name, "Dream House");
        assert_eq!(house.floors, 2);
        assert!((house.lon + 74.006).abs() < 1e-9);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let mut body = dream_house();
        body.insert("lat".into(), json!("45.5"));
        body.insert("floors".into(), json!(" 3 "));
        let house = RequestValidator::new_house(&body).unwrap();
        assert_eq!(house.lat, 45.5);
        assert_eq!(house.floors, 3);
    }

    #[test]
    fn each_missing_field_is_named() {
        for field in HOUSE_REQUIRED {
            let mut body = dream_house();
            body.remove(field);
            let msg = error_message(RequestValidator::new_house(&body).unwrap_err());
            assert_eq!(msg, format!("Missing required parameter: {}", field));
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let mut body = dream_house();
        body.insert("addr".into(), Value::Null);
        let msg = error_message(RequestValidator::new_house(&body).unwrap_err());
        assert_eq!(msg, "Missing required parameter: addr");
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let cases = [
            ("lat", json!(90.5), "Invalid 'lat': must be between -90 and 90"),
            ("lat", json!(-91), "Invalid 'lat': must be between -90 and 90"),
            ("lon", json!(180.01), "Invalid 'lon': must be between -180 and 180"),
            ("lat", json!("invalid_lat"), "Invalid 'lat': must be a valid floating-point number"),
            ("lon", json!(true), "Invalid 'lon': must be a valid floating-point number"),
        ];
        for (field, value, expected) in cases {
            let mut body = dream_house();
            body.insert(field.into(), value);
            let msg = error_message(RequestValidator::new_house(&body).unwrap_err());
            assert_eq!(msg, expected);
        }
    }

    #[test]
    fn boundary_coordinates_are_accepted() {
        let mut body = dream_house();
        body.insert("lat".into(), json!(-90));
        body.insert("lon".into(), json!(180));
        assert!(RequestValidator::new_house(&body).is_ok());
    }

    #[test]
    fn floors_and_size_must_be_positive_integers() {
        let cases = [
            ("floors", json!("two"), "Invalid 'floors': must be an integer"),
            ("floors", json!(1.5), "Invalid 'floors': must be an integer"),
            ("floors", json!(0), "Invalid 'floors': must be a positive integer"),
            ("size", json!(-3), "Invalid 'size': must be a positive integer"),
            ("size", json!("-1"), "Invalid 'size': must be a positive integer"),
        ];
        for (field, value, expected) in cases {
            let mut body = dream_house();
            body.insert(field.into(), value);
            let msg = error_message(RequestValidator::new_house(&body).unwrap_err());
            assert_eq!(msg, expected);
        }
    }

    #[test]
    fn blank_strings_are_rejected() {
        let mut body = dream_house();
        body.insert("name".into(), json!("   "));
        let msg = error_message(RequestValidator::new_house(&body).unwrap_err());
        assert_eq!(msg, "Invalid 'name': must be a non-empty string");
    }

    #[test]
    fn patch_keeps_only_supplied_fields() {
        let patch = RequestValidator::house_patch(&obj(json!({"uid": "other", "name": "X"}))).unwrap();
        assert_eq!(
            patch,
            HousePatch {
                name: Some("X".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn patch_fields_are_range_checked() {
        let err = RequestValidator::house_patch(&obj(json!({"lat": 123}))).unwrap_err();
        assert_eq!(error_message(err), "Invalid 'lat': must be between -90 and 90");
    }

    #[test]
    fn uid_is_required() {
        let msg = error_message(RequestValidator::uid(None).unwrap_err());
        assert_eq!(msg, "uid is required");
        let body = obj(json!({"name": "New Name"}));
        let msg = error_message(RequestValidator::uid(Some(&body)).unwrap_err());
        assert_eq!(msg, "uid is required");
        let body = obj(json!({"uid": 7}));
        assert!(RequestValidator::uid(Some(&body)).is_err());
    }

    #[test]
    fn require_all_joins_field_names() {
        let body = obj(json!({"name": "Master Bedroom"}));
        let msg = error_message(
            RequestValidator::require_all(Some(&body), &["name", "belong_to_house"]).unwrap_err(),
        );
        assert_eq!(msg, "name and belong_to_house are required");

        let msg = error_message(RequestValidator::require_all(None, &["user_id"]).unwrap_err());
        assert_eq!(msg, "user_id is required");
    }
}
