//! Response normalization for Nominatim-shaped payloads
//!
//! Every canonical field is always populated: a value missing upstream
//! becomes an empty string rather than being dropped.

use crate::error::{Error, Result};
use crate::geo::lookup::Direction;
use crate::geo::{Location, ResultSet};
use serde_json::{Map, Value};

/// Map a raw provider response onto a [`ResultSet`]
///
/// Forward responses must be arrays (one result per record, order kept);
/// reverse responses must be a single object.
pub fn normalize(raw: Value, direction: Direction) -> Result<ResultSet> {
    let results = match (direction, &raw) {
        (Direction::Forward, Value::Array(records)) => records
            .iter()
            .map(location_from_record)
            .collect::<Result<Vec<_>>>()?,
        (Direction::Reverse, Value::Object(_)) => vec![location_from_record(&raw)?],
        (Direction::Forward, other) => {
            return Err(Error::MalformedResponse(format!(
                "expected an array of results, got {}",
                json_kind(other)
            )));
        }
        (Direction::Reverse, other) => {
            return Err(Error::MalformedResponse(format!(
                "expected a single result object, got {}",
                json_kind(other)
            )));
        }
    };

    Ok(ResultSet::new(results, raw))
}

fn location_from_record(record: &Value) -> Result<Location> {
    let record = record.as_object().ok_or_else(|| {
        Error::MalformedResponse(format!("expected a result object, got {}", json_kind(record)))
    })?;

    let address = record.get("address").and_then(Value::as_object);

    Ok(Location {
        latitude: coordinate(record, "lat")?,
        longitude: coordinate(record, "lon")?,
        formatted_address: first_text(Some(record), &["display_name"]),
        country: first_text(address, &["country"]),
        country_code: first_text(address, &["country_code"]).to_uppercase(),
        province: first_text(address, &["province", "state"]),
        city: first_text(address, &["city", "town", "village"]),
        zipcode: first_text(address, &["postcode"]),
        street_name: first_text(address, &["street", "road"]),
        street_number: first_text(address, &["house_number"]),
        suburb: first_text(address, &["suburb"]),
        quarter: first_text(address, &["quarter"]),
    })
}

/// Nominatim sends coordinates as strings; accept plain numbers too
fn coordinate(record: &Map<String, Value>, key: &str) -> Result<f64> {
    let parsed = match record.get(key) {
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
    .filter(|v| v.is_finite());

    parsed.ok_or_else(|| {
        Error::MalformedResponse(format!(
            "missing or invalid {}: {}",
            key,
            record.get(key).unwrap_or(&Value::Null)
        ))
    })
}

fn first_text(object: Option<&Map<String, Value>>, keys: &[&str]) -> String {
    let Some(object) = object else {
        return String::new();
    };

    keys.iter()
        .find_map(|key| match object.get(*key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
