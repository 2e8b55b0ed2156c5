//! Structural updates at dotted paths (`pluginConfig.cfg`, `showDialog.save`).
//!
//! Typed values go through a serialize, update, deserialize round trip so a
//! caller can address any field by name, including fields kept in a flattened
//! `extra` map.

use crate::error::CreatorError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Sets `value` at `path` inside `root`, creating intermediate objects.
/// Numeric segments index into existing arrays.
pub fn set_at_path(root: &mut Value, path: &str, value: Value) -> Result<(), CreatorError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(CreatorError::InvalidPath(path.to_string()));
    }
    let (last, parents) = match segments.split_last() {
        Some(split) => split,
        None => return Err(CreatorError::InvalidPath(path.to_string())),
    };

    let mut current = root;
    for segment in parents {
        current = child_slot(current, segment, path)?;
    }
    match current {
        Value::Array(items) => {
            let index = array_index(items, last, path)?;
            items[index] = value;
        }
        other => {
            if !other.is_object() {
                *other = Value::Object(Map::new());
            }
            if let Value::Object(map) = other {
                map.insert((*last).to_string(), value);
            }
        }
    }
    Ok(())
}

fn child_slot<'a>(
    current: &'a mut Value,
    segment: &str,
    path: &str,
) -> Result<&'a mut Value, CreatorError> {
    if !current.is_object() && !current.is_array() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Array(items) => {
            let index = array_index(items, segment, path)?;
            Ok(&mut items[index])
        }
        Value::Object(map) => Ok(map
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()))),
        _ => Err(CreatorError::InvalidPath(path.to_string())),
    }
}

fn array_index(items: &[Value], segment: &str, path: &str) -> Result<usize, CreatorError> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|index| *index < items.len())
        .ok_or_else(|| CreatorError::InvalidPath(path.to_string()))
}

/// Returns a copy of `item` with `path` set to `value`.
pub fn updated<T>(item: &T, path: &str, value: Value) -> Result<T, CreatorError>
where
    T: Serialize + DeserializeOwned,
{
    let mut raw = serde_json::to_value(item)?;
    set_at_path(&mut raw, path, value)?;
    Ok(serde_json::from_value(raw)?)
}

/// Returns a copy of `item` with the top-level field `key` set to `value`.
/// Unlike [`updated`], dots in `key` are part of the field name.
pub fn with_field<T>(item: &T, key: &str, value: Value) -> Result<T, CreatorError>
where
    T: Serialize + DeserializeOwned,
{
    let mut raw = serde_json::to_value(item)?;
    match raw.as_object_mut() {
        Some(map) => {
            map.insert(key.to_string(), value);
        }
        None => return Err(CreatorError::InvalidPath(key.to_string())),
    }
    Ok(serde_json::from_value(raw)?)
}
