//! Small shared helpers for pulling well-known members out of a JSON object.

use crate::position::{valid_bbox_len, Bbox};
use crate::{Error, Result};
use serde_json::{Map, Value as JsonValue};

pub(crate) fn get_bbox(object: &Map<String, JsonValue>, path: &str) -> Result<Option<Bbox>> {
    match object.get("bbox") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Array(arr)) => {
            let mut out = Vec::with_capacity(arr.len());
            for v in arr {
                out.push(v.as_f64().ok_or_else(|| Error::MalformedBbox {
                    path: path.to_string(),
                })?);
            }
            if !valid_bbox_len(&out) {
                return Err(Error::MalformedBbox {
                    path: path.to_string(),
                });
            }
            Ok(Some(out))
        }
        Some(_) => Err(Error::MalformedBbox {
            path: path.to_string(),
        }),
    }
}

pub(crate) fn get_properties(
    object: &Map<String, JsonValue>,
    path: &str,
) -> Result<Option<Map<String, JsonValue>>> {
    match object.get("properties") {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Object(map)) => Ok(Some(map.clone())),
        Some(_) => Err(Error::MalformedRecord {
            reason: format!("{path}.properties must be an object or null"),
        }),
    }
}

pub(crate) fn extract_extra(
    object: &Map<String, JsonValue>,
    reserved: &[&str],
) -> Map<String, JsonValue> {
    object
        .iter()
        .filter(|(k, _)| !reserved.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
