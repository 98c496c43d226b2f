//! Properties Bridge (component E): lossless JSON value tree <-> wire
//! `pb::Value`/`pb::Struct`. See `SPEC_FULL.md` §4.4.
//!
//! `pb::Struct` is a hand-rolled `repeated StructEntry`, not
//! `prost_types::Struct` -- proto3 maps desugar to exactly that shape on the
//! wire, so this stays wire-compatible with `google.protobuf.Struct` without
//! pulling in `prost-types`' well-known-type machinery.
//!
//! GeoJSON's `properties: null` and `properties: {}` are distinct on the
//! JSON side but both degrade to an empty `Struct` on the wire (P-JSON);
//! decoding always yields `{}`, never re-synthesizes the `null` -- a
//! documented asymmetry, not a bug.

use crate::pb;
use crate::{Error, Result};
use serde_json::{Map, Number, Value as JsonValue};

pub fn properties_to_struct(properties: &Map<String, JsonValue>, path: &str) -> Result<pb::Struct> {
    let mut fields = Vec::with_capacity(properties.len());
    for (key, value) in properties {
        let entry_path = format!("{path}.{key}");
        fields.push(pb::StructEntry {
            key: key.clone(),
            value: Some(json_to_value(value, &entry_path)?),
        });
    }
    Ok(pb::Struct { fields })
}

pub fn struct_to_properties(s: &pb::Struct) -> Map<String, JsonValue> {
    let mut map = Map::with_capacity(s.fields.len());
    for entry in &s.fields {
        let value = entry
            .value
            .as_ref()
            .map(value_to_json)
            .unwrap_or(JsonValue::Null);
        map.insert(entry.key.clone(), value);
    }
    map
}

fn json_to_value(value: &JsonValue, path: &str) -> Result<pb::Value> {
    let kind = match value {
        JsonValue::Null => pb::value::Kind::NullValue(true),
        JsonValue::Bool(b) => pb::value::Kind::BoolValue(*b),
        JsonValue::Number(n) => {
            let f = n.as_f64().ok_or_else(|| Error::UnrepresentableNumber {
                path: path.to_string(),
            })?;
            if !f.is_finite() {
                return Err(Error::UnrepresentableNumber {
                    path: path.to_string(),
                });
            }
            pb::value::Kind::NumberValue(f)
        }
        JsonValue::String(s) => pb::value::Kind::StringValue(s.clone()),
        JsonValue::Array(arr) => {
            let values = arr
                .iter()
                .enumerate()
                .map(|(i, v)| json_to_value(v, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>>>()?;
            pb::value::Kind::ListValue(pb::ListValue { values })
        }
        JsonValue::Object(map) => {
            pb::value::Kind::StructValue(properties_to_struct(map, path)?)
        }
    };
    Ok(pb::Value { kind: Some(kind) })
}

fn value_to_json(value: &pb::Value) -> JsonValue {
    match &value.kind {
        None => JsonValue::Null,
        Some(pb::value::Kind::NullValue(_)) => JsonValue::Null,
        Some(pb::value::Kind::BoolValue(b)) => JsonValue::Bool(*b),
        Some(pb::value::Kind::NumberValue(f)) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Some(pb::value::Kind::StringValue(s)) => JsonValue::String(s.clone()),
        Some(pb::value::Kind::ListValue(list)) => {
            JsonValue::Array(list.values.iter().map(value_to_json).collect())
        }
        Some(pb::value::Kind::StructValue(s)) => JsonValue::Object(struct_to_properties(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn round_trips_mixed_property_tree() {
        let properties = match json!({
            "name": "Golden Gate",
            "lanes": 6,
            "open": true,
            "tags": ["bridge", "landmark"],
            "meta": { "nested": null },
        }) {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        };
        let wire = properties_to_struct(&properties, "$.properties").unwrap();
        let back = struct_to_properties(&wire);
        assert_eq!(back, properties);
    }

    #[test]
    fn empty_struct_round_trips_to_empty_map_not_null() {
        let empty = Map::new();
        let wire = properties_to_struct(&empty, "$.properties").unwrap();
        assert!(wire.fields.is_empty());
        assert_eq!(struct_to_properties(&wire), Map::new());
    }

    #[test]
    fn null_value_round_trips() {
        let mut properties = Map::new();
        properties.insert("owner".to_string(), JsonValue::Null);
        let wire = properties_to_struct(&properties, "$.properties").unwrap();
        assert_eq!(struct_to_properties(&wire), properties);
    }
}
