//! FeatureCollection Objects.
//!
//! [GeoJSON Format Specification § 3.3](https://tools.ietf.org/html/rfc7946#section-3.3)

use crate::position::Bbox;
use crate::{util, Error, Feature, JsonObject, JsonValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Map;

const RESERVED: [&str; 5] = ["type", "features", "bbox", "name", "crs"];

/// A FeatureCollection Object.
///
/// [GeoJSON Format Specification § 3.3](https://tools.ietf.org/html/rfc7946#section-3.3)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub bbox: Option<Bbox>,
    pub features: Vec<Feature>,
    /// Not part of RFC 7946's core schema but produced by many tools; held
    /// here rather than in `foreign_members` because the wire schema
    /// (`SPEC_FULL.md` §4.8) gives it its own field.
    pub name: Option<String>,
    pub foreign_members: Option<JsonObject>,
}

impl FeatureCollection {
    pub(crate) fn from_object(object: &Map<String, JsonValue>) -> Result<Self> {
        let type_name = object
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or(Error::MissingType)?;
        if type_name != "FeatureCollection" {
            return Err(Error::InvalidTopLevelType {
                path: "$".to_string(),
                expected: "FeatureCollection",
                found: type_name.to_string(),
            });
        }

        let features_json = object
            .get("features")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| Error::EmptyFeatures {
                path: "$.features".to_string(),
            })?;

        let features = features_json
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let obj = f
                    .as_object()
                    .ok_or_else(|| Error::NotAnObject(crate::error::describe(f)))?;
                Feature::from_object(obj, &format!("features[{i}]"))
            })
            .collect::<Result<Vec<_>>>()?;

        let name = match object.get("name") {
            Some(JsonValue::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        Ok(FeatureCollection {
            bbox: util::get_bbox(object, "$")?,
            features,
            name,
            foreign_members: {
                let extra = util::extract_extra(object, &RESERVED);
                if extra.is_empty() {
                    None
                } else {
                    Some(extra)
                }
            },
        })
    }

    pub(crate) fn to_object(&self) -> Map<String, JsonValue> {
        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            JsonValue::String("FeatureCollection".to_string()),
        );
        map.insert(
            "features".to_string(),
            JsonValue::Array(
                self.features
                    .iter()
                    .map(|f| JsonValue::Object(f.to_object()))
                    .collect(),
            ),
        );
        if let Some(bbox) = &self.bbox {
            map.insert("bbox".to_string(), serde_json::to_value(bbox).unwrap());
        }
        if let Some(name) = &self.name {
            map.insert("name".to_string(), JsonValue::String(name.clone()));
        }
        if let Some(extra) = &self.foreign_members {
            for (k, v) in extra {
                map.insert(k.clone(), v.clone());
            }
        }
        map
    }
}

impl Serialize for FeatureCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeatureCollection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let object = Map::<String, JsonValue>::deserialize(deserializer)?;
        FeatureCollection::from_object(&object).map_err(D::Error::custom)
    }
}

impl std::str::FromStr for FeatureCollection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s)?;
        let object = value
            .as_object()
            .ok_or_else(|| Error::NotAnObject(crate::error::describe(&value)))?;
        FeatureCollection::from_object(object)
    }
}

impl std::fmt::Display for FeatureCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", JsonValue::Object(self.to_object()))
    }
}
