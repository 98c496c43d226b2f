//! Top-level GeometryCollection Objects -- the input/output shape for the
//! GeometryCollection Codec (component G).
//!
//! This is distinct from [`crate::Value::GeometryCollection`], which models
//! a `GeometryCollection` nested *inside* another geometry slot; this type
//! is always the top-level document, with its own `bbox`/foreign members,
//! mirroring how [`crate::FeatureCollection`] relates to [`crate::Feature`].

use crate::position::Bbox;
use crate::{util, Error, Geometry, JsonObject, JsonValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Map;

const RESERVED: [&str; 4] = ["type", "geometries", "bbox", "crs"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection {
    pub bbox: Option<Bbox>,
    pub geometries: Vec<Geometry>,
    pub foreign_members: Option<JsonObject>,
}

impl GeometryCollection {
    pub(crate) fn from_object(object: &Map<String, JsonValue>) -> Result<Self> {
        let type_name = object
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or(Error::MissingType)?;
        if type_name != "GeometryCollection" {
            return Err(Error::InvalidTopLevelType {
                path: "$".to_string(),
                expected: "GeometryCollection",
                found: type_name.to_string(),
            });
        }

        let geometries_json = object
            .get("geometries")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| Error::EmptyGeometries {
                path: "$.geometries".to_string(),
            })?;

        let geometries = geometries_json
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let obj = g
                    .as_object()
                    .ok_or_else(|| Error::NotAnObject(crate::error::describe(g)))?;
                Geometry::from_object(obj, &format!("geometries[{i}]"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GeometryCollection {
            bbox: util::get_bbox(object, "$")?,
            geometries,
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
            JsonValue::String("GeometryCollection".to_string()),
        );
        map.insert(
            "geometries".to_string(),
            JsonValue::Array(
                self.geometries
                    .iter()
                    .map(|g| JsonValue::Object(g.to_object()))
                    .collect(),
            ),
        );
        if let Some(bbox) = &self.bbox {
            map.insert("bbox".to_string(), serde_json::to_value(bbox).unwrap());
        }
        if let Some(extra) = &self.foreign_members {
            for (k, v) in extra {
                map.insert(k.clone(), v.clone());
            }
        }
        map
    }
}

impl Serialize for GeometryCollection {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeometryCollection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let object = Map::<String, JsonValue>::deserialize(deserializer)?;
        GeometryCollection::from_object(&object).map_err(D::Error::custom)
    }
}

impl std::str::FromStr for GeometryCollection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s)?;
        let object = value
            .as_object()
            .ok_or_else(|| Error::NotAnObject(crate::error::describe(&value)))?;
        GeometryCollection::from_object(object)
    }
}

impl std::fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", JsonValue::Object(self.to_object()))
    }
}
