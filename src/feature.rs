//! Feature Objects.
//!
//! [GeoJSON Format Specification § 3.2](https://tools.ietf.org/html/rfc7946#section-3.2)

use crate::position::Bbox;
use crate::{util, Error, Geometry, JsonObject, JsonValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Map;

const RESERVED: [&str; 5] = ["type", "geometry", "properties", "id", "bbox"];

/// A Feature's `id` member: a string or a number, per RFC 7946 §3.2.
///
/// The codec's wire schema stores `id` as a string unconditionally
/// (`SPEC_FULL.md` §9's id-coercion decision); this enum preserves which
/// JSON representation the text form used, for lossless text round-trips.
#[derive(Debug, Clone, PartialEq)]
pub enum Id {
    String(String),
    Number(serde_json::Number),
}

impl Id {
    /// The codec's unconditional string coercion (`spec.md` §9).
    pub fn to_codec_string(&self) -> String {
        match self {
            Id::String(s) => s.clone(),
            Id::Number(n) => n.to_string(),
        }
    }
}

/// A Feature Object.
///
/// [GeoJSON Format Specification § 3.2](https://tools.ietf.org/html/rfc7946#section-3.2)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feature {
    pub bbox: Option<Bbox>,
    pub geometry: Option<Geometry>,
    pub id: Option<Id>,
    pub properties: Option<JsonObject>,
    pub foreign_members: Option<JsonObject>,
}

impl Feature {
    pub(crate) fn from_object(object: &Map<String, JsonValue>, path: &str) -> Result<Self> {
        let geometry = match object.get("geometry") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Object(g)) => {
                Some(Geometry::from_object(g, &format!("{path}.geometry"))?)
            }
            Some(_) => {
                return Err(Error::MalformedRecord {
                    reason: format!("{path}.geometry must be an object or null"),
                })
            }
        };

        let id = match object.get("id") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) => Some(Id::String(s.clone())),
            Some(JsonValue::Number(n)) => Some(Id::Number(n.clone())),
            Some(_) => {
                return Err(Error::InvalidIdType {
                    path: path.to_string(),
                })
            }
        };

        Ok(Feature {
            bbox: util::get_bbox(object, path)?,
            properties: util::get_properties(object, path)?,
            geometry,
            id,
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
        map.insert("type".to_string(), JsonValue::String("Feature".to_string()));
        map.insert(
            "geometry".to_string(),
            match &self.geometry {
                Some(g) => JsonValue::Object(g.to_object()),
                None => JsonValue::Null,
            },
        );
        map.insert(
            "properties".to_string(),
            match &self.properties {
                Some(p) => JsonValue::Object(p.clone()),
                None => JsonValue::Null,
            },
        );
        if let Some(id) = &self.id {
            map.insert(
                "id".to_string(),
                match id {
                    Id::String(s) => JsonValue::String(s.clone()),
                    Id::Number(n) => JsonValue::Number(n.clone()),
                },
            );
        }
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

impl Serialize for Feature {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let object = Map::<String, JsonValue>::deserialize(deserializer)?;
        Feature::from_object(&object, "feature").map_err(D::Error::custom)
    }
}
