//! The top-level `GeoJson` object: a `Geometry`, `Feature`, or `FeatureCollection`.

use crate::{Error, Feature, FeatureCollection, Geometry, JsonValue, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed top-level GeoJSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    fn from_json_value(value: JsonValue) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::NotAnObject(crate::error::describe(&value)))?;
        let type_name = object
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or(Error::MissingType)?;
        match type_name {
            "FeatureCollection" => Ok(GeoJson::FeatureCollection(
                FeatureCollection::from_object(object)?,
            )),
            "Feature" => Ok(GeoJson::Feature(Feature::from_object(object, "feature")?)),
            _ => Ok(GeoJson::Geometry(Geometry::from_object(object, "geometry")?)),
        }
    }
}

impl FromStr for GeoJson {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s)?;
        GeoJson::from_json_value(value)
    }
}

impl fmt::Display for GeoJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoJson::Geometry(g) => write!(f, "{}", JsonValue::Object(g.to_object())),
            GeoJson::Feature(ft) => write!(f, "{}", JsonValue::Object(ft.to_object())),
            GeoJson::FeatureCollection(fc) => write!(f, "{fc}"),
        }
    }
}

impl Serialize for GeoJson {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            GeoJson::Geometry(g) => g.serialize(serializer),
            GeoJson::Feature(ft) => ft.serialize(serializer),
            GeoJson::FeatureCollection(fc) => fc.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for GeoJson {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let value = JsonValue::deserialize(deserializer)?;
        GeoJson::from_json_value(value).map_err(D::Error::custom)
    }
}

impl TryFrom<GeoJson> for FeatureCollection {
    type Error = Error;

    fn try_from(value: GeoJson) -> Result<Self> {
        match value {
            GeoJson::FeatureCollection(fc) => Ok(fc),
            other => Err(Error::InvalidTopLevelType {
                path: "$".to_string(),
                expected: "FeatureCollection",
                found: other.type_name().to_string(),
            }),
        }
    }
}

impl GeoJson {
    fn type_name(&self) -> &'static str {
        match self {
            GeoJson::Geometry(g) => g.value.type_name(),
            GeoJson::Feature(_) => "Feature",
            GeoJson::FeatureCollection(_) => "FeatureCollection",
        }
    }
}
