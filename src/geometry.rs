//! Geometry Objects.
//!
//! [GeoJSON Format Specification § 3.1](https://tools.ietf.org/html/rfc7946#section-3.1)

use crate::position::{Bbox, Position};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// The `coordinates` payload of a Geometry, tagged by GeoJSON `type`.
///
/// `GeometryCollection` is represented here because RFC 7946 allows it as a
/// bare top-level geometry, but per `SPEC_FULL.md` §3 the codec never
/// accepts it *inside* a `Feature`: `encode_feature_collection` rejects a
/// feature whose geometry is a `GeometryCollection` with
/// `UnsupportedGeometryType`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Point(Position),
    MultiPoint(Vec<Position>),
    LineString(Vec<Position>),
    MultiLineString(Vec<Vec<Position>>),
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
    GeometryCollection(Vec<Geometry>),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Point(..) => "Point",
            Value::MultiPoint(..) => "MultiPoint",
            Value::LineString(..) => "LineString",
            Value::MultiLineString(..) => "MultiLineString",
            Value::Polygon(..) => "Polygon",
            Value::MultiPolygon(..) => "MultiPolygon",
            Value::GeometryCollection(..) => "GeometryCollection",
        }
    }
}

/// A Geometry Object.
///
/// [GeoJSON Format Specification § 3.1](https://tools.ietf.org/html/rfc7946#section-3.1)
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub bbox: Option<Bbox>,
    pub value: Value,
}

impl Geometry {
    pub fn new(value: Value) -> Self {
        Geometry { bbox: None, value }
    }
}

fn positions_from_json(json: &JsonValue, path: &str) -> Result<Position> {
    let arr = json
        .as_array()
        .ok_or_else(|| Error::MalformedCoordinates {
            path: path.to_string(),
            reason: "expected an array".to_string(),
        })?;
    if arr.len() < 2 {
        return Err(Error::PositionTooShort(arr.len()));
    }
    let mut out = Vec::with_capacity(arr.len());
    for (i, v) in arr.iter().enumerate() {
        out.push(v.as_f64().ok_or_else(|| Error::MalformedCoordinates {
            path: format!("{path}[{i}]"),
            reason: "expected a number".to_string(),
        })?);
    }
    Ok(Position::from(out))
}

fn line_from_json(json: &JsonValue, path: &str) -> Result<Vec<Position>> {
    let arr = json
        .as_array()
        .ok_or_else(|| Error::MalformedCoordinates {
            path: path.to_string(),
            reason: "expected an array".to_string(),
        })?;
    arr.iter()
        .enumerate()
        .map(|(i, v)| positions_from_json(v, &format!("{path}[{i}]")))
        .collect()
}

fn rings_from_json(json: &JsonValue, path: &str) -> Result<Vec<Vec<Position>>> {
    let arr = json
        .as_array()
        .ok_or_else(|| Error::MalformedCoordinates {
            path: path.to_string(),
            reason: "expected an array".to_string(),
        })?;
    arr.iter()
        .enumerate()
        .map(|(i, v)| line_from_json(v, &format!("{path}[{i}]")))
        .collect()
}

fn polygons_from_json(json: &JsonValue, path: &str) -> Result<Vec<Vec<Vec<Position>>>> {
    let arr = json
        .as_array()
        .ok_or_else(|| Error::MalformedCoordinates {
            path: path.to_string(),
            reason: "expected an array".to_string(),
        })?;
    arr.iter()
        .enumerate()
        .map(|(i, v)| rings_from_json(v, &format!("{path}[{i}]")))
        .collect()
}

impl Geometry {
    pub(crate) fn from_object(object: &Map<String, JsonValue>, path: &str) -> Result<Self> {
        let type_name = object
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or(Error::MissingType)?;

        let bbox = crate::util::get_bbox(object, path)?;

        if type_name == "GeometryCollection" {
            let geometries = object
                .get("geometries")
                .and_then(JsonValue::as_array)
                .ok_or_else(|| Error::MalformedCoordinates {
                    path: path.to_string(),
                    reason: "GeometryCollection requires a `geometries` array".to_string(),
                })?;
            let geometries = geometries
                .iter()
                .enumerate()
                .map(|(i, g)| {
                    let obj = g.as_object().ok_or_else(|| {
                        Error::NotAnObject(crate::error::describe(g))
                    })?;
                    Geometry::from_object(obj, &format!("{path}.geometries[{i}]"))
                })
                .collect::<Result<Vec<_>>>()?;
            return Ok(Geometry {
                bbox,
                value: Value::GeometryCollection(geometries),
            });
        }

        let coordinates = object
            .get("coordinates")
            .ok_or_else(|| Error::MalformedCoordinates {
                path: path.to_string(),
                reason: "missing `coordinates`".to_string(),
            })?;
        let coord_path = format!("{path}.coordinates");

        let value = match type_name {
            "Point" => Value::Point(positions_from_json(coordinates, &coord_path)?),
            "MultiPoint" => Value::MultiPoint(line_from_json(coordinates, &coord_path)?),
            "LineString" => Value::LineString(line_from_json(coordinates, &coord_path)?),
            "MultiLineString" => {
                Value::MultiLineString(rings_from_json(coordinates, &coord_path)?)
            }
            "Polygon" => Value::Polygon(rings_from_json(coordinates, &coord_path)?),
            "MultiPolygon" => Value::MultiPolygon(polygons_from_json(coordinates, &coord_path)?),
            other => {
                return Err(Error::UnknownType(other.to_string()));
            }
        };

        Ok(Geometry { bbox, value })
    }

    pub(crate) fn to_object(&self) -> Map<String, JsonValue> {
        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            JsonValue::String(self.value.type_name().to_string()),
        );
        match &self.value {
            Value::GeometryCollection(geometries) => {
                map.insert(
                    "geometries".to_string(),
                    JsonValue::Array(geometries.iter().map(|g| JsonValue::Object(g.to_object())).collect()),
                );
            }
            _ => {
                map.insert("coordinates".to_string(), self.value.coordinates_json());
            }
        }
        if let Some(bbox) = &self.bbox {
            map.insert("bbox".to_string(), serde_json::to_value(bbox).unwrap());
        }
        map
    }
}

impl Value {
    fn coordinates_json(&self) -> JsonValue {
        fn pos(p: &Position) -> JsonValue {
            serde_json::to_value(p.as_slice()).unwrap()
        }
        fn line(l: &[Position]) -> JsonValue {
            JsonValue::Array(l.iter().map(pos).collect())
        }
        fn rings(r: &[Vec<Position>]) -> JsonValue {
            JsonValue::Array(r.iter().map(|l| line(l)).collect())
        }
        match self {
            Value::Point(p) => pos(p),
            Value::MultiPoint(pts) => line(pts),
            Value::LineString(pts) => line(pts),
            Value::MultiLineString(lines) => rings(lines),
            Value::Polygon(r) => rings(r),
            Value::MultiPolygon(polys) => {
                JsonValue::Array(polys.iter().map(|p| rings(p)).collect())
            }
            Value::GeometryCollection(_) => JsonValue::Null,
        }
    }
}

impl Serialize for Geometry {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_object().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let object = Map::<String, JsonValue>::deserialize(deserializer)?;
        Geometry::from_object(&object, "geometry").map_err(D::Error::custom)
    }
}
