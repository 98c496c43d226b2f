//! # Introduction
//!
//! `geocodec` is a compact, lossy-but-controlled binary codec for
//! [GeoJSON](https://geojson.org) `FeatureCollection`s and
//! `GeometryCollection`s (IETF RFC 7946).
//!
//! Floating-point coordinates are quantized to signed integers under a
//! caller-chosen scale, delta-encoded against a single cursor threaded
//! across the whole collection, and framed with a small protobuf-style wire
//! schema (see [`pb`]). The result is dramatically smaller than GeoJSON
//! text for collections with many nearby points, at the cost of bounded
//! coordinate precision and no support for 3D/M ordinates, CRS
//! reprojection, streaming/partial decode, or spatial indexing.
//!
//! # Usage
//!
//! ```
//! use geocodec::{decode_feature_collection, encode_feature_collection, FeatureCollection};
//!
//! let text = r#"{
//!     "type": "FeatureCollection",
//!     "features": [{
//!         "type": "Feature",
//!         "properties": { "name": "Amsterdam" },
//!         "geometry": { "type": "Point", "coordinates": [4.9, 52.37] }
//!     }]
//! }"#;
//!
//! let fc: FeatureCollection = text.parse().unwrap();
//! let bytes = encode_feature_collection(&fc, 4326, 10_000_000).unwrap();
//! let back = decode_feature_collection(&bytes).unwrap();
//! assert_eq!(back.features.len(), 1);
//! ```
//!
//! # Crate structure
//!
//! The in-memory GeoJSON tree ([`GeoJson`], [`Feature`],
//! [`FeatureCollection`], [`Geometry`], [`GeometryCollection`]) is the
//! input to the `encode_*` functions and the output of the `decode_*`
//! functions; it carries no knowledge of the wire format. [`pb`] holds the
//! generated protobuf message types for callers who need to inspect the
//! wire shape directly.

mod codec;
mod delta;
mod error;
mod feature;
mod feature_collection;
mod flatten;
mod geojson;
mod geometry;
mod geometry_collection;
pub mod pb;
mod position;
mod properties;
mod quantize;
mod unflatten;
mod util;

pub use crate::codec::{
    decode_feature_collection, decode_geometry_collection, encode_feature_collection,
    encode_geometry_collection,
};
pub use crate::error::{Error, Result};
pub use crate::feature::{Feature, Id};
pub use crate::feature_collection::FeatureCollection;
pub use crate::geojson::GeoJson;
pub use crate::geometry::{Geometry, Value};
pub use crate::geometry_collection::GeometryCollection;
pub use crate::position::{Bbox, Position};
pub use crate::quantize::DEFAULT_SCALE;

/// A parsed JSON value, re-exported from [`serde_json`] for convenience.
pub type JsonValue = serde_json::Value;
/// A parsed JSON object, re-exported from [`serde_json`] for convenience.
pub type JsonObject = serde_json::Map<String, JsonValue>;
