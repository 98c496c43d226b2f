//! Error types for reading, writing, and codec-encoding GeoJSON.
//!
//! Every fallible operation in this crate returns [`Result`]. Decode- and
//! encode-side failures carry the offending path (e.g.
//! `features[17].geometry.coordinates[2]`) so callers can locate the bad
//! input without re-walking the tree themselves.

use std::fmt;

/// Errors which can occur when parsing, encoding, or decoding GeoJSON.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    // -- textual GeoJSON parsing (component I) --
    #[error("error while deserializing JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("expected a JSON object, found `{0}`")]
    NotAnObject(String),
    #[error("expected a GeoJSON `type` member")]
    MissingType,
    #[error("unrecognized GeoJSON `type`: `{0}`")]
    UnknownType(String),
    #[error("a position must contain at least two ordinates, found {0}")]
    PositionTooShort(usize),

    // -- FeatureCollection / GeometryCollection codec contract (spec.md §4.5/§4.6/§7) --
    #[error("at {path}: expected top-level type `{expected}`, found `{found}`")]
    InvalidTopLevelType {
        path: String,
        expected: &'static str,
        found: String,
    },
    #[error("at {path}: `features` must be a non-empty array")]
    EmptyFeatures { path: String },
    #[error("at {path}: `geometries` must be a non-empty array")]
    EmptyGeometries { path: String },
    #[error("at {path}: feature geometry is required and must not be null")]
    MissingGeometry { path: String },
    #[error("at {path}: unsupported geometry type `{found}`")]
    UnsupportedGeometryType { path: String, found: String },
    #[error("at {path}: malformed coordinates ({reason})")]
    MalformedCoordinates { path: String, reason: String },
    #[error("at {path}: coordinate is non-finite or out of range")]
    InvalidCoordinate { path: String },
    #[error("at {path}: bbox must be a 4- or 6-element numeric array")]
    MalformedBbox { path: String },
    #[error("at {path}: `id` must be a string or a number")]
    InvalidIdType { path: String },
    #[error("scale must be a positive integer, got {0}")]
    InvalidScale(i64),
    #[error("at {path}: non-finite number in properties")]
    UnrepresentableNumber { path: String },
    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },
    #[error("at {path}: geometry is empty")]
    EmptyGeometry { path: String },
}

impl Error {
    pub(crate) fn malformed_record(reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            reason: reason.into(),
        }
    }
}

/// Wraps a [`String`]-like JSON value for error display without pulling
/// `serde_json::Value`'s `Display` impl (which is full JSON, not a short tag).
pub(crate) fn describe(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::String(s) => s.clone(),
        other => short(other),
    }
}

fn short(value: &serde_json::Value) -> String {
    struct Short<'a>(&'a serde_json::Value);
    impl fmt::Display for Short<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }
    let rendered = Short(value).to_string();
    if rendered.len() > 40 {
        format!("{}...", &rendered[..40])
    } else {
        rendered
    }
}

pub type Result<T> = std::result::Result<T, Error>;
