// This file was automatically generated through build.rs, and should not be edited by hand.
// Run `cargo build --features regenerate-proto` against proto/geocodec.proto to refresh it.

/// CRS record: opaque SRID plus the quantization scale it was encoded under.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Crs {
    #[prost(uint32, tag = "1")]
    pub srid: u32,
    #[prost(uint32, tag = "2")]
    pub scale: u32,
}

/// A single quantized coordinate pair. Used only for a collection's origin.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(sint64, tag = "1")]
    pub x: i64,
    #[prost(sint64, tag = "2")]
    pub y: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum GeomType {
    Unknown = 0,
    Point = 1,
    Multipoint = 2,
    Linestring = 3,
    Multilinestring = 4,
    Polygon = 5,
    Multipolygon = 6,
}

impl GeomType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            GeomType::Unknown => "UNKNOWN",
            GeomType::Point => "POINT",
            GeomType::Multipoint => "MULTIPOINT",
            GeomType::Linestring => "LINESTRING",
            GeomType::Multilinestring => "MULTILINESTRING",
            GeomType::Polygon => "POLYGON",
            GeomType::Multipolygon => "MULTIPOLYGON",
        }
    }

    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "UNKNOWN" => Some(Self::Unknown),
            "POINT" => Some(Self::Point),
            "MULTIPOINT" => Some(Self::Multipoint),
            "LINESTRING" => Some(Self::Linestring),
            "MULTILINESTRING" => Some(Self::Multilinestring),
            "POLYGON" => Some(Self::Polygon),
            "MULTIPOLYGON" => Some(Self::Multipolygon),
            _ => None,
        }
    }
}

/// One flattened, delta-encoded geometry. See SPEC_FULL.md §4.2/§4.3 for
/// how `dxy`, `part_sizes` and `poly_ring_counts` reconstruct GeoJSON
/// coordinate nesting.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StreamGeometry {
    #[prost(enumeration = "GeomType", tag = "1")]
    pub r#type: i32,
    #[prost(uint32, repeated, tag = "2")]
    pub part_sizes: ::prost::alloc::vec::Vec<u32>,
    #[prost(uint32, repeated, tag = "3")]
    pub poly_ring_counts: ::prost::alloc::vec::Vec<u32>,
    #[prost(sint64, repeated, tag = "4")]
    pub dxy: ::prost::alloc::vec::Vec<i64>,
}

/// Self-describing recursive property value. Wire-shaped like
/// `google.protobuf.Struct`/`Value`.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    #[prost(oneof = "value::Kind", tags = "1, 2, 3, 4, 5, 6")]
    pub kind: ::core::option::Option<value::Kind>,
}

/// Nested message and enum types in `Value`.
pub mod value {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        #[prost(bool, tag = "1")]
        NullValue(bool),
        #[prost(bool, tag = "2")]
        BoolValue(bool),
        #[prost(double, tag = "3")]
        NumberValue(f64),
        #[prost(string, tag = "4")]
        StringValue(::prost::alloc::string::String),
        #[prost(message, tag = "5")]
        ListValue(super::ListValue),
        #[prost(message, tag = "6")]
        StructValue(super::Struct),
    }
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListValue {
    #[prost(message, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<Value>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StructEntry {
    #[prost(string, tag = "1")]
    pub key: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub value: ::core::option::Option<Value>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Struct {
    #[prost(message, repeated, tag = "1")]
    pub fields: ::prost::alloc::vec::Vec<StructEntry>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Feature {
    #[prost(message, optional, tag = "1")]
    pub geometry: ::core::option::Option<StreamGeometry>,
    #[prost(message, optional, tag = "2")]
    pub properties: ::core::option::Option<Struct>,
    #[prost(string, tag = "3")]
    pub id: ::prost::alloc::string::String,
    #[prost(double, repeated, tag = "4")]
    pub bbox: ::prost::alloc::vec::Vec<f64>,
    #[prost(message, optional, tag = "5")]
    pub extra: ::core::option::Option<Struct>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FeatureCollection {
    #[prost(message, optional, tag = "1")]
    pub crs: ::core::option::Option<Crs>,
    #[prost(message, optional, tag = "2")]
    pub global_start: ::core::option::Option<Point>,
    #[prost(message, repeated, tag = "3")]
    pub features: ::prost::alloc::vec::Vec<Feature>,
    #[prost(double, repeated, tag = "4")]
    pub bbox: ::prost::alloc::vec::Vec<f64>,
    #[prost(string, tag = "5")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "6")]
    pub extra: ::core::option::Option<Struct>,
}

#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeometryCollection {
    #[prost(message, optional, tag = "1")]
    pub crs: ::core::option::Option<Crs>,
    #[prost(message, optional, tag = "2")]
    pub global_start: ::core::option::Option<Point>,
    #[prost(message, repeated, tag = "3")]
    pub geometries: ::prost::alloc::vec::Vec<StreamGeometry>,
    #[prost(double, repeated, tag = "4")]
    pub bbox: ::prost::alloc::vec::Vec<f64>,
    #[prost(message, optional, tag = "5")]
    pub extra: ::core::option::Option<Struct>,
}
