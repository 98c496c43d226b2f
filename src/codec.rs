//! FeatureCollection Codec (F) and GeometryCollection Codec (G): the four
//! public entry points that drive the rest of the crate. See
//! `SPEC_FULL.md` §4.5/§4.6.
//!
//! Encode: validate the top-level shape, derive the global origin from the
//! first geometry's first coordinate, then for each geometry in order run
//! Flatten (B) -> Quantize (A) -> delta-encode (D) against one
//! collection-wide cursor, converting properties (E) alongside. Decode
//! reverses exactly, threading the same cursor back through.

use prost::Message;

use crate::delta::Cursor;
use crate::feature::Id;
use crate::flatten::{first_coordinate, flatten_geometry};
use crate::geometry::{Geometry, Value};
use crate::pb::{self, GeomType};
use crate::properties::{properties_to_struct, struct_to_properties};
use crate::quantize::{check_scale, dequantize, quantize};
use crate::unflatten::build_geometry;
use crate::{Error, Feature, FeatureCollection, GeometryCollection, Result};

fn encode_stream_geometry(geometry: &Geometry, scale: u32, cursor: &mut Cursor, path: &str) -> Result<pb::StreamGeometry> {
    if matches!(geometry.value, Value::GeometryCollection(_)) {
        return Err(Error::UnsupportedGeometryType {
            path: path.to_string(),
            found: "GeometryCollection".to_string(),
        });
    }

    let flattened = flatten_geometry(&geometry.value, path)?;

    let mut qpoints = Vec::with_capacity(flattened.points.len());
    for (i, &(x, y)) in flattened.points.iter().enumerate() {
        let point_path = format!("{path}.coordinates[{i}]");
        qpoints.push((
            quantize(x, scale, &point_path)?,
            quantize(y, scale, &point_path)?,
        ));
    }
    let dxy = crate::delta::encode_points(cursor, &qpoints);

    Ok(pb::StreamGeometry {
        r#type: flattened.geom_type as i32,
        part_sizes: flattened.part_sizes,
        poly_ring_counts: flattened.poly_ring_counts,
        dxy,
    })
}

fn decode_stream_geometry(sg: &pb::StreamGeometry, scale: u32, cursor: &mut Cursor, path: &str) -> Result<Geometry> {
    if sg.dxy.len() % 2 != 0 {
        return Err(Error::malformed_record(format!(
            "{path}: dxy stream has odd length"
        )));
    }
    let geom_type = GeomType::try_from(sg.r#type)
        .ok()
        .filter(|t| *t != GeomType::Unknown)
        .ok_or_else(|| Error::malformed_record(format!("{path}: unrecognized geometry type tag {}", sg.r#type)))?;

    let qpoints = crate::delta::decode_points(cursor, &sg.dxy);
    let points: Vec<(f64, f64)> = qpoints
        .iter()
        .map(|&(qx, qy)| (dequantize(qx, scale), dequantize(qy, scale)))
        .collect();

    let value = build_geometry(geom_type, &points, &sg.part_sizes, &sg.poly_ring_counts)?;
    Ok(Geometry::new(value))
}

fn extra_to_struct(extra: &Option<crate::JsonObject>, path: &str) -> Result<Option<pb::Struct>> {
    match extra {
        Some(map) if !map.is_empty() => Ok(Some(properties_to_struct(map, path)?)),
        _ => Ok(None),
    }
}

fn struct_to_extra(s: &Option<pb::Struct>) -> Option<crate::JsonObject> {
    match s {
        Some(s) if !s.fields.is_empty() => Some(struct_to_properties(s)),
        _ => None,
    }
}

/// Encodes a `FeatureCollection` to this crate's binary wire format.
///
/// `srid` is opaque and stored verbatim (`SPEC_FULL.md` §3); `0` means
/// "unspecified". `scale` must be positive.
pub fn encode_feature_collection(fc: &FeatureCollection, srid: u32, scale: u32) -> Result<Vec<u8>> {
    check_scale(scale)?;

    if fc.features.is_empty() {
        return Err(Error::EmptyFeatures {
            path: "$.features".to_string(),
        });
    }

    let first_geometry = fc.features[0]
        .geometry
        .as_ref()
        .ok_or_else(|| Error::MissingGeometry {
            path: "features[0]".to_string(),
        })?;
    let (ox, oy) = first_coordinate(&first_geometry.value, "features[0].geometry")?;
    let origin = (
        quantize(ox, scale, "features[0].geometry.coordinates[0]")?,
        quantize(oy, scale, "features[0].geometry.coordinates[0]")?,
    );
    let mut cursor = Cursor::new(origin.0, origin.1);

    let mut wire_features = Vec::with_capacity(fc.features.len());
    for (i, feature) in fc.features.iter().enumerate() {
        let path = format!("features[{i}]");
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| Error::MissingGeometry { path: path.clone() })?;
        let wire_geometry =
            encode_stream_geometry(geometry, scale, &mut cursor, &format!("{path}.geometry"))?;

        let properties = match &feature.properties {
            Some(p) => properties_to_struct(p, &format!("{path}.properties"))?,
            None => pb::Struct::default(),
        };

        log::trace!(target: "geocodec::codec", "encoded {path}");

        wire_features.push(pb::Feature {
            geometry: Some(wire_geometry),
            properties: Some(properties),
            id: feature
                .id
                .as_ref()
                .map(Id::to_codec_string)
                .unwrap_or_default(),
            bbox: feature.bbox.clone().unwrap_or_default(),
            extra: extra_to_struct(&feature.foreign_members, &path)?,
        });
    }

    let wire = pb::FeatureCollection {
        crs: Some(pb::Crs { srid, scale }),
        global_start: Some(pb::Point {
            x: origin.0,
            y: origin.1,
        }),
        features: wire_features,
        bbox: fc.bbox.clone().unwrap_or_default(),
        name: fc.name.clone().unwrap_or_default(),
        extra: extra_to_struct(&fc.foreign_members, "$")?,
    };

    log::debug!(
        target: "geocodec::codec",
        "encoded FeatureCollection: {} feature(s), scale={scale}, srid={srid}",
        fc.features.len(),
    );

    Ok(wire.encode_to_vec())
}

/// Decodes a `FeatureCollection` previously produced by
/// [`encode_feature_collection`]. The SRID stored in the wire's CRS record
/// is not reconstructed as a GeoJSON member (`SPEC_FULL.md` §9).
pub fn decode_feature_collection(bytes: &[u8]) -> Result<FeatureCollection> {
    let wire = pb::FeatureCollection::decode(bytes)
        .map_err(|e| Error::malformed_record(format!("invalid protobuf: {e}")))?;

    let crs = wire
        .crs
        .ok_or_else(|| Error::malformed_record("missing crs record"))?;
    check_scale(crs.scale)?;

    if wire.features.is_empty() {
        return Err(Error::EmptyFeatures {
            path: "$.features".to_string(),
        });
    }

    let origin = wire
        .global_start
        .ok_or_else(|| Error::malformed_record("missing global_start"))?;
    let mut cursor = Cursor::new(origin.x, origin.y);

    let mut features = Vec::with_capacity(wire.features.len());
    for (i, wf) in wire.features.iter().enumerate() {
        let path = format!("features[{i}]");
        let sg = wf.geometry.as_ref().ok_or_else(|| Error::MissingGeometry {
            path: path.clone(),
        })?;
        let geometry =
            decode_stream_geometry(sg, crs.scale, &mut cursor, &format!("{path}.geometry"))?;

        let properties = wf
            .properties
            .as_ref()
            .map(struct_to_properties)
            .filter(|p| !p.is_empty());

        features.push(Feature {
            bbox: (!wf.bbox.is_empty()).then(|| wf.bbox.clone()),
            geometry: Some(geometry),
            id: (!wf.id.is_empty()).then(|| Id::String(wf.id.clone())),
            properties,
            foreign_members: struct_to_extra(&wf.extra),
        });
    }

    log::debug!(
        target: "geocodec::codec",
        "decoded FeatureCollection: {} feature(s), scale={}",
        features.len(),
        crs.scale,
    );

    Ok(FeatureCollection {
        bbox: (!wire.bbox.is_empty()).then(|| wire.bbox.clone()),
        features,
        name: (!wire.name.is_empty()).then(|| wire.name.clone()),
        foreign_members: struct_to_extra(&wire.extra),
    })
}

/// Encodes a `GeometryCollection` to this crate's binary wire format.
/// Same contract as [`encode_feature_collection`] minus the feature
/// wrapper: no per-geometry id, properties, or bbox.
pub fn encode_geometry_collection(gc: &GeometryCollection, srid: u32, scale: u32) -> Result<Vec<u8>> {
    check_scale(scale)?;

    if gc.geometries.is_empty() {
        return Err(Error::EmptyGeometries {
            path: "$.geometries".to_string(),
        });
    }

    let (ox, oy) = first_coordinate(&gc.geometries[0].value, "geometries[0]")?;
    let origin = (
        quantize(ox, scale, "geometries[0].coordinates[0]")?,
        quantize(oy, scale, "geometries[0].coordinates[0]")?,
    );
    let mut cursor = Cursor::new(origin.0, origin.1);

    let mut wire_geometries = Vec::with_capacity(gc.geometries.len());
    for (i, geometry) in gc.geometries.iter().enumerate() {
        let path = format!("geometries[{i}]");
        wire_geometries.push(encode_stream_geometry(geometry, scale, &mut cursor, &path)?);
    }

    let wire = pb::GeometryCollection {
        crs: Some(pb::Crs { srid, scale }),
        global_start: Some(pb::Point {
            x: origin.0,
            y: origin.1,
        }),
        geometries: wire_geometries,
        bbox: gc.bbox.clone().unwrap_or_default(),
        extra: extra_to_struct(&gc.foreign_members, "$")?,
    };

    log::debug!(
        target: "geocodec::codec",
        "encoded GeometryCollection: {} geometries, scale={scale}, srid={srid}",
        gc.geometries.len(),
    );

    Ok(wire.encode_to_vec())
}

/// Decodes a `GeometryCollection` previously produced by
/// [`encode_geometry_collection`].
pub fn decode_geometry_collection(bytes: &[u8]) -> Result<GeometryCollection> {
    let wire = pb::GeometryCollection::decode(bytes)
        .map_err(|e| Error::malformed_record(format!("invalid protobuf: {e}")))?;

    let crs = wire
        .crs
        .ok_or_else(|| Error::malformed_record("missing crs record"))?;
    check_scale(crs.scale)?;

    if wire.geometries.is_empty() {
        return Err(Error::EmptyGeometries {
            path: "$.geometries".to_string(),
        });
    }

    let origin = wire
        .global_start
        .ok_or_else(|| Error::malformed_record("missing global_start"))?;
    let mut cursor = Cursor::new(origin.x, origin.y);

    let mut geometries = Vec::with_capacity(wire.geometries.len());
    for (i, sg) in wire.geometries.iter().enumerate() {
        let path = format!("geometries[{i}]");
        geometries.push(decode_stream_geometry(sg, crs.scale, &mut cursor, &path)?);
    }

    log::debug!(
        target: "geocodec::codec",
        "decoded GeometryCollection: {} geometries, scale={}",
        geometries.len(),
        crs.scale,
    );

    Ok(GeometryCollection {
        bbox: (!wire.bbox.is_empty()).then(|| wire.bbox.clone()),
        geometries,
        foreign_members: struct_to_extra(&wire.extra),
    })
}
