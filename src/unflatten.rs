//! Geometry Builder (component C): the inverse of the Flattener. Walks the
//! decoded point stream with two cursors -- `pi` over `points`, `rsi` over
//! `part_sizes` -- reconstructing nested GeoJSON coordinate arrays per the
//! topology table in `flatten.rs`. See `SPEC_FULL.md` §4.2.

use crate::geometry::Value;
use crate::pb::GeomType;
use crate::position::Position;
use crate::{Error, Result};

fn pos(p: (f64, f64)) -> Position {
    Position::new(p.0, p.1)
}

fn take<'a>(points: &'a [(f64, f64)], pi: &mut usize, n: usize) -> Result<&'a [(f64, f64)]> {
    let end = pi
        .checked_add(n)
        .filter(|&end| end <= points.len())
        .ok_or_else(|| Error::malformed_record("part size exceeds remaining point stream"))?;
    let slice = &points[*pi..end];
    *pi = end;
    Ok(slice)
}

/// Rebuilds a ring from its stripped points, reappending the closing
/// coordinate dropped by the Flattener.
fn rebuild_ring(stripped: &[(f64, f64)]) -> Vec<Position> {
    let mut ring: Vec<Position> = stripped.iter().copied().map(pos).collect();
    if let Some(&first) = stripped.first() {
        ring.push(pos(first));
    }
    ring
}

pub fn build_geometry(
    geom_type: GeomType,
    points: &[(f64, f64)],
    part_sizes: &[u32],
    poly_ring_counts: &[u32],
) -> Result<Value> {
    let mut pi = 0usize;

    let value = match geom_type {
        GeomType::Point => {
            if points.len() != 1 || !part_sizes.is_empty() || !poly_ring_counts.is_empty() {
                return Err(Error::malformed_record(
                    "Point requires exactly one point and no part sizes",
                ));
            }
            Value::Point(pos(points[0]))
        }

        GeomType::Multipoint => {
            if part_sizes.len() != 1 || !poly_ring_counts.is_empty() {
                return Err(Error::malformed_record(
                    "MultiPoint requires exactly one part size entry",
                ));
            }
            let pts = take(points, &mut pi, part_sizes[0] as usize)?;
            Value::MultiPoint(pts.iter().copied().map(pos).collect())
        }

        GeomType::Linestring => {
            if part_sizes.len() != 1 || !poly_ring_counts.is_empty() {
                return Err(Error::malformed_record(
                    "LineString requires exactly one part size entry",
                ));
            }
            let pts = take(points, &mut pi, part_sizes[0] as usize)?;
            Value::LineString(pts.iter().copied().map(pos).collect())
        }

        GeomType::Multilinestring => {
            if part_sizes.is_empty() || !poly_ring_counts.is_empty() {
                return Err(Error::malformed_record(
                    "MultiLineString requires at least one part size entry",
                ));
            }
            let mut lines = Vec::with_capacity(part_sizes.len());
            for &size in part_sizes {
                let pts = take(points, &mut pi, size as usize)?;
                lines.push(pts.iter().copied().map(pos).collect());
            }
            Value::MultiLineString(lines)
        }

        GeomType::Polygon => {
            if part_sizes.is_empty() || !poly_ring_counts.is_empty() {
                return Err(Error::malformed_record(
                    "Polygon requires at least one ring"
                ));
            }
            let mut rings = Vec::with_capacity(part_sizes.len());
            for &size in part_sizes {
                let stripped = take(points, &mut pi, size as usize)?;
                rings.push(rebuild_ring(stripped));
            }
            Value::Polygon(rings)
        }

        GeomType::Multipolygon => {
            if poly_ring_counts.is_empty() {
                return Err(Error::malformed_record(
                    "MultiPolygon requires at least one polygon",
                ));
            }
            let mut rsi = 0usize;
            let mut polys = Vec::with_capacity(poly_ring_counts.len());
            for &ring_count in poly_ring_counts {
                let ring_count = ring_count as usize;
                if rsi + ring_count > part_sizes.len() {
                    return Err(Error::malformed_record(
                        "poly_ring_counts sum exceeds part_sizes length",
                    ));
                }
                let mut rings = Vec::with_capacity(ring_count);
                for &size in &part_sizes[rsi..rsi + ring_count] {
                    let stripped = take(points, &mut pi, size as usize)?;
                    rings.push(rebuild_ring(stripped));
                }
                rsi += ring_count;
                polys.push(rings);
            }
            if rsi != part_sizes.len() {
                return Err(Error::malformed_record(
                    "part_sizes has entries left over after consuming all polygons",
                ));
            }
            Value::MultiPolygon(polys)
        }
    };

    if pi != points.len() {
        return Err(Error::malformed_record(
            "point stream has leftover points after reconstructing the geometry",
        ));
    }

    Ok(value)
}
