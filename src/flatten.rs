//! Geometry Flattener (component B): GeoJSON geometry -> (type tag, flat
//! points, part sizes, poly-ring counts). See `SPEC_FULL.md` §4.2.
//!
//! Driven by the same topology table for all six accepted variants:
//!
//! | Type            | part_sizes\[i\] means         | poly_ring_counts   |
//! |------------------|-------------------------------|---------------------|
//! | Point            | (empty)                       | (empty)             |
//! | MultiPoint       | point count (one entry)       | (empty)             |
//! | LineString       | point count (one entry)       | (empty)             |
//! | MultiLineString  | points per line `i`            | (empty)             |
//! | Polygon          | points per ring `i` (closure stripped) | (empty)    |
//! | MultiPolygon     | points per ring, flattened across polygons | rings per polygon `i` |

use crate::geometry::Value;
use crate::pb::GeomType;
use crate::position::Position;
use crate::{Error, Result};

pub struct Flattened {
    pub geom_type: GeomType,
    pub points: Vec<(f64, f64)>,
    pub part_sizes: Vec<u32>,
    pub poly_ring_counts: Vec<u32>,
}

fn pos_xy(p: &Position) -> (f64, f64) {
    (p.x(), p.y())
}

/// Drops a ring's closing coordinate when it duplicates the first, per the
/// closure policy in `SPEC_FULL.md` §4.2. A ring of length < 2 is returned
/// unchanged -- malformed input is echoed back, not rejected, per spec.
fn strip_closure(ring: &[Position]) -> &[Position] {
    if ring.len() >= 2 {
        let first = &ring[0];
        let last = &ring[ring.len() - 1];
        if first.x() == last.x() && first.y() == last.y() {
            return &ring[..ring.len() - 1];
        }
    }
    ring
}

pub fn flatten_geometry(value: &Value, path: &str) -> Result<Flattened> {
    match value {
        Value::Point(p) => Ok(Flattened {
            geom_type: GeomType::Point,
            points: vec![pos_xy(p)],
            part_sizes: vec![],
            poly_ring_counts: vec![],
        }),

        Value::MultiPoint(pts) => {
            if pts.is_empty() {
                return Err(Error::EmptyGeometry {
                    path: path.to_string(),
                });
            }
            Ok(Flattened {
                geom_type: GeomType::Multipoint,
                points: pts.iter().map(pos_xy).collect(),
                part_sizes: vec![pts.len() as u32],
                poly_ring_counts: vec![],
            })
        }

        Value::LineString(pts) => {
            if pts.is_empty() {
                return Err(Error::EmptyGeometry {
                    path: path.to_string(),
                });
            }
            Ok(Flattened {
                geom_type: GeomType::Linestring,
                points: pts.iter().map(pos_xy).collect(),
                part_sizes: vec![pts.len() as u32],
                poly_ring_counts: vec![],
            })
        }

        Value::MultiLineString(lines) => {
            if lines.is_empty() {
                return Err(Error::EmptyGeometry {
                    path: path.to_string(),
                });
            }
            let mut points = Vec::new();
            let mut part_sizes = Vec::with_capacity(lines.len());
            for line in lines {
                part_sizes.push(line.len() as u32);
                points.extend(line.iter().map(pos_xy));
            }
            Ok(Flattened {
                geom_type: GeomType::Multilinestring,
                points,
                part_sizes,
                poly_ring_counts: vec![],
            })
        }

        Value::Polygon(rings) => {
            let mut points = Vec::new();
            let mut part_sizes = Vec::with_capacity(rings.len());
            for ring in rings {
                let stripped = strip_closure(ring);
                part_sizes.push(stripped.len() as u32);
                points.extend(stripped.iter().map(pos_xy));
            }
            Ok(Flattened {
                geom_type: GeomType::Polygon,
                points,
                part_sizes,
                poly_ring_counts: vec![],
            })
        }

        Value::MultiPolygon(polys) => {
            if polys.is_empty() {
                return Err(Error::EmptyGeometry {
                    path: path.to_string(),
                });
            }
            let mut points = Vec::new();
            let mut part_sizes = Vec::new();
            let mut poly_ring_counts = Vec::with_capacity(polys.len());
            for poly in polys {
                poly_ring_counts.push(poly.len() as u32);
                for ring in poly {
                    let stripped = strip_closure(ring);
                    part_sizes.push(stripped.len() as u32);
                    points.extend(stripped.iter().map(pos_xy));
                }
            }
            Ok(Flattened {
                geom_type: GeomType::Multipolygon,
                points,
                part_sizes,
                poly_ring_counts,
            })
        }

        Value::GeometryCollection(_) => Err(Error::UnsupportedGeometryType {
            path: path.to_string(),
            found: "GeometryCollection".to_string(),
        }),
    }
}

/// The first coordinate of a geometry, used to derive a collection's origin
/// (`SPEC_FULL.md` §3). Does not require a full flatten.
pub fn first_coordinate(value: &Value, path: &str) -> Result<(f64, f64)> {
    match value {
        Value::Point(p) => Ok(pos_xy(p)),
        Value::MultiPoint(pts) | Value::LineString(pts) => pts
            .first()
            .map(pos_xy)
            .ok_or_else(|| Error::EmptyGeometry {
                path: path.to_string(),
            }),
        Value::MultiLineString(lines) | Value::Polygon(lines) => lines
            .first()
            .and_then(|l| l.first())
            .map(pos_xy)
            .ok_or_else(|| Error::EmptyGeometry {
                path: path.to_string(),
            }),
        Value::MultiPolygon(polys) => polys
            .first()
            .and_then(|p| p.first())
            .and_then(|r| r.first())
            .map(pos_xy)
            .ok_or_else(|| Error::EmptyGeometry {
                path: path.to_string(),
            }),
        Value::GeometryCollection(_) => Err(Error::UnsupportedGeometryType {
            path: path.to_string(),
            found: "GeometryCollection".to_string(),
        }),
    }
}
