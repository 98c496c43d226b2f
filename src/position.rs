//! Positions: the coordinate arrays GeoJSON nests geometry out of.
//!
//! [GeoJSON Format Specification § 3.1.1](https://tools.ietf.org/html/rfc7946#section-3.1.1)

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A single coordinate, `[x, y]` or `[x, y, z, ...]`.
///
/// The codec (component B, the Flattener) only ever reads ordinates 0 and 1;
/// anything past that is retained here but silently dropped on encode, per
/// `SPEC_FULL.md` §4.2's mixed-dimension rule.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(Vec<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position(vec![x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Position {
    fn from(value: Vec<f64>) -> Self {
        Position(value)
    }
}

impl From<[f64; 2]> for Position {
    fn from(value: [f64; 2]) -> Self {
        Position(value.to_vec())
    }
}

impl From<(f64, f64)> for Position {
    fn from(value: (f64, f64)) -> Self {
        Position::new(value.0, value.1)
    }
}

impl<I> Index<I> for Position
where
    I: std::slice::SliceIndex<[f64]>,
{
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<I> IndexMut<I> for Position
where
    I: std::slice::SliceIndex<[f64]>,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// A GeoJSON bounding box: 4 (2D) or 6 (3D) numbers, `[min, ..., max, ...]`.
///
/// [GeoJSON Format Specification § 5](https://tools.ietf.org/html/rfc7946#section-5)
pub type Bbox = Vec<f64>;

pub(crate) fn valid_bbox_len(bbox: &[f64]) -> bool {
    matches!(bbox.len(), 4 | 6)
}
