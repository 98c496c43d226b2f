//! Quantizer (component A): scalar float <-> int conversion under a scale
//! factor. See `SPEC_FULL.md` §4.1.

use crate::{Error, Result};

/// Default scale: ~centimeter precision at WGS-84 latitudes.
pub const DEFAULT_SCALE: u32 = 10_000_000;

/// Checks `scale > 0`, the Quantizer's sole precondition.
pub fn check_scale(scale: u32) -> Result<()> {
    if scale == 0 {
        return Err(Error::InvalidScale(scale as i64));
    }
    Ok(())
}

/// `round(v * scale)`, using round-half-to-even so that repeated
/// round-trips through the same scale are stable.
///
/// Fails with `InvalidCoordinate` if the scaled value doesn't fit in `i64`
/// (at the default scale this only happens well beyond Earth's range) or
/// is non-finite.
pub fn quantize(v: f64, scale: u32, path: &str) -> Result<i64> {
    if !v.is_finite() {
        return Err(Error::InvalidCoordinate {
            path: path.to_string(),
        });
    }
    let scaled = v * scale as f64;
    let rounded = round_half_to_even(scaled);
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return Err(Error::InvalidCoordinate {
            path: path.to_string(),
        });
    }
    Ok(rounded as i64)
}

/// `q / scale`, exact float division.
pub fn dequantize(q: i64, scale: u32) -> f64 {
    q as f64 / scale as f64
}

/// Rounds to the nearest integer, ties to even.
///
/// `f64::round_ties_even` covers this on recent stdlibs, but we spell it
/// out so the rounding rule is visible at the call site and doesn't depend
/// on a specific MSRV.
fn round_half_to_even(x: f64) -> f64 {
    let floor = x.floor();
    let diff = x - floor;
    if diff < 0.5 {
        floor
    } else if diff > 0.5 {
        floor + 1.0
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantizes_exact_centimeter_values() {
        assert_eq!(quantize(4.9, DEFAULT_SCALE, "x").unwrap(), 49_000_000);
        assert_eq!(quantize(52.37, DEFAULT_SCALE, "y").unwrap(), 523_700_000);
    }

    #[test]
    fn round_trip_within_half_scale() {
        let scale = DEFAULT_SCALE;
        for v in [0.1, -0.1, 123.456789, -89.999999, 0.0] {
            let q = quantize(v, scale, "x").unwrap();
            let back = dequantize(q, scale);
            assert!((back - v).abs() <= 1.0 / (2.0 * scale as f64) + 1e-12);
        }
    }

    #[test]
    fn half_to_even_ties() {
        // 0.5 and 1.5 are exact in f64; scale = 1 makes the tie land exactly on .5.
        assert_eq!(round_half_to_even(0.5), 0.0);
        assert_eq!(round_half_to_even(1.5), 2.0);
        assert_eq!(round_half_to_even(2.5), 2.0);
        assert_eq!(round_half_to_even(-0.5), 0.0);
        assert_eq!(round_half_to_even(-1.5), -2.0);
    }

    #[test]
    fn zero_scale_is_invalid() {
        assert!(matches!(check_scale(0), Err(Error::InvalidScale(_))));
    }

    #[test]
    fn overflow_is_invalid_coordinate() {
        let huge = f64::MAX;
        assert!(matches!(
            quantize(huge, DEFAULT_SCALE, "x"),
            Err(Error::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn non_finite_is_invalid_coordinate() {
        assert!(matches!(
            quantize(f64::NAN, DEFAULT_SCALE, "x"),
            Err(Error::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            quantize(f64::INFINITY, DEFAULT_SCALE, "x"),
            Err(Error::InvalidCoordinate { .. })
        ));
    }
}
