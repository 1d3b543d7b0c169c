//! Planar points in a metric frame.

use crate::error::{Error, Result};

/// A 2D coordinate pair in a metric unit (e.g. metres in a UTM zone).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Easting / x.
    pub x: f64,
    /// Northing / y.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Uses `hypot`, so it neither overflows nor underflows for any finite pair whose
    /// distance is representable.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Whether `other` lies within `eps` of this point (inclusive).
    #[inline]
    pub fn within(&self, other: &Point, eps: f64) -> bool {
        self.distance(other) <= eps
    }

    /// Whether both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Reject NaN or infinite coordinates.
pub(crate) fn validate(points: &[Point]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(Error::InvalidInput {
            index,
            message: "coordinates must be finite",
        }),
        None => Ok(()),
    }
}
