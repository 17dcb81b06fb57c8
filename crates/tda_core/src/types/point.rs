//! Two-dimensional points and the immutable point set.

use serde::{Deserialize, Serialize};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at polar coordinates `(r, theta)` around the origin.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Euclidean norm `sqrt(x^2 + y^2)`.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Parameters a [`PointSet`] was sampled with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleOrigin {
    /// Seed of the generator.
    pub seed: u64,
    /// Radius of the sampling disk.
    pub radius_limit: f64,
}

/// An ordered, immutable sequence of points.
///
/// Order carries no meaning beyond reproducibility. Once built the set is
/// only ever read; figures borrow it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSet {
    points: Vec<Point2D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    origin: Option<SampleOrigin>,
}

impl PointSet {
    /// Wrap explicit points, e.g. fixtures or externally loaded data.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self {
            points,
            origin: None,
        }
    }

    pub(crate) fn sampled(points: Vec<Point2D>, origin: SampleOrigin) -> Self {
        Self {
            points,
            origin: Some(origin),
        }
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    /// Borrow the points as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Point2D] {
        &self.points
    }

    /// All x coordinates, in order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// All y coordinates, in order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Largest distance from the origin, `0.0` for an empty set.
    pub fn max_norm(&self) -> f64 {
        self.points.iter().map(Point2D::norm).fold(0.0, f64::max)
    }

    /// Sampling parameters, if the set came from a `PointSource`.
    #[inline]
    pub fn origin(&self) -> Option<SampleOrigin> {
        self.origin
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
