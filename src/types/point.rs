//! Point and point cloud types

use nalgebra::Point3;
use std::fmt;

/// Intensity assigned to points whose source carries no intensity channel
pub const DEFAULT_INTENSITY: f32 = 1.0;

/// A single point with an intensity channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32, z: f32, intensity: f32) -> Self {
        Point { x, y, z, intensity }
    }

    /// Create a point with the default intensity of 1.0
    pub const fn from_xyz(x: f32, y: f32, z: f32) -> Self {
        Point::new(x, y, z, DEFAULT_INTENSITY)
    }

    /// Position of the point
    pub fn position(&self) -> Point3<f32> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Bitwise equality, treating NaNs with the same payload as equal
    pub fn bits_eq(&self, other: &Point) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
            && self.intensity.to_bits() == other.intensity.to_bits()
    }
}

impl From<[f32; 4]> for Point {
    fn from(v: [f32; 4]) -> Self {
        Point::new(v[0], v[1], v[2], v[3])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}) i={}", self.x, self.y, self.z, self.intensity)
    }
}

/// An ordered sequence of points
///
/// Order is kept so that a decode/encode cycle reproduces the source
/// record order; the analysis queries ignore it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    /// Create an empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty point cloud with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the cloud holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Consume the cloud and return its points
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for PointCloud {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointCloud {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
