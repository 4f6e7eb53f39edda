//! Point counts inside a box rotated about the z axis
//!
//! The test is a 2-D rotated rectangle on the (x, y) plane combined with an
//! independent z slab: a point is inside when
//!
//! - `|z - cz| <= depth / 2`,
//! - its distance to the line through the center along `rotation` is at most
//!   `height / 2`, and
//! - its distance to the line through the center along `rotation + π/2` is at
//!   most `width / 2`.

use crate::error::{PcdError, Result};
use crate::types::{Point, PointCloud};
use nalgebra::Point3;
use std::f32::consts::FRAC_PI_2;

/// A box centered at `center`, rotated by `rotation` radians about z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    pub center: Point3<f32>,
    /// Extent across the `rotation` axis
    pub height: f32,
    /// Extent across the `rotation + π/2` axis
    pub width: f32,
    /// Extent along z
    pub depth: f32,
    pub rotation: f32,
}

/// Distance from `(x, y)` to the line through `(cx, cy)` with direction `theta`
#[inline]
fn line_distance(theta: f64, x: f64, y: f64, cx: f64, cy: f64) -> f64 {
    let (sin, cos) = theta.sin_cos();
    (-sin * x + cos * y + (sin * cx - cos * cy)).abs()
}

impl OrientedBox {
    pub fn new(
        cx: f32,
        cy: f32,
        cz: f32,
        height: f32,
        width: f32,
        depth: f32,
        rotation: f32,
    ) -> Self {
        Self {
            center: Point3::new(cx, cy, cz),
            height,
            width,
            depth,
            rotation,
        }
    }

    /// Check the z slab only
    pub fn contains_z(&self, z: f32) -> bool {
        let half = self.depth / 2.0;
        !(z > self.center.z + half || z < self.center.z - half)
    }

    /// Check whether `point` is inside the box
    pub fn contains(&self, point: &Point) -> bool {
        if !self.contains_z(point.z) {
            return false;
        }

        let (x, y) = (f64::from(point.x), f64::from(point.y));
        let (cx, cy) = (f64::from(self.center.x), f64::from(self.center.y));

        // The second axis angle is summed in f32 before widening.
        let d1 = line_distance(f64::from(self.rotation), x, y, cx, cy);
        let d2 = line_distance(f64::from(self.rotation + FRAC_PI_2), x, y, cx, cy);

        !(d1 > f64::from(self.height) / 2.0 || d2 > f64::from(self.width) / 2.0)
    }

    /// Number of points of `cloud` inside the box
    pub fn count_points(&self, cloud: &PointCloud) -> usize {
        cloud.iter().filter(|p| self.contains(p)).count()
    }
}

impl TryFrom<&[f32]> for OrientedBox {
    type Error = PcdError;

    /// `[cx, cy, cz, height, width, depth, rotation]`
    fn try_from(values: &[f32]) -> Result<Self> {
        match *values {
            [cx, cy, cz, height, width, depth, rotation] => {
                Ok(OrientedBox::new(cx, cy, cz, height, width, depth, rotation))
            }
            _ => Err(PcdError::InvalidLabel(values.len())),
        }
    }
}

/// Count the points inside a box centered at `(cx, cy, cz)` and rotated by
/// `rotation` radians about z. See [`OrientedBox`].
#[allow(clippy::too_many_arguments)]
pub fn oriented_box_point_count(
    cloud: &PointCloud,
    cx: f32,
    cy: f32,
    cz: f32,
    height: f32,
    width: f32,
    depth: f32,
    rotation: f32,
) -> usize {
    OrientedBox::new(cx, cy, cz, height, width, depth, rotation).count_points(cloud)
}
