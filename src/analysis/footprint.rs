//! Planar footprint area by grid-cell occupancy

use crate::types::PointCloud;
use ahash::AHashSet;

/// Grid cell of a point at `precision` cells per unit.
///
/// Coordinates are scaled in `f32` and truncated toward zero, so the cells
/// on either side of an axis (e.g. `-0.5` and `0.5` at precision 1) share
/// index 0.
#[inline]
pub fn grid_cell(x: f32, y: f32, precision: f32) -> (i64, i64) {
    ((x * precision) as i64, (y * precision) as i64)
}

/// Estimate the (x, y) area covered by the cloud.
///
/// Counts the distinct occupied cells of a grid with `precision` cells per
/// unit and returns `cells / precision²`. Higher precision gives a finer grid.
/// `precision` is expected to be finite and positive.
pub fn xy_footprint_area(cloud: &PointCloud, precision: f32) -> f32 {
    let cells: AHashSet<(i64, i64)> = cloud
        .iter()
        .map(|p| grid_cell(p.x, p.y, precision))
        .collect();
    cells.len() as f32 / precision / precision
}

impl PointCloud {
    /// See [`xy_footprint_area`]
    pub fn xy_area(&self, precision: f32) -> f32 {
        xy_footprint_area(self, precision)
    }
}
