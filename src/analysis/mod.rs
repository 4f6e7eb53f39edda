//! Geometric queries over a decoded point cloud
//!
//! All queries are pure functions of a borrowed [`PointCloud`](crate::PointCloud).

mod footprint;
mod measure;
mod oriented_box;

pub use footprint::{grid_cell, xy_footprint_area};
pub use measure::{
    measure, measure_raw, AnalysisConfiguration, Measurement, DEFAULT_FOOTPRINT_PRECISION,
};
pub use oriented_box::{oriented_box_point_count, OrientedBox};
