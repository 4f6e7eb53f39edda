//! Core point cloud types

mod field;
mod header;
mod point;

pub use field::{FieldLayout, FieldSlot, FieldSpec, FieldType};
pub use header::{DataEncoding, PcdHeader, PCD_VERSION};
pub use point::{Point, PointCloud, DEFAULT_INTENSITY};
