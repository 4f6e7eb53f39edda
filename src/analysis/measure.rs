//! Footprint area and per-label point counts in one pass over a cloud

use super::footprint::xy_footprint_area;
use super::oriented_box::OrientedBox;
use crate::error::Result;
use crate::types::PointCloud;

/// Footprint precision used when none is configured (cells per unit)
pub const DEFAULT_FOOTPRINT_PRECISION: f32 = 0.08;

/// Configuration for [`measure`].
#[derive(Debug, Clone)]
pub struct AnalysisConfiguration {
    /// Grid cells per unit for the footprint area.
    ///
    /// Default: `0.08`.
    pub footprint_precision: f32,
}

impl Default for AnalysisConfiguration {
    fn default() -> Self {
        Self {
            footprint_precision: DEFAULT_FOOTPRINT_PRECISION,
        }
    }
}

/// Result of measuring a cloud against a set of labels
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Footprint area at the configured precision
    pub area: f32,
    /// Points inside each label, in label order
    pub label_counts: Vec<usize>,
}

/// Measure the footprint area and the point count of every label
pub fn measure(
    cloud: &PointCloud,
    labels: &[OrientedBox],
    config: &AnalysisConfiguration,
) -> Measurement {
    Measurement {
        area: xy_footprint_area(cloud, config.footprint_precision),
        label_counts: labels.iter().map(|label| label.count_points(cloud)).collect(),
    }
}

/// Like [`measure`], with each label given as its seven raw values
/// `[cx, cy, cz, height, width, depth, rotation]`.
///
/// Fails with `InvalidLabel` on the first label of the wrong length.
pub fn measure_raw<L: AsRef<[f32]>>(
    cloud: &PointCloud,
    labels: &[L],
    config: &AnalysisConfiguration,
) -> Result<Measurement> {
    let boxes = labels
        .iter()
        .map(|l| OrientedBox::try_from(l.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(measure(cloud, &boxes, config))
}
