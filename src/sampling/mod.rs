mod edge;
mod outward;
mod perimeter;

pub use edge::{perpendicular_offset_points, subdivide_edge};
pub use outward::{spawn_directives, SpawnDirective};
pub use perimeter::{sample, PerimeterSampler};

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Two points on a line perpendicular to a (sub-)edge, one on each side,
/// each `offset_distance` away from the edge line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerpendicularPointPair {
    /// Candidate on the left of the edge's walking direction.
    pub first: Point2,
    /// Candidate on the right of the edge's walking direction.
    pub second: Point2,
}

/// Parameters controlling perimeter sampling.
#[derive(Debug, Clone, Copy)]
pub struct SamplerParams {
    offset_distance: f64,
    max_segment_length: f64,
}

impl SamplerParams {
    /// Creates sampler parameters.
    ///
    /// A non-positive `max_segment_length` disables subdivision.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOffset` if `offset_distance` is not positive.
    pub fn new(offset_distance: f64, max_segment_length: f64) -> Result<Self> {
        check_offset(offset_distance)?;
        Ok(Self {
            offset_distance,
            max_segment_length,
        })
    }

    /// Returns the perpendicular offset distance.
    #[must_use]
    pub fn offset_distance(&self) -> f64 {
        self.offset_distance
    }

    /// Returns the maximum sub-edge length.
    #[must_use]
    pub fn max_segment_length(&self) -> f64 {
        self.max_segment_length
    }
}

fn check_offset(distance: f64) -> Result<()> {
    // NaN fails the comparison too.
    if distance > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidOffset { distance }.into())
    }
}
