use super::{perpendicular_offset_points, subdivide_edge};
use super::{PerpendicularPointPair, SamplerParams};
use crate::error::Result;
use crate::math::Polygon;

/// Samples perpendicular point pairs around the perimeter of a polygon.
///
/// # Algorithm
///
/// 1. Walk the edges in order, wrapping last -> first
/// 2. Subdivide each edge into equal sub-edges no longer than the limit
/// 3. Emit one perpendicular pair per sub-edge, at the sub-edge midpoint
///
/// Output is ordered by edge, then by sub-edge within each edge. The
/// operation is pure: identical inputs give bit-identical output.
#[derive(Debug)]
pub struct PerimeterSampler {
    params: SamplerParams,
}

impl PerimeterSampler {
    /// Creates a new sampler.
    #[must_use]
    pub fn new(params: SamplerParams) -> Self {
        Self { params }
    }

    /// Returns the sampler parameters.
    #[must_use]
    pub fn params(&self) -> &SamplerParams {
        &self.params
    }

    /// Executes the sampling for `polygon`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateEdge` if two consecutive vertices coincide.
    pub fn execute(&self, polygon: &Polygon) -> Result<Vec<PerpendicularPointPair>> {
        let offset = self.params.offset_distance();
        let limit = self.params.max_segment_length();

        let mut pairs = Vec::with_capacity(polygon.len());
        for (start, end) in polygon.edges() {
            for (a, b) in subdivide_edge(start, end, limit) {
                pairs.push(perpendicular_offset_points(a, b, offset)?);
            }
        }
        Ok(pairs)
    }
}

/// Samples `polygon` with the given offset and sub-edge limit.
///
/// Shorthand for building a [`PerimeterSampler`] and executing it.
///
/// # Errors
///
/// - `GeometryError::InvalidOffset` if `offset_distance` is not positive
/// - `GeometryError::DegenerateEdge` if two consecutive vertices coincide
pub fn sample(
    polygon: &Polygon,
    offset_distance: f64,
    max_segment_length: f64,
) -> Result<Vec<PerpendicularPointPair>> {
    PerimeterSampler::new(SamplerParams::new(offset_distance, max_segment_length)?)
        .execute(polygon)
}
