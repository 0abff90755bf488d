use super::{check_offset, PerpendicularPointPair};
use crate::error::Result;
use crate::math::primitives_2d::{left_normal, segment_direction};
use crate::math::{distance, Point2};

/// Splits an edge into the minimum number of equal-length sub-edges no longer
/// than `max_segment_length`.
///
/// A non-positive or non-finite `max_segment_length`, or one at least as long
/// as the edge, yields the edge itself as the only sub-edge. Otherwise the
/// sub-edge count is `ceil(len / max_segment_length)`, so every sub-edge is
/// at most `max_segment_length` long.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn subdivide_edge(
    edge_start: Point2,
    edge_end: Point2,
    max_segment_length: f64,
) -> Vec<(Point2, Point2)> {
    let len = distance(&edge_start, &edge_end);
    if !max_segment_length.is_finite() || max_segment_length <= 0.0 || max_segment_length >= len {
        return vec![(edge_start, edge_end)];
    }

    let count = ((len / max_segment_length).ceil() as usize).max(1);
    let step = (edge_end - edge_start) / count as f64;

    let mut out = Vec::with_capacity(count);
    let mut from = edge_start;
    for i in 1..=count {
        // Last sub-edge ends exactly on the edge endpoint.
        let to = if i == count {
            edge_end
        } else {
            edge_start + step * i as f64
        };
        out.push((from, to));
        from = to;
    }
    out
}

/// Computes the two points at `offset_distance` on either side of an edge,
/// on the perpendicular through the edge's midpoint.
///
/// The points are reflections of each other across the edge line.
/// `first` lies on the left of the direction `edge_start -> edge_end`.
///
/// # Errors
///
/// - `GeometryError::InvalidOffset` if `offset_distance` is not positive
/// - `GeometryError::DegenerateEdge` if the endpoints coincide
pub fn perpendicular_offset_points(
    edge_start: Point2,
    edge_end: Point2,
    offset_distance: f64,
) -> Result<PerpendicularPointPair> {
    check_offset(offset_distance)?;
    let normal = left_normal(segment_direction(&edge_start, &edge_end)?);
    let mid = nalgebra::center(&edge_start, &edge_end);
    let shift = normal * offset_distance;
    Ok(PerpendicularPointPair {
        first: mid + shift,
        second: mid - shift,
    })
}
