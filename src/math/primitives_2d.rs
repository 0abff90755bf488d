use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns the Euclidean distance between `a` and `b`.
///
/// NaN coordinates propagate to the result.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the angle (radians, in `(-PI, PI]`) of the directed line from `a` to `b`.
#[must_use]
pub fn angle_between(a: &Point2, b: &Point2) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Returns the point at `distance` from `origin` along direction `angle` (radians).
#[must_use]
pub fn point_at_angle(origin: &Point2, angle: f64, distance: f64) -> Point2 {
    Point2::new(
        origin.x + distance * angle.cos(),
        origin.y + distance * angle.sin(),
    )
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateEdge` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE || !len.is_finite() {
        return Err(GeometryError::DegenerateEdge { x: a.x, y: a.y }.into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
