use super::Point2;
use crate::error::{GeometryError, Result};

/// Computes the vertex centroid (coordinate-wise mean) of a polygon.
///
/// This is the simple mean of the vertices, not the area-weighted centroid.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPolygon` if fewer than 3 points are given.
pub fn centroid(points: &[Point2]) -> Result<Point2> {
    if points.len() < 3 {
        return Err(GeometryError::InvalidPolygon {
            vertices: points.len(),
        }
        .into());
    }
    Ok(vertex_mean(points))
}

/// Coordinate-wise mean of a non-empty point set.
#[allow(clippy::cast_precision_loss)]
fn vertex_mean(points: &[Point2]) -> Point2 {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2::new(sx / n, sy / n)
}

/// A closed polygon: an ordered loop of at least 3 vertices.
///
/// The edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if fewer than 3 vertices are given.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                vertices: vertices.len(),
            }
            .into());
        }
        Ok(Self { vertices })
    }

    /// Creates an axis-aligned rectangle centred on `center`.
    ///
    /// Vertices run top-left, top-right, bottom-right, bottom-left in screen
    /// coordinates (y grows downwards).
    #[must_use]
    pub fn rectangle(center: Point2, width: f64, height: f64) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        Self {
            vertices: vec![
                Point2::new(center.x - hw, center.y - hh),
                Point2::new(center.x + hw, center.y - hh),
                Point2::new(center.x + hw, center.y + hh),
                Point2::new(center.x - hw, center.y + hh),
            ],
        }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the number of vertices (and edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a polygon has at least 3 vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the vertex centroid.
    #[must_use]
    pub fn centroid(&self) -> Point2 {
        vertex_mean(&self.vertices)
    }

    /// Computes the signed area (shoelace formula).
    ///
    /// Positive for counter-clockwise in a y-up frame, negative for clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = &self.vertices[i];
            let b = &self.vertices[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum * 0.5
    }

    /// Returns the `(min, max)` corners of the axis-aligned bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> (Point2, Point2) {
        let first = self.vertices[0];
        self.vertices[1..].iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        })
    }
}
