pub mod polygon_2d;
pub mod primitives_2d;

pub use polygon_2d::{centroid, Polygon};
pub use primitives_2d::{angle_between, distance, point_at_angle};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
