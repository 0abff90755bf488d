use std::f64::consts::FRAC_PI_2;

use super::{PerimeterSampler, PerpendicularPointPair, SamplerParams};
use crate::error::{GeometryError, Result};
use crate::math::{angle_between, distance, Point2, Polygon, Vector2};

/// Where and how to spawn one tile: a location, a body angle and a unit push.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnDirective {
    /// Spawn location (the outward candidate of the pair).
    pub position: Point2,
    /// Body angle in radians: the inward direction turned a quarter turn,
    /// which lays the tile parallel to the edge it came from.
    pub angle: f64,
    /// Unit vector from the inward candidate to the outward candidate.
    pub force: Vector2,
}

impl SpawnDirective {
    /// Applies the outward selection policy to a pair.
    ///
    /// The outward point is the candidate farther from `centroid`; on a tie
    /// `pair.first` wins.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the two candidates coincide.
    pub fn from_pair(pair: &PerpendicularPointPair, centroid: &Point2) -> Result<Self> {
        let (outward, inward) = if distance(&pair.second, centroid) > distance(&pair.first, centroid)
        {
            (pair.second, pair.first)
        } else {
            (pair.first, pair.second)
        };

        let force = (outward - inward)
            .try_normalize(0.0)
            .ok_or(GeometryError::ZeroVector)?;

        Ok(Self {
            position: outward,
            angle: angle_between(&outward, &inward) + FRAC_PI_2,
            force,
        })
    }
}

/// Samples `polygon` and resolves every pair into a [`SpawnDirective`]
/// relative to the polygon's vertex centroid.
///
/// # Errors
///
/// Propagates sampling errors (`DegenerateEdge`) and `ZeroVector` from
/// [`SpawnDirective::from_pair`].
pub fn spawn_directives(polygon: &Polygon, params: SamplerParams) -> Result<Vec<SpawnDirective>> {
    let centroid = polygon.centroid();
    PerimeterSampler::new(params)
        .execute(polygon)?
        .iter()
        .map(|pair| SpawnDirective::from_pair(pair, &centroid))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn picks_farther_point() {
        let pair = PerpendicularPointPair {
            first: Point2::new(5.0, 1.0),
            second: Point2::new(5.0, -1.0),
        };
        let d = SpawnDirective::from_pair(&pair, &Point2::new(5.0, 5.0)).unwrap();
        assert_eq!(d.position, Point2::new(5.0, -1.0));
        assert_relative_eq!(d.force.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.force.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn tie_picks_first() {
        let pair = PerpendicularPointPair {
            first: Point2::new(1.0, 0.0),
            second: Point2::new(-1.0, 0.0),
        };
        let d = SpawnDirective::from_pair(&pair, &Point2::new(0.0, 0.0)).unwrap();
        assert_eq!(d.position, pair.first);
    }

    #[test]
    fn coincident_candidates_fail() {
        let p = Point2::new(3.0, 3.0);
        let pair = PerpendicularPointPair { first: p, second: p };
        assert!(SpawnDirective::from_pair(&pair, &Point2::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn angle_lies_along_edge() {
        // Bottom edge of the square: inward is straight up (+y), so the body
        // angle is PI/2 + PI/2 = PI, parallel to the x axis.
        let pair = PerpendicularPointPair {
            first: Point2::new(5.0, 1.0),
            second: Point2::new(5.0, -1.0),
        };
        let d = SpawnDirective::from_pair(&pair, &Point2::new(5.0, 5.0)).unwrap();
        assert_relative_eq!(d.angle, PI, epsilon = 1e-12);
        let along = Vector2::new(d.angle.cos(), d.angle.sin());
        assert_relative_eq!(along.dot(&d.force), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn square_directives_push_away_from_centroid() {
        let params = SamplerParams::new(1.0, 20.0).unwrap();
        let directives = spawn_directives(&square(), params).unwrap();
        assert_eq!(directives.len(), 4);
        let c = Point2::new(5.0, 5.0);
        for d in &directives {
            assert_relative_eq!(distance(&d.position, &c), 6.0, epsilon = 1e-9);
            assert_relative_eq!(d.force.norm(), 1.0, epsilon = 1e-12);
            // Pushing along the force moves the tile farther from the body.
            let pushed = d.position + d.force;
            assert!(distance(&pushed, &c) > distance(&d.position, &c));
        }
    }

    #[test]
    fn winding_does_not_change_outward_choice() {
        let mut pts = square().vertices().to_vec();
        pts.reverse();
        let cw = Polygon::new(pts).unwrap();
        let params = SamplerParams::new(2.0, 20.0).unwrap();
        let c = cw.centroid();
        for d in spawn_directives(&cw, params).unwrap() {
            assert_relative_eq!(distance(&d.position, &c), 7.0, epsilon = 1e-9);
        }
    }
}
