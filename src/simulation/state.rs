use crate::error::Result;
use crate::math::{Point2, Polygon};
use crate::pose::TrackedPose;

/// Where each spawn cycle gets its silhouette polygons from.
#[derive(Debug, Clone, PartialEq)]
pub enum SilhouetteSource {
    /// A fixed rectangle standing in for a person.
    Rectangle {
        center: Point2,
        width: f64,
        height: f64,
    },
    /// The padded bounding rectangle of the tracked pose.
    PoseBounds { padding: f64 },
    /// Torso plus one quad per limb of the tracked pose.
    Skeleton,
}

impl Default for SilhouetteSource {
    fn default() -> Self {
        SilhouetteSource::Rectangle {
            center: Point2::new(600.0, 300.0),
            width: 100.0,
            height: 300.0,
        }
    }
}

/// Everything that evolves between spawn cycles.
///
/// Owned by the orchestrator and lent to each cycle; the sampling code
/// itself holds no state.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    pub pose: TrackedPose,
    pub source: SilhouetteSource,
}

impl SimulationState {
    /// Creates a state with an empty pose and the given source.
    #[must_use]
    pub fn new(source: SilhouetteSource) -> Self {
        Self {
            pose: TrackedPose::new(),
            source,
        }
    }

    /// Builds this cycle's silhouette polygons.
    ///
    /// Each entry fails independently so one bad body part does not cost
    /// the whole cycle.
    #[must_use]
    pub fn silhouettes(&self) -> Vec<Result<Polygon>> {
        match &self.source {
            SilhouetteSource::Rectangle {
                center,
                width,
                height,
            } => vec![Ok(Polygon::rectangle(*center, *width, *height))],
            SilhouetteSource::PoseBounds { padding } => {
                vec![self.pose.bounding_polygon(*padding)]
            }
            SilhouetteSource::Skeleton => {
                let mut polys = vec![self.pose.torso_polygon()];
                polys.extend(self.pose.limb_polygons());
                polys
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pose::BodyPart;

    #[test]
    fn default_source_is_centered_rectangle() {
        let state = SimulationState::default();
        let polys = state.silhouettes();
        assert_eq!(polys.len(), 1);
        let rect = polys.into_iter().next().unwrap().unwrap();
        assert_eq!(rect.centroid(), Point2::new(600.0, 300.0));
    }

    #[test]
    fn pose_bounds_without_pose_fails() {
        let state = SimulationState::new(SilhouetteSource::PoseBounds { padding: 10.0 });
        let polys = state.silhouettes();
        assert_eq!(polys.len(), 1);
        assert!(polys[0].is_err());
    }

    #[test]
    fn skeleton_yields_torso_and_known_limbs() {
        let mut state = SimulationState::new(SilhouetteSource::Skeleton);
        state.pose.set(BodyPart::LeftShoulder, Point2::new(0.0, 0.0));
        state.pose.set(BodyPart::RightShoulder, Point2::new(40.0, 0.0));
        state.pose.set(BodyPart::RightHip, Point2::new(35.0, 60.0));
        state.pose.set(BodyPart::LeftHip, Point2::new(5.0, 60.0));
        state.pose.set(BodyPart::LeftElbow, Point2::new(-10.0, 30.0));
        let polys = state.silhouettes();
        // torso + left upper arm
        assert_eq!(polys.len(), 2);
        assert!(polys.iter().all(std::result::Result::is_ok));
    }
}
