use tracing::debug;

use super::{BodyPart, LimbWidths, PoseConfig, PoseFrame};
use crate::math::Point2;

/// Last known position of every body part, plus limb widths.
///
/// Parts that drop out of a frame (missing or low confidence) keep their
/// previous coordinate. Parts never seen are `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackedPose {
    positions: [Option<Point2>; 17],
    widths: LimbWidths,
}

impl TrackedPose {
    /// Creates an empty pose with default limb widths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty pose with the given limb widths.
    #[must_use]
    pub fn with_widths(widths: LimbWidths) -> Self {
        Self {
            positions: [None; 17],
            widths,
        }
    }

    /// Folds a new estimation frame into the tracked pose.
    ///
    /// Returns the number of parts taken from the frame.
    pub fn update(&mut self, frame: &PoseFrame, config: &PoseConfig) -> usize {
        if !meets(frame.score, config.min_pose_confidence) {
            debug!(score = frame.score, "pose frame below confidence, ignored");
            return 0;
        }

        let mut updated = 0;
        for kp in &frame.keypoints {
            if !meets(kp.score, config.min_part_confidence) {
                continue;
            }
            let position = if config.flip_horizontal {
                Point2::new(config.frame_width - kp.position.x, kp.position.y)
            } else {
                kp.position
            };
            self.positions[kp.part.index()] = Some(position);
            updated += 1;
        }
        debug!(updated, total = frame.keypoints.len(), "pose frame applied");
        updated
    }

    /// Sets a part's position directly.
    pub fn set(&mut self, part: BodyPart, position: Point2) {
        self.positions[part.index()] = Some(position);
    }

    /// Returns the last known position of `part`.
    #[must_use]
    pub fn position(&self, part: BodyPart) -> Option<Point2> {
        self.positions[part.index()]
    }

    /// Returns all known positions, in part index order.
    #[must_use]
    pub fn known_points(&self) -> Vec<Point2> {
        self.positions.iter().flatten().copied().collect()
    }

    /// Returns the limb widths.
    #[must_use]
    pub fn widths(&self) -> &LimbWidths {
        &self.widths
    }

    /// Returns the limb widths for modification.
    pub fn widths_mut(&mut self) -> &mut LimbWidths {
        &mut self.widths
    }
}

/// `true` if `score` reaches `threshold`. NaN never does.
fn meets(score: f64, threshold: f64) -> bool {
    score >= threshold
}
