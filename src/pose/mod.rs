mod silhouette;
mod tracked;

pub use silhouette::{Limb, LimbWidths, LIMBS};
pub use tracked::TrackedPose;

use crate::error::{PoseError, Result};
use crate::math::Point2;

/// One of the 17 keypoints reported by a PoseNet-style estimator.
///
/// Wrists stand in for hands and ankles for feet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl BodyPart {
    /// All parts in estimator index order.
    pub const ALL: [BodyPart; 17] = [
        BodyPart::Nose,
        BodyPart::LeftEye,
        BodyPart::RightEye,
        BodyPart::LeftEar,
        BodyPart::RightEar,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
    ];

    /// Returns the estimator's index for this part.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the estimator's camelCase name, e.g. `"leftShoulder"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BodyPart::Nose => "nose",
            BodyPart::LeftEye => "leftEye",
            BodyPart::RightEye => "rightEye",
            BodyPart::LeftEar => "leftEar",
            BodyPart::RightEar => "rightEar",
            BodyPart::LeftShoulder => "leftShoulder",
            BodyPart::RightShoulder => "rightShoulder",
            BodyPart::LeftElbow => "leftElbow",
            BodyPart::RightElbow => "rightElbow",
            BodyPart::LeftWrist => "leftWrist",
            BodyPart::RightWrist => "rightWrist",
            BodyPart::LeftHip => "leftHip",
            BodyPart::RightHip => "rightHip",
            BodyPart::LeftKnee => "leftKnee",
            BodyPart::RightKnee => "rightKnee",
            BodyPart::LeftAnkle => "leftAnkle",
            BodyPart::RightAnkle => "rightAnkle",
        }
    }

    /// Parses an estimator part name.
    ///
    /// # Errors
    ///
    /// Returns `PoseError::UnknownPart` if the name is not recognised.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|part| part.name() == name)
            .ok_or_else(|| PoseError::UnknownPart(name.to_owned()).into())
    }
}

/// A single estimated keypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    pub part: BodyPart,
    pub position: Point2,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

/// One estimation result for a single person.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoseFrame {
    /// Overall pose confidence in `[0, 1]`.
    pub score: f64,
    pub keypoints: Vec<Keypoint>,
}

/// Filtering applied when feeding frames into a [`TrackedPose`].
#[derive(Debug, Clone, Copy)]
pub struct PoseConfig {
    /// Frames scoring below this are ignored entirely.
    pub min_pose_confidence: f64,
    /// Keypoints scoring below this are ignored.
    pub min_part_confidence: f64,
    /// Mirror frames horizontally (webcam selfie view).
    pub flip_horizontal: bool,
    /// Width of the estimator's input frame, used for mirroring.
    pub frame_width: f64,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            min_pose_confidence: 0.5,
            min_part_confidence: 0.5,
            flip_horizontal: true,
            frame_width: 640.0,
        }
    }
}

impl PoseConfig {
    /// Checks that both confidence thresholds lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `PoseError::InvalidConfidence` for the first threshold out of range.
    pub fn validate(&self) -> Result<()> {
        for threshold in [self.min_pose_confidence, self.min_part_confidence] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(PoseError::InvalidConfidence(threshold).into());
            }
        }
        Ok(())
    }
}
