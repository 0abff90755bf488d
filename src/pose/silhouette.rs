use super::{BodyPart, TrackedPose};
use crate::error::{GeometryError, Result};
use crate::math::primitives_2d::{left_normal, segment_direction};
use crate::math::{Point2, Polygon};

/// A limb segment between two tracked joints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limb {
    LeftUpperArm,
    LeftForearm,
    LeftThigh,
    LeftShin,
    RightUpperArm,
    RightForearm,
    RightThigh,
    RightShin,
}

/// All limbs, in the order [`TrackedPose::limb_polygons`] emits them.
pub const LIMBS: [Limb; 8] = [
    Limb::LeftUpperArm,
    Limb::LeftForearm,
    Limb::LeftThigh,
    Limb::LeftShin,
    Limb::RightUpperArm,
    Limb::RightForearm,
    Limb::RightThigh,
    Limb::RightShin,
];

impl Limb {
    /// Returns the `(from, to)` joints of this limb.
    #[must_use]
    pub fn joints(self) -> (BodyPart, BodyPart) {
        match self {
            Limb::LeftUpperArm => (BodyPart::LeftShoulder, BodyPart::LeftElbow),
            Limb::LeftForearm => (BodyPart::LeftElbow, BodyPart::LeftWrist),
            Limb::LeftThigh => (BodyPart::LeftHip, BodyPart::LeftKnee),
            Limb::LeftShin => (BodyPart::LeftKnee, BodyPart::LeftAnkle),
            Limb::RightUpperArm => (BodyPart::RightShoulder, BodyPart::RightElbow),
            Limb::RightForearm => (BodyPart::RightElbow, BodyPart::RightWrist),
            Limb::RightThigh => (BodyPart::RightHip, BodyPart::RightKnee),
            Limb::RightShin => (BodyPart::RightKnee, BodyPart::RightAnkle),
        }
    }
}

/// Thickness of each limb segment, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbWidths {
    widths: [f64; 8],
}

impl Default for LimbWidths {
    fn default() -> Self {
        Self { widths: [10.0; 8] }
    }
}

impl LimbWidths {
    /// Returns the width of `limb`.
    #[must_use]
    pub fn width(&self, limb: Limb) -> f64 {
        self.widths[limb as usize]
    }

    /// Sets the width of `limb`.
    pub fn set(&mut self, limb: Limb, width: f64) {
        self.widths[limb as usize] = width;
    }
}

/// Builds the quad covering a segment of the given width.
fn segment_quad(from: Point2, to: Point2, width: f64) -> Result<Polygon> {
    let side = left_normal(segment_direction(&from, &to)?) * (width * 0.5);
    Polygon::new(vec![from + side, to + side, to - side, from - side])
}

impl TrackedPose {
    /// Returns the axis-aligned rectangle around every known part, grown by
    /// `padding` on each side.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if no part is known yet.
    pub fn bounding_polygon(&self, padding: f64) -> Result<Polygon> {
        let points = self.known_points();
        let Some(first) = points.first().copied() else {
            return Err(GeometryError::InvalidPolygon { vertices: 0 }.into());
        };
        let (lo, hi) = points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Ok(Polygon::rectangle(
            nalgebra::center(&lo, &hi),
            hi.x - lo.x + 2.0 * padding,
            hi.y - lo.y + 2.0 * padding,
        ))
    }

    /// Returns the torso quad: left shoulder, right shoulder, right hip, left hip.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPolygon` if any of the four joints is unknown.
    pub fn torso_polygon(&self) -> Result<Polygon> {
        let corners: Vec<Point2> = [
            BodyPart::LeftShoulder,
            BodyPart::RightShoulder,
            BodyPart::RightHip,
            BodyPart::LeftHip,
        ]
        .into_iter()
        .filter_map(|part| self.position(part))
        .collect();
        if corners.len() < 4 {
            return Err(GeometryError::InvalidPolygon {
                vertices: corners.len(),
            }
            .into());
        }
        Polygon::new(corners)
    }

    /// Returns one quad per limb whose two joints are both known.
    ///
    /// A limb whose joints coincide yields a `DegenerateEdge` entry rather
    /// than being dropped, so callers can count it.
    #[must_use]
    pub fn limb_polygons(&self) -> Vec<Result<Polygon>> {
        LIMBS
            .into_iter()
            .filter_map(|limb| {
                let (from, to) = limb.joints();
                let (from, to) = (self.position(from)?, self.position(to)?);
                Some(segment_quad(from, to, self.widths().width(limb)))
            })
            .collect()
    }
}
