use crate::math::{Point2, Vector2};

slotmap::new_key_type! {
    /// Unique identifier for a tile in the tile store.
    pub struct TileId;
}

/// Density applied to tile area to derive mass.
pub const TILE_DENSITY: f64 = 0.001;

/// Everything needed to create a tile body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileDescriptor {
    /// Spawn location (body centre).
    pub position: Point2,
    /// Body angle in radians.
    pub angle: f64,
    /// Initial force applied on the first step.
    pub force: Vector2,
    pub width: f64,
    pub height: f64,
    /// Whether the tile collides with other tiles.
    pub collides: bool,
}

/// Data associated with a live tile.
#[derive(Debug, Clone)]
pub struct TileData {
    pub position: Point2,
    pub angle: f64,
    pub velocity: Vector2,
    /// Force accumulated since the last step.
    pub force: Vector2,
    pub width: f64,
    pub height: f64,
    pub collides: bool,
}

impl TileData {
    /// Creates a resting tile from a descriptor.
    #[must_use]
    pub fn new(descriptor: &TileDescriptor) -> Self {
        Self {
            position: descriptor.position,
            angle: descriptor.angle,
            velocity: Vector2::zeros(),
            force: descriptor.force,
            width: descriptor.width,
            height: descriptor.height,
            collides: descriptor.collides,
        }
    }

    /// Returns the tile's mass (area times [`TILE_DENSITY`]).
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.width * self.height * TILE_DENSITY
    }
}
