mod tile;

pub use tile::{TileData, TileDescriptor, TileId, TILE_DENSITY};

use crate::error::{Result, SimulationError};
use crate::math::{Point2, Vector2};
use slotmap::SlotMap;

/// The rigid-body world that spawned tiles live in.
///
/// The simulation layer only creates tiles, reads their positions and
/// removes them; integration and collision belong to the implementor.
pub trait PhysicsWorld {
    /// Handle for a body owned by the world.
    type BodyId: Copy;

    /// Creates a tile body and returns its handle.
    fn add_tile(&mut self, descriptor: TileDescriptor) -> Self::BodyId;

    /// Removes a tile body.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::TileNotFound` if the body does not exist.
    fn remove_tile(&mut self, id: Self::BodyId) -> Result<()>;

    /// Returns the current position of every tile.
    fn tile_positions(&self) -> Vec<(Self::BodyId, Point2)>;

    /// Advances the world by `dt` milliseconds.
    fn step(&mut self, dt: f64);
}

/// Arena of tiles with a frictionless, zero-gravity integrator.
///
/// Tiles are referenced by generational [`TileId`]s. Forces accumulate until
/// the next [`step`](PhysicsWorld::step) and are then cleared. There is no
/// collision response.
#[derive(Debug, Default)]
pub struct TileStore {
    tiles: SlotMap<TileId, TileData>,
}

impl TileStore {
    /// Creates a new, empty tile store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if there are no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Returns a reference to the tile data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is not in the store.
    pub fn tile(&self, id: TileId) -> Result<&TileData> {
        self.tiles
            .get(id)
            .ok_or_else(|| SimulationError::TileNotFound.into())
    }

    /// Adds `force` to a tile's accumulator.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is not in the store.
    pub fn apply_force(&mut self, id: TileId, force: Vector2) -> Result<()> {
        let tile = self
            .tiles
            .get_mut(id)
            .ok_or(SimulationError::TileNotFound)?;
        tile.force += force;
        Ok(())
    }
}

impl PhysicsWorld for TileStore {
    type BodyId = TileId;

    fn add_tile(&mut self, descriptor: TileDescriptor) -> TileId {
        self.tiles.insert(TileData::new(&descriptor))
    }

    fn remove_tile(&mut self, id: TileId) -> Result<()> {
        self.tiles
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SimulationError::TileNotFound.into())
    }

    fn tile_positions(&self) -> Vec<(TileId, Point2)> {
        self.tiles.iter().map(|(id, t)| (id, t.position)).collect()
    }

    fn step(&mut self, dt: f64) {
        for tile in self.tiles.values_mut() {
            let mass = tile.mass();
            if mass > 0.0 {
                tile.velocity += tile.force * (dt / mass);
            }
            tile.position += tile.velocity * dt;
            tile.force = Vector2::zeros();
        }
    }
}
