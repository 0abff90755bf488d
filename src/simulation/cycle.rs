use tracing::{debug, info, trace, warn};

use super::{SimulationState, SpawnConfig};
use crate::math::Point2;
use crate::sampling::{spawn_directives, SpawnDirective};
use crate::world::{PhysicsWorld, TileDescriptor};

/// Outcome of one spawn cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    /// Tiles created.
    pub spawned: usize,
    /// Spawn points dropped for being too close to the ground.
    pub near_ground: usize,
    /// Silhouette polygons that could not be built or sampled this cycle.
    pub skipped_polygons: usize,
}

impl std::ops::AddAssign for SpawnReport {
    fn add_assign(&mut self, other: Self) {
        self.spawned += other.spawned;
        self.near_ground += other.near_ground;
        self.skipped_polygons += other.skipped_polygons;
    }
}

/// Runs one spawn cycle: samples every silhouette polygon and creates a tile
/// at each outward spawn point.
///
/// Failures are contained per polygon and counted in the report; a bad
/// polygon this cycle is simply retried with fresh pose data next cycle.
pub fn spawn_cycle<W: PhysicsWorld>(
    config: &SpawnConfig,
    state: &SimulationState,
    world: &mut W,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    let params = match config.sampler_params() {
        Ok(params) => params,
        Err(err) => {
            warn!(%err, "spawn cycle skipped");
            return report;
        }
    };

    for polygon in state.silhouettes() {
        match polygon.and_then(|p| spawn_directives(&p, params)) {
            Ok(directives) => {
                for directive in directives {
                    if spawn_tile(config, world, &directive) {
                        report.spawned += 1;
                    } else {
                        report.near_ground += 1;
                    }
                }
            }
            Err(err) => {
                warn!(%err, "silhouette polygon skipped for this cycle");
                report.skipped_polygons += 1;
            }
        }
    }

    debug!(
        spawned = report.spawned,
        near_ground = report.near_ground,
        skipped = report.skipped_polygons,
        "spawn cycle finished"
    );
    report
}

/// Creates one tile unless the spawn point is within the ground margin.
fn spawn_tile<W: PhysicsWorld>(
    config: &SpawnConfig,
    world: &mut W,
    directive: &SpawnDirective,
) -> bool {
    if directive.position.y > config.canvas_height - config.ground_margin {
        return false;
    }
    trace!(
        x = directive.position.x,
        y = directive.position.y,
        angle = directive.angle,
        "spawning tile"
    );
    world.add_tile(TileDescriptor {
        position: directive.position,
        angle: directive.angle,
        force: directive.force * config.force_magnitude,
        width: config.tile_width,
        height: config.tile_height,
        collides: config.tiles_collide,
    });
    true
}

/// Returns `true` if `p` lies on the canvas (edges included).
fn on_canvas(config: &SpawnConfig, p: &Point2) -> bool {
    (0.0..=config.canvas_width).contains(&p.x) && (0.0..=config.canvas_height).contains(&p.y)
}

/// Removes every tile that has left the canvas and returns how many were removed.
pub fn cull_out_of_bounds<W: PhysicsWorld>(config: &SpawnConfig, world: &mut W) -> usize {
    let mut removed = 0;
    for (id, position) in world.tile_positions() {
        if on_canvas(config, &position) {
            continue;
        }
        match world.remove_tile(id) {
            Ok(()) => removed += 1,
            Err(err) => warn!(%err, "failed to remove out-of-bounds tile"),
        }
    }
    info!(removed, "removed out-of-bounds tiles");
    removed
}
