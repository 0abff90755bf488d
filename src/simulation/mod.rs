mod config;
mod cycle;
mod state;
mod timer;

pub use config::SpawnConfig;
pub use cycle::{cull_out_of_bounds, spawn_cycle, SpawnReport};
pub use state::{SilhouetteSource, SimulationState};
pub use timer::IntervalTimer;

use tracing::{debug, warn};

use crate::error::Result;
use crate::pose::{PoseConfig, PoseFrame};
use crate::world::PhysicsWorld;

/// What happened during one [`Simulation::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Spawn cycles that ran: 0 or 1.
    pub spawn_cycles: u32,
    /// Spawn periods that elapsed beyond the one that ran; these are dropped.
    pub missed_spawn_cycles: u64,
    /// Summed results of those cycles.
    pub spawn: SpawnReport,
    /// Tiles removed for leaving the canvas.
    pub culled: usize,
}

/// Drives the spawn loop: owns the evolving state, the world and the two
/// periodic jobs (spawning and culling).
///
/// Time is supplied by the caller through [`advance`](Self::advance); the
/// driver never sleeps or spawns threads.
#[derive(Debug)]
pub struct Simulation<W: PhysicsWorld> {
    config: SpawnConfig,
    pose_config: PoseConfig,
    state: SimulationState,
    world: W,
    spawn_timer: IntervalTimer,
    cull_timer: IntervalTimer,
}

impl<W: PhysicsWorld> Simulation<W> {
    /// Creates a simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if either configuration fails validation.
    pub fn new(
        config: SpawnConfig,
        pose_config: PoseConfig,
        state: SimulationState,
        world: W,
    ) -> Result<Self> {
        config.validate()?;
        pose_config.validate()?;
        Ok(Self {
            spawn_timer: IntervalTimer::new(config.spawn_interval_ms),
            cull_timer: IntervalTimer::new(config.cull_interval_ms),
            config,
            pose_config,
            state,
            world,
        })
    }

    /// Runs the first spawn cycle immediately and restarts both timers.
    pub fn start(&mut self) -> SpawnReport {
        self.spawn_timer.reset();
        self.cull_timer.reset();
        spawn_cycle(&self.config, &self.state, &mut self.world)
    }

    /// Folds a pose estimation frame into the tracked pose.
    pub fn update_pose(&mut self, frame: &PoseFrame) -> usize {
        self.state.pose.update(frame, &self.pose_config)
    }

    /// Steps the world by `elapsed_ms` and runs whichever periodic jobs came due.
    ///
    /// Each job runs at most once per call. Periods missed during a long gap
    /// are counted in the report but never replayed.
    pub fn advance(&mut self, elapsed_ms: f64) -> TickReport {
        let mut report = TickReport::default();
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.world.step(elapsed_ms);
        }

        let due = self.spawn_timer.tick(elapsed_ms);
        if due > 0 {
            report.spawn = spawn_cycle(&self.config, &self.state, &mut self.world);
            report.spawn_cycles = 1;
            report.missed_spawn_cycles = due - 1;
        }
        if self.cull_timer.tick(elapsed_ms) > 0 {
            report.culled = cull_out_of_bounds(&self.config, &mut self.world);
        }

        if report.missed_spawn_cycles > 0 {
            warn!(
                elapsed_ms,
                missed = report.missed_spawn_cycles,
                "spawn cycles missed during long gap"
            );
        }
        debug!(
            elapsed_ms,
            cycles = report.spawn_cycles,
            culled = report.culled,
            "simulation advanced"
        );
        report
    }

    /// Returns the spawn configuration.
    #[must_use]
    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    /// Returns the simulation state.
    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Returns the simulation state for modification (e.g. switching source).
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Returns the world.
    #[must_use]
    pub fn world(&self) -> &W {
        &self.world
    }

    /// Returns the world for modification.
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }
}
