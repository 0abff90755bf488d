use crate::error::{Result, SimulationError};
use crate::sampling::SamplerParams;

/// Parameters of the spawn loop and the canvas it runs on.
#[derive(Debug, Clone, Copy)]
pub struct SpawnConfig {
    /// Distance of spawn points from the silhouette edge.
    pub spawn_offset: f64,
    /// Longest sub-edge before an edge is split; non-positive disables splitting.
    pub max_segment_length: f64,
    /// Period of the spawn job, in milliseconds.
    pub spawn_interval_ms: f64,
    /// Period of the out-of-bounds cull job, in milliseconds.
    pub cull_interval_ms: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tile_width: f64,
    pub tile_height: f64,
    /// Spawn points closer than this to the canvas bottom are dropped.
    pub ground_margin: f64,
    /// Magnitude of the initial outward push.
    pub force_magnitude: f64,
    pub tiles_collide: bool,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            spawn_offset: 20.0,
            max_segment_length: 75.0,
            spawn_interval_ms: 300.0,
            cull_interval_ms: 1000.0,
            canvas_width: 1200.0,
            canvas_height: 600.0,
            tile_width: 20.0,
            tile_height: 5.0,
            ground_margin: 30.0,
            force_magnitude: 1e-4,
            tiles_collide: true,
        }
    }
}

impl SpawnConfig {
    /// Checks that every size, interval and offset is usable.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidConfig` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("spawn_offset", self.spawn_offset),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("cull_interval_ms", self.cull_interval_ms),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                ))
                .into());
            }
        }
        if !(self.ground_margin >= 0.0 && self.force_magnitude >= 0.0) {
            return Err(SimulationError::InvalidConfig(
                "ground_margin and force_magnitude must not be negative".to_owned(),
            )
            .into());
        }
        Ok(())
    }

    /// Returns the sampler parameters derived from this config.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidOffset` if `spawn_offset` is not positive.
    pub fn sampler_params(&self) -> Result<SamplerParams> {
        SamplerParams::new(self.spawn_offset, self.max_segment_length)
    }
}
