use thiserror::Error;

/// Top-level error type for the posetiles crate.
#[derive(Debug, Error)]
pub enum PosetilesError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Pose(#[from] PoseError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    InvalidPolygon { vertices: usize },

    #[error("offset distance must be positive, got {distance}")]
    InvalidOffset { distance: f64 },

    #[error("degenerate edge: both endpoints at ({x}, {y})")]
    DegenerateEdge { x: f64, y: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to pose ingestion.
#[derive(Debug, Error)]
pub enum PoseError {
    #[error("unknown body part: {0}")]
    UnknownPart(String),

    #[error("confidence threshold {0} is outside [0, 1]")]
    InvalidConfidence(f64),
}

/// Errors related to the simulation layer.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("tile not found")]
    TileNotFound,
}

/// Convenience type alias for results using [`PosetilesError`].
pub type Result<T> = std::result::Result<T, PosetilesError>;
