pub mod error;
pub mod math;
pub mod pose;
pub mod sampling;
pub mod simulation;
pub mod world;

pub use error::{PosetilesError, Result};
