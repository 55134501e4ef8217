// File: crates/heatmap-core/src/error.rs
// Summary: Error taxonomy for axis building and mounting.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HeatmapError {
    /// Axis max below min, a non-finite bound, or a non-positive step.
    #[error("invalid axis range [{min}, {max}] with step {step}")]
    InvalidRange { min: f64, max: f64, step: f64 },

    /// The mount target could not be resolved by the host.
    #[error("mount target `{target}` could not be resolved")]
    MountTarget { target: String },
}

pub type Result<T, E = HeatmapError> = std::result::Result<T, E>;
