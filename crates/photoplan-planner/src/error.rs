use photoplan_core::{ModelError, Real};
use thiserror::Error;

/// Errors returned while building a photo plan.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PlanError {
    /// Camera or dataset specification failed validation.
    #[error("invalid specification")]
    InvalidInput(#[from] ModelError),
    /// Inter-image spacing is zero, negative or not finite.
    #[error("spacing between images must be finite and positive, got dx={dx}, dy={dy}")]
    NonPositiveSpacing { dx: Real, dy: Real },
    /// Tiling `extent` at `step` needs more images than `usize` can count.
    #[error("scan extent {extent} m at {step} m spacing needs too many images to count")]
    TileCountOverflow { extent: Real, step: Real },
    /// Allowed blur must be a finite, positive number of pixels.
    #[error("allowed movement must be finite and positive, got {0} px")]
    InvalidAllowedMovement(Real),
    /// The grid would exceed the configured waypoint limit.
    #[error("plan needs {count} waypoints, limit is {limit}")]
    TooManyWaypoints { count: usize, limit: usize },
}
