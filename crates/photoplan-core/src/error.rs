use thiserror::Error;

use crate::Real;

/// Rejected camera or dataset parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// A camera length (focal length, sensor size) is zero, negative or not finite.
    #[error("camera {field} must be finite and positive, got {value}")]
    InvalidCameraParameter { field: &'static str, value: Real },
    /// The principal point is not finite.
    #[error("camera {field} must be finite, got {value}")]
    NonFinitePrincipalPoint { field: &'static str, value: Real },
    /// At least one image dimension is zero.
    #[error("camera image size must be non-zero, got {width}x{height} px")]
    ZeroImageSize { width: u32, height: u32 },
    /// Overlap or sidelap outside `[0, 1)`.
    #[error("dataset {field} must lie in [0, 1), got {value}")]
    FractionOutOfRange { field: &'static str, value: Real },
    /// Height or exposure time is zero, negative or not finite.
    #[error("dataset {field} must be finite and positive, got {value}")]
    NonPositiveParameter { field: &'static str, value: Real },
    /// Scan dimension is negative or not finite.
    #[error("dataset {field} must be finite and non-negative, got {value}")]
    NegativeScanDimension { field: &'static str, value: Real },
}

/// Failure to project a point through the pinhole model.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ProjectionError {
    /// The point lies on the camera plane (`Z == 0`).
    #[error("Z (depth) must be non-zero for projection")]
    ZeroDepth,
    /// At least one coordinate is NaN or infinite.
    #[error("world point ({x}, {y}, {z}) has non-finite coordinates")]
    NonFinitePoint { x: Real, y: Real, z: Real },
}
