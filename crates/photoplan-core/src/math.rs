//! Type definitions shared by every crate in the workspace.
//!
//! All computations use a single floating-point width.

use nalgebra::{Point3, Vector2};

/// Scalar type used throughout the library (currently `f64`).
pub type Real = f64;

/// 2D vector with [`Real`] components.
pub type Vec2 = Vector2<Real>;
/// 3D point with [`Real`] coordinates.
pub type Pt3 = Point3<Real>;

/// Returns `true` when `value` is finite and strictly positive.
pub fn is_positive_finite(value: Real) -> bool {
    value.is_finite() && value > 0.0
}
