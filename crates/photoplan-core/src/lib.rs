//! Core value types and camera geometry for `photoplan`.
//!
//! This crate contains:
//! - scalar and vector type aliases (`Real`, `Vec2`, `Pt3`, ...),
//! - the immutable inputs and outputs of planning ([`Camera`], [`DatasetSpec`], [`Waypoint`]),
//! - pinhole geometry on a flat surface: focal length in millimetres, point
//!   projection, image footprint and ground sampling distance.
//!
//! Geometry pipeline:
//! `Camera + height -> footprint -> GSD`

mod error;
/// Pinhole projection, footprint and GSD functions.
pub mod geometry;
/// Scalar/vector type aliases.
pub mod math;
/// Camera, dataset specification and waypoint value types.
pub mod models;
pub mod test_utils;

pub use error::*;
pub use geometry::*;
pub use math::*;
pub use models::*;
