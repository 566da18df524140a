//! Immutable inputs and outputs of photo planning.
//!
//! [`Camera`] and [`DatasetSpec`] are built once from caller input (usually
//! JSON) and read-only afterwards. [`Waypoint`]s are produced only by the
//! planner, in visitation order.

mod camera;
mod dataset;
mod waypoint;

pub use camera::*;
pub use dataset::*;
pub use waypoint::*;
