//! Photo-capture planning on top of `photoplan-core` geometry.
//!
//! The planner turns a [`Camera`](photoplan_core::Camera) and a
//! [`DatasetSpec`](photoplan_core::DatasetSpec) into an ordered list of
//! [`Waypoint`](photoplan_core::Waypoint)s:
//!
//! 1. footprint at the flight height -> spacing for the requested overlap/sidelap,
//! 2. ceil tiling of the scan area -> [`GridLayout`],
//! 3. GSD and exposure time -> blur-limited capture speed,
//! 4. boustrophedon traversal of the grid -> waypoints.

mod error;
mod grid;
mod options;
mod report;
mod spacing;
mod speed;

pub use error::*;
pub use grid::*;
pub use options::*;
pub use report::*;
pub use spacing::*;
pub use speed::*;
