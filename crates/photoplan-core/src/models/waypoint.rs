use serde::{Deserialize, Serialize};

use crate::{Pt3, Real};

/// A position the drone flies to and captures a photo at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Position `(x, y, z)` in the ground frame (m).
    pub position: Pt3,
    /// Speed to hold while traversing to and through this point (m/s).
    pub speed: Real,
}

impl Waypoint {
    /// Waypoint at `position` (m) flown at `speed` (m/s).
    pub fn new(position: Pt3, speed: Real) -> Self {
        Self { position, speed }
    }
}
