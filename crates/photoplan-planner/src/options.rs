use photoplan_core::Real;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_ALLOWED_MOVEMENT_PX;

/// Default cap on the number of generated waypoints.
pub const DEFAULT_MAX_WAYPOINTS: usize = 1_000_000;

/// Options controlling plan generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    /// Motion blur budget during one exposure (pixels).
    pub allowed_movement_px: Real,
    /// Upper bound on the waypoint count (`None` disables the check).
    pub max_waypoints: Option<usize>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            allowed_movement_px: DEFAULT_ALLOWED_MOVEMENT_PX,
            max_waypoints: Some(DEFAULT_MAX_WAYPOINTS),
        }
    }
}
