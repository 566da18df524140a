use log::debug;
use photoplan_core::{
    compute_ground_sampling_distance, compute_image_footprint_on_surface, Camera, DatasetSpec,
    Real, Vec2, Waypoint,
};
use serde::{Deserialize, Serialize};

use crate::{grid::plan_layout, GridLayout, PlanError, PlanOptions};

/// Complete photo survey: derived camera quantities, grid and waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoPlan {
    /// Ground extent of one image at the flight height (m).
    pub footprint: Vec2,
    /// Ground sampling distance at the flight height (m/px).
    pub gsd: Real,
    /// Capture grid.
    pub layout: GridLayout,
    /// Uniform speed along the whole path (m/s).
    pub capture_speed: Real,
    /// Waypoints in visitation order.
    pub waypoints: Vec<Waypoint>,
}

/// [`PhotoPlan`] scalars without the waypoint list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Ground extent of one image (m).
    pub footprint: Vec2,
    /// Ground sampling distance (m/px).
    pub gsd: Real,
    /// Capture grid.
    pub layout: GridLayout,
    /// Uniform speed along the path (m/s).
    pub capture_speed: Real,
    /// Number of waypoints in the plan.
    pub waypoint_count: usize,
    /// Area tiled by the grid (m).
    pub covered_area: Vec2,
    /// Length of the flight path (m).
    pub path_length: Real,
    /// Time to fly the path at the capture speed (s).
    pub estimated_flight_time_s: Real,
}

impl PhotoPlan {
    /// Sum of straight-line distances between consecutive waypoints (m).
    pub fn path_length(&self) -> Real {
        self.waypoints
            .windows(2)
            .map(|w| (w[1].position - w[0].position).norm())
            .sum()
    }

    /// Time to fly the path at the capture speed (s); zero for an empty plan.
    pub fn estimated_flight_time_s(&self) -> Real {
        if self.waypoints.is_empty() {
            return 0.0;
        }
        self.path_length() / self.capture_speed
    }

    /// Area actually tiled by the grid (m), at least the requested scan area.
    pub fn covered_area(&self) -> Vec2 {
        self.layout.covered_area()
    }

    /// Scalars of the plan, without the waypoint list.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            footprint: self.footprint,
            gsd: self.gsd,
            layout: self.layout,
            capture_speed: self.capture_speed,
            waypoint_count: self.waypoints.len(),
            covered_area: self.covered_area(),
            path_length: self.path_length(),
            estimated_flight_time_s: self.estimated_flight_time_s(),
        }
    }
}

/// Validate inputs and build the full [`PhotoPlan`].
pub fn plan_photo_survey(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
    opts: &PlanOptions,
) -> Result<PhotoPlan, PlanError> {
    let (layout, capture_speed) = plan_layout(camera, dataset_spec, opts)?;
    let footprint = compute_image_footprint_on_surface(camera, dataset_spec.height);
    let gsd = compute_ground_sampling_distance(camera, dataset_spec.height);
    debug!(
        "footprint {:.3} x {:.3} m, gsd {:.5} m/px at {} m",
        footprint.x, footprint.y, gsd, dataset_spec.height
    );

    Ok(PhotoPlan {
        footprint,
        gsd,
        layout,
        capture_speed,
        waypoints: layout.waypoints(dataset_spec.height, capture_speed),
    })
}
