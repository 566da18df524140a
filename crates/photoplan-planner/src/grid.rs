//! Boustrophedon ("lawn-mower") coverage grid.
//!
//! Rows run along x and are stacked along y. Even rows are flown with
//! ascending x, odd rows with descending x, so consecutive rows join at the
//! same end instead of returning across the area.

use log::{debug, warn};
use photoplan_core::{is_positive_finite, Camera, DatasetSpec, Pt3, Real, Vec2, Waypoint};
use serde::{Deserialize, Serialize};

use crate::{
    compute_distance_between_images, compute_speed_during_photo_capture, PlanError, PlanOptions,
};

/// Image grid covering the scan area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Distance between neighbouring images `(dx, dy)` (m).
    pub spacing: Vec2,
    /// Images per row.
    pub num_x: usize,
    /// Number of rows.
    pub num_y: usize,
}

/// Number of `step`-sized tiles needed to cover `extent`, or `None` when the
/// count is not representable as `usize`.
fn tile_count(extent: Real, step: Real) -> Option<usize> {
    let count = (extent / step).ceil();
    if count < usize::MAX as Real {
        Some(count as usize)
    } else {
        None
    }
}

impl GridLayout {
    /// Tile the scan area of `dataset_spec` with the given spacing.
    ///
    /// Counts are `ceil(scan_dimension / spacing)` per axis, so the grid covers
    /// at least the requested area and overshoots by less than one spacing
    /// unit. A zero scan dimension yields zero tiles on that axis.
    pub fn from_spacing(spacing: Vec2, dataset_spec: &DatasetSpec) -> Result<Self, PlanError> {
        if !(is_positive_finite(spacing.x) && is_positive_finite(spacing.y)) {
            return Err(PlanError::NonPositiveSpacing {
                dx: spacing.x,
                dy: spacing.y,
            });
        }
        let count = |extent: Real, step: Real| {
            tile_count(extent, step).ok_or(PlanError::TileCountOverflow { extent, step })
        };
        Ok(Self {
            spacing,
            num_x: count(dataset_spec.scan_dimension_x, spacing.x)?,
            num_y: count(dataset_spec.scan_dimension_y, spacing.y)?,
        })
    }

    /// Total number of grid cells, or `None` on overflow.
    pub fn checked_waypoint_count(&self) -> Option<usize> {
        self.num_x.checked_mul(self.num_y)
    }

    /// Area `(num_x * dx, num_y * dy)` actually tiled by the grid (m).
    pub fn covered_area(&self) -> Vec2 {
        Vec2::new(
            self.num_x as Real * self.spacing.x,
            self.num_y as Real * self.spacing.y,
        )
    }

    /// Capture positions at `height` in visitation order.
    ///
    /// Row `j` sits at `y = j * dy`; positions along a row are `i * dx`,
    /// ascending on even rows and descending on odd rows.
    pub fn positions(&self, height: Real) -> impl Iterator<Item = Pt3> {
        let Self {
            spacing,
            num_x,
            num_y,
        } = *self;
        (0..num_y).flat_map(move |j| {
            let y = j as Real * spacing.y;
            (0..num_x).map(move |k| {
                let i = if j % 2 == 0 { k } else { num_x - 1 - k };
                Pt3::new(i as Real * spacing.x, y, height)
            })
        })
    }

    /// Waypoints at `height`, all flown at `speed`.
    pub fn waypoints(&self, height: Real, speed: Real) -> Vec<Waypoint> {
        self.positions(height)
            .map(|position| Waypoint::new(position, speed))
            .collect()
    }
}

/// Validated grid and uniform capture speed for a camera/spec pair.
pub(crate) fn plan_layout(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
    opts: &PlanOptions,
) -> Result<(GridLayout, Real), PlanError> {
    camera.validate()?;
    dataset_spec.validate()?;
    if !is_positive_finite(opts.allowed_movement_px) {
        return Err(PlanError::InvalidAllowedMovement(opts.allowed_movement_px));
    }

    let spacing = compute_distance_between_images(camera, dataset_spec);
    let layout = GridLayout::from_spacing(spacing, dataset_spec)?;
    debug!(
        "grid spacing dx={:.4} m, dy={:.4} m -> {} x {} images",
        spacing.x, spacing.y, layout.num_x, layout.num_y
    );

    let limit = opts.max_waypoints.unwrap_or(usize::MAX);
    match layout.checked_waypoint_count() {
        Some(count) if count <= limit => {}
        Some(count) => return Err(PlanError::TooManyWaypoints { count, limit }),
        None => {
            return Err(PlanError::TooManyWaypoints {
                count: usize::MAX,
                limit,
            })
        }
    }

    let capture_speed =
        compute_speed_during_photo_capture(camera, dataset_spec, opts.allowed_movement_px);
    debug!(
        "capture speed {:.4} m/s for {} px blur over {} ms",
        capture_speed, opts.allowed_movement_px, dataset_spec.exposure_time_ms
    );

    Ok((layout, capture_speed))
}

/// Generate the complete photo plan as waypoints in a lawn-mower pattern,
/// using [`PlanOptions::default`].
///
/// Inputs are validated first; see [`generate_photo_plan_on_grid_with`].
pub fn generate_photo_plan_on_grid(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
) -> Result<Vec<Waypoint>, PlanError> {
    generate_photo_plan_on_grid_with(camera, dataset_spec, &PlanOptions::default())
}

/// Generate the photo plan with explicit options.
///
/// Every waypoint sits at `dataset_spec.height` and carries the blur-limited
/// capture speed. The first waypoint is `(0, 0, height)`. An empty plan is
/// returned when either scan dimension is zero.
pub fn generate_photo_plan_on_grid_with(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
    opts: &PlanOptions,
) -> Result<Vec<Waypoint>, PlanError> {
    let (layout, capture_speed) = plan_layout(camera, dataset_spec, opts)?;
    let waypoints = layout.waypoints(dataset_spec.height, capture_speed);
    if waypoints.is_empty() {
        warn!(
            "empty photo plan for scan area {} x {} m",
            dataset_spec.scan_dimension_x, dataset_spec.scan_dimension_y
        );
    }
    Ok(waypoints)
}
