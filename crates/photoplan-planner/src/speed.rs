use photoplan_core::{compute_ground_sampling_distance, Camera, DatasetSpec, Real};

/// Default motion blur budget: one pixel per exposure.
pub const DEFAULT_ALLOWED_MOVEMENT_PX: Real = 1.0;

/// Highest drone speed (m/s) that keeps motion blur within
/// `allowed_movement_px` pixels during one exposure.
///
/// `speed = allowed_movement_px * GSD(height) / exposure_time_s`.
/// The planner applies this speed to the whole flight, not only to the
/// instant of exposure.
pub fn compute_speed_during_photo_capture(
    camera: &Camera,
    dataset_spec: &DatasetSpec,
    allowed_movement_px: Real,
) -> Real {
    let gsd = compute_ground_sampling_distance(camera, dataset_spec.height);
    let allowed_movement_m = allowed_movement_px * gsd;
    allowed_movement_m / dataset_spec.exposure_time_s()
}
