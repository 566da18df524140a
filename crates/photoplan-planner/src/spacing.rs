use photoplan_core::{compute_image_footprint_on_surface, Camera, DatasetSpec, Vec2};

/// Distance between neighbouring images `(dx, dy)` that achieves the requested
/// overlap (along x) and sidelap (along y) at the flight height.
///
/// `dx = footprint_x * (1 - overlap)`, `dy = footprint_y * (1 - sidelap)`.
/// An overlap or sidelap of 1 gives zero spacing; [`GridLayout::from_spacing`](crate::GridLayout::from_spacing)
/// rejects that.
pub fn compute_distance_between_images(camera: &Camera, dataset_spec: &DatasetSpec) -> Vec2 {
    let footprint = compute_image_footprint_on_surface(camera, dataset_spec.height);
    Vec2::new(
        footprint.x * (1.0 - dataset_spec.overlap),
        footprint.y * (1.0 - dataset_spec.sidelap),
    )
}
