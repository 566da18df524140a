//! Pinhole geometry over a flat surface.
//!
//! All functions take the camera by reference and return freshly built values.
//! Distances are in metres unless a name says otherwise. Apart from
//! [`project_world_point_to_image`], the functions trust the [`Camera`]
//! invariants (see [`Camera::validate`]) and a positive distance; the planner
//! validates both before calling in.

use crate::{Camera, ProjectionError, Pt3, Real, Vec2};

/// Convert the pixel focal lengths of `camera` to millimetres.
///
/// `f_mm = f_px * (sensor_size_mm / image_size_px)` per axis.
pub fn compute_focal_length_in_mm(camera: &Camera) -> Vec2 {
    let pitch = camera.pixel_pitch_mm();
    Vec2::new(camera.fx * pitch.x, camera.fy * pitch.y)
}

/// Project a point given in the camera frame to pixel coordinates `(u, v)`.
///
/// ```text
/// u = fx * X / Z + cx
/// v = fy * Y / Z + cy
/// ```
///
/// Fails when the point lies on the camera plane (`Z == 0`) or has a
/// non-finite coordinate. Points behind the camera (`Z < 0`) are projected
/// without complaint; the result is mathematically valid but has no physical
/// meaning.
pub fn project_world_point_to_image(
    camera: &Camera,
    world_point: &Pt3,
) -> Result<Vec2, ProjectionError> {
    let (x, y, z) = (world_point.x, world_point.y, world_point.z);
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(ProjectionError::NonFinitePoint { x, y, z });
    }
    if z == 0.0 {
        return Err(ProjectionError::ZeroDepth);
    }

    let u = camera.fx * (x / z) + camera.cx;
    let v = camera.fy * (y / z) + camera.cy;
    Ok(Vec2::new(u, v))
}

/// Ground extent `(width, height)` in metres covered by one image taken
/// `distance_from_surface` metres above a flat surface.
///
/// Similar triangles between the sensor and its focal length expressed in the
/// same unit: `footprint = distance * sensor_mm / f_mm`. The pixel pitch
/// cancels, so this equals `distance * image_px / f_px` up to rounding.
pub fn compute_image_footprint_on_surface(camera: &Camera, distance_from_surface: Real) -> Vec2 {
    let f_mm = compute_focal_length_in_mm(camera);
    Vec2::new(
        distance_from_surface * (camera.sensor_size_x_mm / f_mm.x),
        distance_from_surface * (camera.sensor_size_y_mm / f_mm.y),
    )
}

/// Ground sampling distance in metres per pixel at `distance_from_surface`.
///
/// The footprint is divided by the pixel count on each axis and the smaller
/// (finer) of the two is returned.
pub fn compute_ground_sampling_distance(camera: &Camera, distance_from_surface: Real) -> Real {
    let footprint = compute_image_footprint_on_surface(camera, distance_from_surface);
    let gsd = footprint.component_div(&camera.image_size());
    gsd.x.min(gsd.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{reference_camera, survey_camera};

    #[test]
    fn focal_length_in_mm_reference() {
        let f_mm = compute_focal_length_in_mm(&reference_camera());
        assert!((f_mm.x - 10.0).abs() < 1e-12);
        assert!((f_mm.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn principal_point_projects_to_itself() {
        let cam = survey_camera();
        for z in [0.5, 3.0, 120.0, -2.0] {
            let uv = project_world_point_to_image(&cam, &Pt3::new(0.0, 0.0, z)).unwrap();
            assert_eq!(uv.x, cam.cx);
            assert_eq!(uv.y, cam.cy);
        }
    }

    #[test]
    fn projection_matches_pinhole_equations() {
        let cam = survey_camera();
        let p = Pt3::new(1.5, -0.75, 12.0);
        let uv = project_world_point_to_image(&cam, &p).unwrap();
        assert!((uv.x - (cam.fx * 1.5 / 12.0 + cam.cx)).abs() < 1e-9);
        assert!((uv.y - (cam.fy * -0.75 / 12.0 + cam.cy)).abs() < 1e-9);
    }

    #[test]
    fn projection_rejects_zero_depth() {
        let err = project_world_point_to_image(&reference_camera(), &Pt3::new(1.0, 2.0, 0.0))
            .unwrap_err();
        assert_eq!(err, ProjectionError::ZeroDepth);
    }

    #[test]
    fn projection_rejects_non_finite_points() {
        let err =
            project_world_point_to_image(&reference_camera(), &Pt3::new(Real::NAN, 0.0, 1.0))
                .unwrap_err();
        assert!(matches!(err, ProjectionError::NonFinitePoint { .. }));
    }

    #[test]
    fn footprint_matches_simplified_formula() {
        let cam = survey_camera();
        let d = 30.48;
        let fp = compute_image_footprint_on_surface(&cam, d);
        let simple_x = d * Real::from(cam.image_size_x_px) / cam.fx;
        let simple_y = d * Real::from(cam.image_size_y_px) / cam.fy;
        assert!((fp.x - simple_x).abs() < 1e-9 * simple_x);
        assert!((fp.y - simple_y).abs() < 1e-9 * simple_y);
    }

    #[test]
    fn gsd_picks_finer_axis() {
        let cam = survey_camera();
        let d = 50.0;
        let fp = compute_image_footprint_on_surface(&cam, d);
        let gx = fp.x / Real::from(cam.image_size_x_px);
        let gy = fp.y / Real::from(cam.image_size_y_px);
        let gsd = compute_ground_sampling_distance(&cam, d);
        assert_eq!(gsd, gx.min(gy));
        assert!(gsd > 0.0);
    }
}
