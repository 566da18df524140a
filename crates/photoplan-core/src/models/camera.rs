use serde::{Deserialize, Serialize};

use crate::{is_positive_finite, ModelError, Real, Vec2};

/// Simple pinhole camera with its physical sensor geometry.
///
/// Focal lengths and principal point are in pixels, sensor dimensions in
/// millimetres. The ratio `sensor_size / image_size` is the pixel pitch.
///
/// References:
/// - <https://github.com/colmap/colmap/blob/3f75f71310fdec803ab06be84a16cee5032d8e0d/src/colmap/sensor/models.h#L220>
/// - <https://en.wikipedia.org/wiki/Pinhole_camera_model>
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Focal length along x (pixels).
    pub fx: Real,
    /// Focal length along y (pixels).
    pub fy: Real,
    /// Principal point x (pixels).
    pub cx: Real,
    /// Principal point y (pixels).
    pub cy: Real,
    /// Physical sensor width (mm).
    pub sensor_size_x_mm: Real,
    /// Physical sensor height (mm).
    pub sensor_size_y_mm: Real,
    /// Image width (pixels).
    pub image_size_x_px: u32,
    /// Image height (pixels).
    pub image_size_y_px: u32,
}

impl Camera {
    /// Check the invariants every geometry function relies on.
    ///
    /// Focal lengths and sensor sizes must be finite and positive, the
    /// principal point finite, and both image dimensions non-zero.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in [
            ("fx", self.fx),
            ("fy", self.fy),
            ("sensor_size_x_mm", self.sensor_size_x_mm),
            ("sensor_size_y_mm", self.sensor_size_y_mm),
        ] {
            if !is_positive_finite(value) {
                return Err(ModelError::InvalidCameraParameter { field, value });
            }
        }
        for (field, value) in [("cx", self.cx), ("cy", self.cy)] {
            if !value.is_finite() {
                return Err(ModelError::NonFinitePrincipalPoint { field, value });
            }
        }
        if self.image_size_x_px == 0 || self.image_size_y_px == 0 {
            return Err(ModelError::ZeroImageSize {
                width: self.image_size_x_px,
                height: self.image_size_y_px,
            });
        }
        Ok(())
    }

    /// Physical size of one pixel along each axis (mm/px).
    pub fn pixel_pitch_mm(&self) -> Vec2 {
        Vec2::new(
            self.sensor_size_x_mm / Real::from(self.image_size_x_px),
            self.sensor_size_y_mm / Real::from(self.image_size_y_px),
        )
    }

    /// Image resolution as a real-valued vector `(width, height)`.
    pub fn image_size(&self) -> Vec2 {
        Vec2::new(
            Real::from(self.image_size_x_px),
            Real::from(self.image_size_y_px),
        )
    }
}
