//! Shared fixtures for tests across the workspace.
//!
//! This module is public so that integration suites in other crates can reuse
//! it, but it is not intended for production use.

use crate::{Camera, DatasetSpec};

/// Square camera with a 10 mm focal length and 10 µm pixels.
///
/// At 10 m its footprint is exactly 10 m per axis.
pub fn reference_camera() -> Camera {
    Camera {
        fx: 1000.0,
        fy: 1000.0,
        cx: 0.0,
        cy: 0.0,
        sensor_size_x_mm: 10.0,
        sensor_size_y_mm: 10.0,
        image_size_x_px: 1000,
        image_size_y_px: 1000,
    }
}

/// 50 % overlap and sidelap over a 20 m x 20 m area at 10 m, 1 ms exposure.
///
/// With [`reference_camera`] this yields a 4 x 4 grid with 5 m spacing.
pub fn reference_dataset_spec() -> DatasetSpec {
    DatasetSpec {
        overlap: 0.5,
        sidelap: 0.5,
        height: 10.0,
        scan_dimension_x: 20.0,
        scan_dimension_y: 20.0,
        exposure_time_ms: 1.0,
    }
}

/// A 4:3 survey camera with slightly different focal lengths per axis.
pub fn survey_camera() -> Camera {
    Camera {
        fx: 4938.56,
        fy: 4936.49,
        cx: 4095.5,
        cy: 3071.5,
        sensor_size_x_mm: 13.107,
        sensor_size_y_mm: 9.830,
        image_size_x_px: 8192,
        image_size_y_px: 6144,
    }
}

/// 70 % overlap and sidelap over a 150 m x 100 m area at 30.48 m (100 ft).
pub fn survey_dataset_spec() -> DatasetSpec {
    DatasetSpec {
        overlap: 0.7,
        sidelap: 0.7,
        height: 30.48,
        scan_dimension_x: 150.0,
        scan_dimension_y: 100.0,
        exposure_time_ms: 2.0,
    }
}
