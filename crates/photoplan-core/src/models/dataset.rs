use serde::{Deserialize, Serialize};

use crate::{is_positive_finite, ModelError, Real};

/// User requirements for an image dataset over a flat rectangular area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    /// Fraction in `[0, 1)` of scene overlap between consecutive images
    /// along a flight line (forward overlap).
    pub overlap: Real,
    /// Fraction in `[0, 1)` of scene overlap between adjacent flight lines.
    pub sidelap: Real,
    /// Flight height above the surface (m).
    pub height: Real,
    /// Extent of the scan area along x (m).
    pub scan_dimension_x: Real,
    /// Extent of the scan area along y (m).
    pub scan_dimension_y: Real,
    /// Exposure time per image (ms).
    pub exposure_time_ms: Real,
}

impl DatasetSpec {
    /// Reject specifications that would drive planning into division by zero
    /// or an unbounded image count.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (field, value) in [("overlap", self.overlap), ("sidelap", self.sidelap)] {
            if !(value.is_finite() && (0.0..1.0).contains(&value)) {
                return Err(ModelError::FractionOutOfRange { field, value });
            }
        }
        for (field, value) in [
            ("height", self.height),
            ("exposure_time_ms", self.exposure_time_ms),
        ] {
            if !is_positive_finite(value) {
                return Err(ModelError::NonPositiveParameter { field, value });
            }
        }
        for (field, value) in [
            ("scan_dimension_x", self.scan_dimension_x),
            ("scan_dimension_y", self.scan_dimension_y),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ModelError::NegativeScanDimension { field, value });
            }
        }
        Ok(())
    }

    /// Exposure time in seconds.
    pub fn exposure_time_s(&self) -> Real {
        self.exposure_time_ms / 1000.0
    }
}
