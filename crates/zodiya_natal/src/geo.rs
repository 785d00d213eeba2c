//! Observer location.

use serde::{Deserialize, Serialize};

use crate::error::NatalError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a new geographic location. Call [`validate`](Self::validate)
    /// before use.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check that both coordinates are finite and within range.
    pub fn validate(&self) -> Result<(), NatalError> {
        check("latitude", self.latitude_deg, 90.0)?;
        check("longitude", self.longitude_deg, 180.0)
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

fn check(field: &'static str, value: f64, limit: f64) -> Result<(), NatalError> {
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(NatalError::InvalidCoordinates { field, value })
    }
}
