//! Public API surface for the crescent visibility engine.
//!
//! This file consolidates the types callers interact with. All types derive
//! Serialize/Deserialize for JSON and TOML round-tripping.

use serde::{Deserialize, Serialize};

pub use crate::models::ModifiedJulianDate;
pub use crate::models::{ObservationBundle, VisibilityAssessment, VisibilityClass, VisibilityVerdict};
pub use crate::services::explanation::{Finding, FindingKind, PrimaryReason, VisibilityReport};

/// Geographic location (latitude, longitude, elevation).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90, +N)
    pub latitude: f64,
    /// Longitude in decimal degrees (-180 to 180, +E)
    pub longitude: f64,
    /// Elevation in meters above sea level (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_m: Option<f64>,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64, elevation_m: Option<f64>) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self {
            latitude,
            longitude,
            elevation_m,
        })
    }
}

impl std::fmt::Display for GeographicLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ns = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let ew = if self.longitude >= 0.0 { 'E' } else { 'W' };
        write!(
            f,
            "{:.4}°{} {:.4}°{}",
            self.latitude.abs(),
            ns,
            self.longitude.abs(),
            ew
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_valid() {
        let loc = GeographicLocation::new(29.7604, -95.3698, None).unwrap();
        assert_eq!(loc.latitude, 29.7604);
        assert_eq!(loc.longitude, -95.3698);
        assert!(loc.elevation_m.is_none());
    }

    #[test]
    fn test_location_latitude_out_of_range() {
        assert!(GeographicLocation::new(90.1, 0.0, None).is_err());
        assert!(GeographicLocation::new(-91.0, 0.0, None).is_err());
    }

    #[test]
    fn test_location_longitude_out_of_range() {
        assert!(GeographicLocation::new(0.0, 180.5, None).is_err());
        assert!(GeographicLocation::new(0.0, -200.0, None).is_err());
    }

    #[test]
    fn test_location_display() {
        let loc = GeographicLocation::new(29.7604, -95.3698, None).unwrap();
        let s = format!("{}", loc);
        assert!(s.contains('N'));
        assert!(s.contains('W'));
    }
}
