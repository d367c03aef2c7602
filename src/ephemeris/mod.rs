//! The astronomical events provider boundary.
//!
//! Everything the engine needs from real astronomy — discrete event finding
//! (sunset, moonset, new moon), apparent positions, angular separations, and
//! disk illumination — is consumed through the [`EventsProvider`] trait. A
//! concrete implementation wraps an ephemeris library; tests use a fixture
//! provider returning canned observables. The provider instance is passed
//! explicitly into the aggregator, so there is no process-global ephemeris
//! state and providers carry their own initialization/teardown lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::GeographicLocation;
use crate::models::ModifiedJulianDate;

/// Result type for provider operations.
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Celestial bodies the engine asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Sun => write!(f, "sun"),
            Body::Moon => write!(f, "moon"),
        }
    }
}

/// Apparent topocentric altitude/azimuth of a body, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltAz {
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
}

/// Error type for provider operations.
///
/// Provider failures are never recovered inside the core; they propagate to
/// the caller of the assessment entry point.
#[derive(Debug, thiserror::Error)]
pub enum EphemerisError {
    /// Ephemeris data not loaded, expired, or unreadable.
    #[error("Ephemeris data error: {0}")]
    DataError(String),

    /// The requested instant falls outside the ephemeris coverage span.
    #[error("Instant out of ephemeris range: {0}")]
    OutOfRange(String),

    /// Discrete event search failed to converge or was misconfigured.
    #[error("Event search error: {0}")]
    SearchError(String),
}

/// Supplier of astronomical events and observables.
///
/// All instants are UTC expressed as Modified Julian Dates. Searches return
/// `Ok(None)` when no event of the requested kind exists in the window — an
/// ordinary outcome (polar day, moon already set), not an error.
pub trait EventsProvider {
    /// First sunset (sun descending through the horizon) in the 24h window
    /// starting at the date's midnight UTC, or `None` when the sun does not
    /// set that day at the location.
    fn find_sunset(
        &self,
        date: NaiveDate,
        location: &GeographicLocation,
    ) -> EphemerisResult<Option<ModifiedJulianDate>>;

    /// Earliest moonset strictly after `after` and no later than
    /// `window_end`, or `None` when the moon does not set in that span.
    fn find_moonset_after(
        &self,
        after: ModifiedJulianDate,
        location: &GeographicLocation,
        window_end: ModifiedJulianDate,
    ) -> EphemerisResult<Option<ModifiedJulianDate>>;

    /// Most recent new-moon crossing at or before `instant`, searching at
    /// most `lookback_days` into the past. `None` when the window holds no
    /// crossing.
    fn last_new_moon_before(
        &self,
        instant: ModifiedJulianDate,
        lookback_days: f64,
    ) -> EphemerisResult<Option<ModifiedJulianDate>>;

    /// Apparent topocentric altitude/azimuth of a body at an instant.
    fn apparent_altaz(
        &self,
        body: Body,
        instant: ModifiedJulianDate,
        location: &GeographicLocation,
    ) -> EphemerisResult<AltAz>;

    /// Great-circle angular separation between the apparent positions of two
    /// bodies, degrees.
    fn angular_separation(
        &self,
        a: Body,
        b: Body,
        instant: ModifiedJulianDate,
        location: &GeographicLocation,
    ) -> EphemerisResult<f64>;

    /// Fraction of the lunar disk illuminated at an instant, in [0, 1],
    /// derived from sun/earth/moon position-vector geometry.
    fn illuminated_fraction(&self, instant: ModifiedJulianDate) -> EphemerisResult<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_display() {
        assert_eq!(Body::Sun.to_string(), "sun");
        assert_eq!(Body::Moon.to_string(), "moon");
    }

    #[test]
    fn test_error_display() {
        let err = EphemerisError::SearchError("no convergence".to_string());
        assert!(err.to_string().contains("no convergence"));
    }
}
