//! Shared test support: canned events providers.

#![allow(dead_code)]

use chrono::NaiveDate;

use hilal::api::GeographicLocation;
use hilal::ephemeris::{AltAz, Body, EphemerisError, EphemerisResult, EventsProvider};
use hilal::models::ModifiedJulianDate;

/// Events provider returning canned observables, no ephemeris data needed.
///
/// Event searches honor the window arguments, so tests can place events
/// outside a window to exercise the absent-event paths.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    pub sunset: Option<ModifiedJulianDate>,
    pub moonset: Option<ModifiedJulianDate>,
    pub new_moon: Option<ModifiedJulianDate>,
    pub moon_altaz: AltAz,
    pub sun_altaz: AltAz,
    pub elongation_deg: f64,
    pub illuminated_fraction: f64,
}

impl FixtureProvider {
    /// A favorable evening: sunset at 2025-03-29 18:00 UTC-ish (MJD 60763.75),
    /// moonset an hour later, new moon 24h before sunset.
    pub fn favorable() -> Self {
        let sunset = ModifiedJulianDate::new(60763.75);
        Self {
            sunset: Some(sunset),
            moonset: Some(sunset + 60.0 / 1440.0),
            new_moon: Some(sunset + -1.0),
            moon_altaz: AltAz {
                altitude_deg: 10.0,
                azimuth_deg: 272.0,
            },
            sun_altaz: AltAz {
                altitude_deg: -0.8,
                azimuth_deg: 268.0,
            },
            elongation_deg: 12.0,
            illuminated_fraction: 0.035,
        }
    }
}

impl EventsProvider for FixtureProvider {
    fn find_sunset(
        &self,
        _date: NaiveDate,
        _location: &GeographicLocation,
    ) -> EphemerisResult<Option<ModifiedJulianDate>> {
        Ok(self.sunset)
    }

    fn find_moonset_after(
        &self,
        after: ModifiedJulianDate,
        _location: &GeographicLocation,
        window_end: ModifiedJulianDate,
    ) -> EphemerisResult<Option<ModifiedJulianDate>> {
        Ok(self
            .moonset
            .filter(|m| *m > after && *m <= window_end))
    }

    fn last_new_moon_before(
        &self,
        instant: ModifiedJulianDate,
        lookback_days: f64,
    ) -> EphemerisResult<Option<ModifiedJulianDate>> {
        Ok(self
            .new_moon
            .filter(|n| *n <= instant && *n >= instant + -lookback_days))
    }

    fn apparent_altaz(
        &self,
        body: Body,
        _instant: ModifiedJulianDate,
        _location: &GeographicLocation,
    ) -> EphemerisResult<AltAz> {
        Ok(match body {
            Body::Moon => self.moon_altaz,
            Body::Sun => self.sun_altaz,
        })
    }

    fn angular_separation(
        &self,
        _a: Body,
        _b: Body,
        _instant: ModifiedJulianDate,
        _location: &GeographicLocation,
    ) -> EphemerisResult<f64> {
        Ok(self.elongation_deg)
    }

    fn illuminated_fraction(&self, _instant: ModifiedJulianDate) -> EphemerisResult<f64> {
        Ok(self.illuminated_fraction)
    }
}

/// Events provider whose position queries always fail, for error-propagation
/// tests.
pub struct FailingProvider;

impl EventsProvider for FailingProvider {
    fn find_sunset(
        &self,
        _date: NaiveDate,
        _location: &GeographicLocation,
    ) -> EphemerisResult<Option<ModifiedJulianDate>> {
        Ok(Some(ModifiedJulianDate::new(60763.75)))
    }

    fn find_moonset_after(
        &self,
        _after: ModifiedJulianDate,
        _location: &GeographicLocation,
        _window_end: ModifiedJulianDate,
    ) -> EphemerisResult<Option<ModifiedJulianDate>> {
        Ok(None)
    }

    fn last_new_moon_before(
        &self,
        _instant: ModifiedJulianDate,
        _lookback_days: f64,
    ) -> EphemerisResult<Option<ModifiedJulianDate>> {
        Ok(None)
    }

    fn apparent_altaz(
        &self,
        _body: Body,
        _instant: ModifiedJulianDate,
        _location: &GeographicLocation,
    ) -> EphemerisResult<AltAz> {
        Err(EphemerisError::DataError(
            "ephemeris kernel not loaded".to_string(),
        ))
    }

    fn angular_separation(
        &self,
        _a: Body,
        _b: Body,
        _instant: ModifiedJulianDate,
        _location: &GeographicLocation,
    ) -> EphemerisResult<f64> {
        Err(EphemerisError::DataError(
            "ephemeris kernel not loaded".to_string(),
        ))
    }

    fn illuminated_fraction(&self, _instant: ModifiedJulianDate) -> EphemerisResult<f64> {
        Err(EphemerisError::DataError(
            "ephemeris kernel not loaded".to_string(),
        ))
    }
}

/// Houston, the worked example from the engine documentation.
pub fn test_location() -> GeographicLocation {
    GeographicLocation::new(29.7604, -95.3698, None).unwrap()
}

/// 2025-03-29, the evening the worked example evaluates.
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 29).unwrap()
}
