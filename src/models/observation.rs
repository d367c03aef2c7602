//! Raw observables for one crescent visibility evaluation.

use serde::{Deserialize, Serialize};

use crate::models::ModifiedJulianDate;

/// Fixed bundle of scalar observables for one (date, location) evaluation.
///
/// Produced fresh per evaluation by the observable aggregator and never
/// mutated afterwards. The bundle only exists when a sunset was found; the
/// polar no-sunset case is represented by
/// [`VisibilityAssessment::NoSunset`](crate::models::VisibilityAssessment)
/// instead.
///
/// Invariants:
/// - `elongation_deg` in [0, 180]
/// - `illuminated_fraction` in [0, 1]
/// - `lag_time_minutes` is 0 when `moonset_after_sunset` is false
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationBundle {
    /// UTC sunset instant on the evaluation date at the location.
    pub sunset_mjd: ModifiedJulianDate,
    /// Apparent moon altitude at sunset, degrees.
    pub moon_altitude_deg: f64,
    /// Apparent moon azimuth at sunset, degrees.
    pub moon_azimuth_deg: f64,
    /// Apparent sun altitude at sunset, degrees.
    pub sun_altitude_deg: f64,
    /// Great-circle angular separation between moon and sun at sunset, degrees.
    pub elongation_deg: f64,
    /// Hours since the last new moon before sunset; 0 when none was found
    /// within the lookback window.
    pub moon_age_hours: f64,
    /// Fraction of the lunar disk illuminated, [0, 1].
    pub illuminated_fraction: f64,
    /// Whether a moonset was found strictly after sunset in the search window.
    pub moonset_after_sunset: bool,
    /// Minutes between sunset and the first moonset after it; 0 when none.
    pub lag_time_minutes: f64,
}

impl ObservationBundle {
    /// Construct a bundle, normalizing the moonset fields so the
    /// no-moonset case always carries a zero lag time.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sunset_mjd: ModifiedJulianDate,
        moon_altitude_deg: f64,
        moon_azimuth_deg: f64,
        sun_altitude_deg: f64,
        elongation_deg: f64,
        moon_age_hours: f64,
        illuminated_fraction: f64,
        moonset_mjd: Option<ModifiedJulianDate>,
    ) -> Self {
        debug_assert!((0.0..=180.0).contains(&elongation_deg));
        debug_assert!((0.0..=1.0).contains(&illuminated_fraction));

        let (moonset_after_sunset, lag_time_minutes) = match moonset_mjd {
            Some(moonset) if moonset > sunset_mjd => (true, moonset.minutes_since(sunset_mjd)),
            _ => (false, 0.0),
        };

        Self {
            sunset_mjd,
            moon_altitude_deg,
            moon_azimuth_deg,
            sun_altitude_deg,
            elongation_deg,
            moon_age_hours,
            illuminated_fraction,
            moonset_after_sunset,
            lag_time_minutes,
        }
    }
}
