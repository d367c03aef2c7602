//! Observable aggregation service.
//!
//! Assembles the fixed bundle of scalar observables for one (date, location)
//! evaluation by querying the events provider: sunset instant, moon and sun
//! alt-az at sunset, elongation, moon age from the last new-moon crossing,
//! disk illumination, and the moonset lag. Provider errors propagate
//! unchanged; a missing sunset is reported as `Ok(None)` (polar day/night).

use chrono::NaiveDate;
use log::{debug, warn};

use crate::api::GeographicLocation;
use crate::config::EngineConfig;
use crate::ephemeris::{Body, EphemerisResult, EventsProvider};
use crate::models::{ModifiedJulianDate, ObservationBundle};

/// Assemble the observable bundle for one evaluation.
///
/// The sunset and moonset searches both cover the 24h window starting at the
/// date's midnight UTC; the new-moon search looks back
/// `config.engine.new_moon_lookback_days` before the sunset instant. When no
/// new-moon crossing is found in that window, the moon age degrades to 0
/// hours, which deliberately biases the downstream decision toward
/// not-visible.
///
/// # Arguments
/// * `provider` - Events provider supplying instants and apparent positions
/// * `date` - Evaluation date (the evening of this UTC date)
/// * `location` - Observer location
/// * `config` - Engine settings (search windows)
///
/// # Returns
/// * `Ok(Some(bundle))` when a sunset was found
/// * `Ok(None)` when the sun does not set that day at the location
/// * `Err` when the provider fails
pub fn assemble_observations<P: EventsProvider>(
    provider: &P,
    date: NaiveDate,
    location: &GeographicLocation,
    config: &EngineConfig,
) -> EphemerisResult<Option<ObservationBundle>> {
    let window_end = ModifiedJulianDate::from_date(date) + 1.0;

    let Some(sunset) = provider.find_sunset(date, location)? else {
        debug!("no sunset on {} at {}", date, location);
        return Ok(None);
    };

    let moon = provider.apparent_altaz(Body::Moon, sunset, location)?;
    let sun = provider.apparent_altaz(Body::Sun, sunset, location)?;
    let elongation_deg = provider.angular_separation(Body::Moon, Body::Sun, sunset, location)?;
    let illuminated_fraction = provider.illuminated_fraction(sunset)?;

    let lookback = config.engine.new_moon_lookback_days;
    let moon_age_hours = match provider.last_new_moon_before(sunset, lookback)? {
        Some(new_moon) => sunset.hours_since(new_moon),
        None => {
            warn!(
                "no new moon within {} days before sunset on {}; treating moon age as 0h",
                lookback, date
            );
            0.0
        }
    };

    let moonset = provider.find_moonset_after(sunset, location, window_end)?;

    debug!(
        "observables for {} at {}: moon alt {:.2}°, elongation {:.2}°, age {:.1}h",
        date, location, moon.altitude_deg, elongation_deg, moon_age_hours
    );

    Ok(Some(ObservationBundle::new(
        sunset,
        moon.altitude_deg,
        moon.azimuth_deg,
        sun.altitude_deg,
        elongation_deg,
        moon_age_hours,
        illuminated_fraction,
        moonset,
    )))
}
