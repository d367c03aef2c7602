//! Top-level visibility assessment service.
//!
//! Orchestrates the observable aggregator and the decision engine for one
//! (date, location) pair. Each call is independent and side-effect-free;
//! batch callers may evaluate many pairs in parallel with no coordination.

use chrono::NaiveDate;

use crate::api::GeographicLocation;
use crate::config::EngineConfig;
use crate::ephemeris::{EphemerisResult, EventsProvider};
use crate::models::VisibilityAssessment;
use crate::services::{aggregator, engine};

/// Assess crescent visibility for one date and observer location.
///
/// # Arguments
/// * `provider` - Events provider supplying instants and apparent positions
/// * `date` - Evaluation date (the evening of this UTC date)
/// * `location` - Observer location
/// * `config` - Engine settings and observing-condition gates
///
/// # Returns
/// * `Ok(VisibilityAssessment::NoSunset)` for polar day/night
/// * `Ok(VisibilityAssessment::Evaluated(verdict))` otherwise
/// * `Err` when the provider fails
pub fn assess_visibility<P: EventsProvider>(
    provider: &P,
    date: NaiveDate,
    location: &GeographicLocation,
    config: &EngineConfig,
) -> EphemerisResult<VisibilityAssessment> {
    match aggregator::assemble_observations(provider, date, location, config)? {
        None => Ok(VisibilityAssessment::NoSunset),
        Some(bundle) => Ok(VisibilityAssessment::Evaluated(engine::evaluate(
            &bundle, config,
        ))),
    }
}
