//! Crescent visibility decision engine.
//!
//! Pure functions turning an [`ObservationBundle`] into a
//! [`VisibilityVerdict`]. Physical possibility (moonset ordering, moon
//! altitude, the Danjon elongation limit) gates the empirical Yallop q-factor,
//! which the borderline tiers further gate on observing-condition proxies
//! (atmospheric extinction, set-lag time, moon age).

use crate::config::EngineConfig;
use crate::models::{ObservationBundle, VisibilityClass, VisibilityVerdict};

/// Mean lunar radius, km.
const LUNAR_RADIUS_KM: f64 = 1737.4;

/// Conversion from crescent width in km to arc-minutes at mean lunar
/// distance. A fixed approximation, not corrected for the true earth-moon
/// distance at the evaluation instant.
const ARCMIN_PER_KM_AT_MOON_DIST: f64 = 0.0145;

/// Ordered q-factor tier table. Classification walks top-down and takes the
/// first row whose exclusive lower bound the score exceeds, so exact boundary
/// values fall through to the tier below.
const Q_TIERS: [(f64, VisibilityClass); 4] = [
    (0.216, VisibilityClass::EasilyVisible),
    (-0.014, VisibilityClass::VisibleInPerfectConditions),
    (-0.160, VisibilityClass::NeedsOpticalAidToFind),
    (-0.232, VisibilityClass::OpticalAidOnly),
];

/// Physical width of the illuminated crescent, km.
///
/// Linear approximation from the illuminated fraction, not a precise
/// terminator-geometry model.
pub fn crescent_width_km(illuminated_fraction: f64) -> f64 {
    illuminated_fraction * 2.0 * LUNAR_RADIUS_KM
}

/// Yallop visibility parameter.
///
/// `q = (w - 0.00607 a² + 0.1228 a - 0.0702) / 10` where `w` is the crescent
/// width in arc-minutes and `a` the elongation in degrees. Only meaningful
/// once the basic geometric requirements hold; the engine never computes it
/// otherwise.
pub fn q_factor(crescent_width_km: f64, elongation_deg: f64) -> f64 {
    let w = crescent_width_km * ARCMIN_PER_KM_AT_MOON_DIST;
    (w - 0.00607 * elongation_deg * elongation_deg + 0.1228 * elongation_deg - 0.0702) / 10.0
}

/// Danjon limit: minimum elongation below which a crescent is physically
/// unobservable, degrees. Relaxes toward 7° as the moon ages.
pub fn min_elongation_deg(moon_age_hours: f64) -> f64 {
    (12.5 - 0.215 * moon_age_hours).max(7.0)
}

/// Atmospheric extinction proxy `1 / sin(alt + 2°)`.
///
/// Grows without bound as the altitude approaches -2° and has no defined
/// value at or below it; `None` means "undefined, extinction severe" and
/// fails every extinction gate.
pub fn extinction_factor(moon_altitude_deg: f64) -> Option<f64> {
    let s = (moon_altitude_deg + 2.0).to_radians().sin();
    if s > 0.0 {
        Some(1.0 / s)
    } else {
        None
    }
}

/// Classify a q-factor against the tier table.
pub fn classify_q(q: f64) -> VisibilityClass {
    Q_TIERS
        .iter()
        .find(|(lower, _)| q > *lower)
        .map(|(_, class)| *class)
        .unwrap_or(VisibilityClass::NotVisible)
}

/// Evaluate one observable bundle against the tiered visibility criteria.
///
/// Total over well-formed bundles and free of side effects: identical inputs
/// always produce identical verdicts.
///
/// # Arguments
/// * `bundle` - Observables assembled for one (date, location) evaluation
/// * `config` - Geometric and observing-condition gates
///
/// # Returns
/// The verdict with every derived diagnostic needed for explanation and audit.
pub fn evaluate(bundle: &ObservationBundle, config: &EngineConfig) -> VisibilityVerdict {
    let width_km = crescent_width_km(bundle.illuminated_fraction);
    let min_elongation = min_elongation_deg(bundle.moon_age_hours);
    let extinction = extinction_factor(bundle.moon_altitude_deg);

    let basic_requirements = bundle.moonset_after_sunset
        && bundle.moon_altitude_deg >= config.engine.min_moon_altitude_deg
        && bundle.elongation_deg >= min_elongation;

    if !basic_requirements {
        return VisibilityVerdict {
            visible: false,
            bundle: bundle.clone(),
            crescent_width_km: width_km,
            q_factor: None,
            visibility_class: None,
            min_elongation_deg: min_elongation,
            extinction_factor: extinction,
        };
    }

    let q = q_factor(width_km, bundle.elongation_deg);
    let class = classify_q(q);

    let conditions = &config.conditions;
    let visible = match class {
        VisibilityClass::EasilyVisible => true,
        VisibilityClass::VisibleInPerfectConditions => {
            extinction.is_some_and(|x| x < conditions.max_extinction_clear)
                && bundle.lag_time_minutes > conditions.min_lag_minutes_clear
        }
        VisibilityClass::NeedsOpticalAidToFind => {
            extinction.is_some_and(|x| x < conditions.max_extinction_aided)
                && bundle.moon_age_hours > conditions.min_age_hours_aided
                && bundle.lag_time_minutes > conditions.min_lag_minutes_aided
        }
        VisibilityClass::OpticalAidOnly | VisibilityClass::NotVisible => false,
    };

    VisibilityVerdict {
        visible,
        bundle: bundle.clone(),
        crescent_width_km: width_km,
        q_factor: Some(q),
        visibility_class: Some(class),
        min_elongation_deg: min_elongation,
        extinction_factor: extinction,
    }
}
