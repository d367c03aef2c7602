//! Visibility verdicts and their derived diagnostics.

use serde::{Deserialize, Serialize};

use crate::models::ObservationBundle;

/// Yallop q-factor tier a computed score lands in.
///
/// Tiers are ordered from easiest to hardest; classification uses
/// strictly-greater lower bounds, so a score exactly on a boundary belongs to
/// the tier below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityClass {
    /// q > 0.216: easily visible to the naked eye.
    EasilyVisible,
    /// -0.014 < q <= 0.216: visible to the naked eye in perfect conditions.
    VisibleInPerfectConditions,
    /// -0.160 < q <= -0.014: optical aid needed to find, then naked eye.
    NeedsOpticalAidToFind,
    /// -0.232 < q <= -0.160: visible through optical aid only.
    OpticalAidOnly,
    /// q <= -0.232: not visible.
    NotVisible,
}

/// Outcome of one crescent visibility evaluation.
///
/// Carries the full observable bundle plus every derived quantity needed for
/// explanation and audit. `q_factor` and `visibility_class` are `None` when
/// the basic geometric requirements fail — the Yallop score was never
/// computed, which is a distinct state from any numeric value.
/// `extinction_factor` is `None` when the moon altitude is at or below -2°,
/// where the extinction proxy has no defined value (treat as severe).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityVerdict {
    /// Whether the crescent is judged sightable by the naked eye.
    pub visible: bool,
    /// The observables the verdict was derived from.
    pub bundle: ObservationBundle,
    /// Physical width of the illuminated crescent, km (linear approximation).
    pub crescent_width_km: f64,
    /// Yallop visibility parameter; absent when basic requirements fail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_factor: Option<f64>,
    /// Tier the q-factor landed in; present exactly when `q_factor` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility_class: Option<VisibilityClass>,
    /// Danjon limit: minimum elongation for this moon age, degrees.
    pub min_elongation_deg: f64,
    /// Atmospheric extinction proxy; absent when undefined (altitude <= -2°).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extinction_factor: Option<f64>,
}

/// Result of assessing a (date, location) pair.
///
/// The polar no-sunset case is a terminal state of its own, distinct from a
/// computed not-visible verdict: there is no evening observation to evaluate,
/// so no bundle exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VisibilityAssessment {
    /// The sun does not set on the evaluation date at the location.
    NoSunset,
    /// A sunset was found and the bundle was evaluated.
    Evaluated(VisibilityVerdict),
}

impl VisibilityAssessment {
    /// Whether the crescent was judged visible. `NoSunset` is never visible.
    pub fn is_visible(&self) -> bool {
        match self {
            VisibilityAssessment::NoSunset => false,
            VisibilityAssessment::Evaluated(v) => v.visible,
        }
    }

    /// The evaluated verdict, if a sunset was found.
    pub fn verdict(&self) -> Option<&VisibilityVerdict> {
        match self {
            VisibilityAssessment::NoSunset => None,
            VisibilityAssessment::Evaluated(v) => Some(v),
        }
    }
}
