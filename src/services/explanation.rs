//! Explanation generation service.
//!
//! Translates an assessment into a ranked list of human-readable findings
//! plus a primary-cause diagnosis when the crescent is not visible. The
//! report is deterministic given the assessment and never re-derives any
//! value already carried by the verdict.

use serde::{Deserialize, Serialize};

use crate::models::{VisibilityAssessment, VisibilityClass, VisibilityVerdict};

/// Which observable or stage a finding comments on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    Headline,
    Altitude,
    MoonAge,
    Elongation,
    Illumination,
    Conclusion,
}

/// A single line of the explanation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub text: String,
}

impl Finding {
    fn new(kind: FindingKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Primary cause of a not-visible verdict, by diagnosis priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryReason {
    /// The moon is below the horizon at sunset.
    MoonBelowHorizon,
    /// Less than 15 hours have passed since the new moon.
    MoonTooYoung,
    /// Elongation is below the Danjon limit for the moon's age.
    BelowDanjonLimit,
}

/// Structured explanation of one visibility assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityReport {
    /// Headline verdict the report explains.
    pub visible: bool,
    /// Sunset instant in UTC; absent for the polar no-sunset case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset_utc: Option<chrono::DateTime<chrono::Utc>>,
    /// Findings in fixed order: headline, one per observable, conclusion.
    pub findings: Vec<Finding>,
    /// Primary cause when not visible and a dominant obstacle exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_reason: Option<PrimaryReason>,
}

impl std::fmt::Display for VisibilityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, finding) in self.findings.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", finding.text)?;
        }
        Ok(())
    }
}

/// Generate the explanation report for an assessment.
pub fn explain(assessment: &VisibilityAssessment) -> VisibilityReport {
    match assessment {
        VisibilityAssessment::NoSunset => VisibilityReport {
            visible: false,
            sunset_utc: None,
            findings: vec![Finding::new(
                FindingKind::Headline,
                "Sun does not set on this date at this location; no evening crescent \
                 observation is possible.",
            )],
            primary_reason: None,
        },
        VisibilityAssessment::Evaluated(verdict) => explain_verdict(verdict),
    }
}

fn explain_verdict(verdict: &VisibilityVerdict) -> VisibilityReport {
    let bundle = &verdict.bundle;
    let primary_reason = diagnose_primary_reason(verdict);

    let headline = if verdict.visible {
        "Crescent likely visible after sunset; the new lunar month can begin this evening."
    } else {
        "Crescent not expected to be visible; the current lunar month continues."
    };

    let findings = vec![
        Finding::new(FindingKind::Headline, headline),
        Finding::new(FindingKind::Altitude, altitude_comment(bundle.moon_altitude_deg)),
        Finding::new(FindingKind::MoonAge, age_comment(bundle.moon_age_hours)),
        Finding::new(FindingKind::Elongation, elongation_comment(bundle.elongation_deg)),
        Finding::new(
            FindingKind::Illumination,
            illumination_comment(bundle.illuminated_fraction),
        ),
        Finding::new(FindingKind::Conclusion, conclusion(verdict, primary_reason)),
    ];

    VisibilityReport {
        visible: verdict.visible,
        sunset_utc: Some(bundle.sunset_mjd.to_datetime()),
        findings,
        primary_reason,
    }
}

fn altitude_comment(altitude_deg: f64) -> String {
    if altitude_deg < 0.0 {
        format!("Moon below horizon at sunset ({:.1}°)", altitude_deg)
    } else if altitude_deg < 5.0 {
        format!("Moon altitude marginal ({:.1}°)", altitude_deg)
    } else {
        format!("Moon altitude favorable ({:.1}°)", altitude_deg)
    }
}

fn age_comment(age_hours: f64) -> String {
    if age_hours < 15.0 {
        format!("Moon extremely young ({:.1}h since new moon)", age_hours)
    } else if age_hours < 24.0 {
        format!("Moon young ({:.1}h since new moon)", age_hours)
    } else {
        format!("Moon age favorable ({:.1}h since new moon)", age_hours)
    }
}

fn elongation_comment(elongation_deg: f64) -> String {
    if elongation_deg < 7.0 {
        format!("Elongation below the Danjon limit ({:.1}°)", elongation_deg)
    } else if elongation_deg < 10.0 {
        format!("Elongation minimal ({:.1}°)", elongation_deg)
    } else {
        format!("Elongation favorable ({:.1}°)", elongation_deg)
    }
}

fn illumination_comment(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if percent < 1.0 {
        format!("Crescent extremely thin ({:.2}% illuminated)", percent)
    } else if percent < 2.0 {
        format!("Crescent very thin ({:.2}% illuminated)", percent)
    } else {
        format!("Illumination favorable ({:.2}%)", percent)
    }
}

/// Pick the dominant obstacle for a not-visible verdict, in priority order:
/// moon below horizon, then moon younger than 15h, then elongation below the
/// Danjon limit. `None` for visible verdicts and for failures that have no
/// single dominant geometric cause (e.g. observing-condition gates).
fn diagnose_primary_reason(verdict: &VisibilityVerdict) -> Option<PrimaryReason> {
    if verdict.visible {
        return None;
    }
    let bundle = &verdict.bundle;
    if bundle.moon_altitude_deg < 0.0 {
        Some(PrimaryReason::MoonBelowHorizon)
    } else if bundle.moon_age_hours < 15.0 {
        Some(PrimaryReason::MoonTooYoung)
    } else if bundle.elongation_deg < verdict.min_elongation_deg {
        Some(PrimaryReason::BelowDanjonLimit)
    } else {
        None
    }
}

fn conclusion(verdict: &VisibilityVerdict, primary_reason: Option<PrimaryReason>) -> String {
    let bundle = &verdict.bundle;

    if verdict.visible {
        // Class and q are always present for a visible verdict.
        let q = verdict.q_factor.unwrap_or_default();
        return match verdict.visibility_class {
            Some(VisibilityClass::EasilyVisible) => {
                format!("Easily visible to the naked eye (q = {:.3}).", q)
            }
            Some(VisibilityClass::VisibleInPerfectConditions) => format!(
                "Visible to the naked eye in perfect conditions (q = {:.3}).",
                q
            ),
            _ => format!(
                "Findable with optical aid, then visible to the naked eye (q = {:.3}).",
                q
            ),
        };
    }

    match primary_reason {
        Some(PrimaryReason::MoonBelowHorizon) => format!(
            "Primary obstacle: the moon is below the horizon at sunset ({:.1}°).",
            bundle.moon_altitude_deg
        ),
        Some(PrimaryReason::MoonTooYoung) => format!(
            "Primary obstacle: the moon is too young ({:.1}h since new moon).",
            bundle.moon_age_hours
        ),
        Some(PrimaryReason::BelowDanjonLimit) => format!(
            "Primary obstacle: elongation {:.1}° is below the Danjon limit of {:.1}°.",
            bundle.elongation_deg, verdict.min_elongation_deg
        ),
        None => match (verdict.visibility_class, verdict.q_factor) {
            (Some(VisibilityClass::OpticalAidOnly), Some(q)) => format!(
                "Visible through optical aid only, not to the naked eye (q = {:.3}).",
                q
            ),
            (Some(VisibilityClass::NotVisible), Some(q)) => {
                format!("Crescent too faint to observe (q = {:.3}).", q)
            }
            (Some(_), Some(q)) => format!(
                "Borderline crescent (q = {:.3}); observing conditions are insufficient.",
                q
            ),
            _ if !bundle.moonset_after_sunset => {
                "The moon sets before the sun; there is no observation window.".to_string()
            }
            _ => "Basic geometric requirements are not met.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{ModifiedJulianDate, ObservationBundle};
    use crate::services::engine::evaluate;

    fn evaluated(
        moon_altitude_deg: f64,
        elongation_deg: f64,
        moon_age_hours: f64,
        illuminated_fraction: f64,
        lag_minutes: Option<f64>,
    ) -> VisibilityAssessment {
        let sunset = ModifiedJulianDate::new(60764.0);
        let bundle = ObservationBundle::new(
            sunset,
            moon_altitude_deg,
            265.0,
            -0.8,
            elongation_deg,
            moon_age_hours,
            illuminated_fraction,
            lag_minutes.map(|m| sunset + m / 1440.0),
        );
        VisibilityAssessment::Evaluated(evaluate(&bundle, &EngineConfig::default()))
    }

    #[test]
    fn test_findings_fixed_order() {
        let report = explain(&evaluated(10.0, 12.0, 24.0, 0.02, Some(60.0)));
        let kinds: Vec<FindingKind> = report.findings.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FindingKind::Headline,
                FindingKind::Altitude,
                FindingKind::MoonAge,
                FindingKind::Elongation,
                FindingKind::Illumination,
                FindingKind::Conclusion,
            ]
        );
    }

    #[test]
    fn test_below_horizon_is_first_observable_finding_and_primary_reason() {
        let report = explain(&evaluated(-1.0, 12.0, 24.0, 0.02, Some(60.0)));
        assert!(!report.visible);
        assert!(report.findings[1].text.contains("below horizon"));
        assert_eq!(report.primary_reason, Some(PrimaryReason::MoonBelowHorizon));
    }

    #[test]
    fn test_young_moon_primary_reason() {
        // alt fine, age 10h: the Danjon limit (10.35°) also fails for 8°
        // elongation, but youth outranks it in the diagnosis.
        let report = explain(&evaluated(10.0, 8.0, 10.0, 0.01, Some(60.0)));
        assert_eq!(report.primary_reason, Some(PrimaryReason::MoonTooYoung));
        assert!(report.findings[2].text.contains("extremely young"));
    }

    #[test]
    fn test_danjon_limit_primary_reason() {
        // age 16h => min elongation 9.06°; 8° fails on elongation alone
        let report = explain(&evaluated(10.0, 8.0, 16.0, 0.01, Some(60.0)));
        assert_eq!(report.primary_reason, Some(PrimaryReason::BelowDanjonLimit));
        assert!(report.findings[5].text.contains("Danjon limit"));
    }

    #[test]
    fn test_visible_report_branches_on_class() {
        let report = explain(&evaluated(10.0, 12.0, 24.0, 0.035, Some(60.0)));
        assert!(report.visible);
        assert!(report.primary_reason.is_none());
        assert!(report.findings[0].text.contains("new lunar month"));
        assert!(report.findings[5].text.contains("Easily visible"));
    }

    #[test]
    fn test_condition_failure_has_no_primary_reason() {
        // Perfect-conditions tier failing on extinction: no single geometric
        // obstacle, so no primary reason.
        let report = explain(&evaluated(10.0, 12.0, 24.0, 0.02, Some(60.0)));
        assert!(!report.visible);
        assert!(report.primary_reason.is_none());
        assert!(report.findings[5].text.contains("conditions are insufficient"));
    }

    #[test]
    fn test_no_moonset_conclusion() {
        let report = explain(&evaluated(10.0, 12.0, 24.0, 0.02, None));
        assert!(!report.visible);
        assert!(report.findings[5].text.contains("sets before the sun"));
    }

    #[test]
    fn test_no_sunset_report() {
        let report = explain(&VisibilityAssessment::NoSunset);
        assert!(!report.visible);
        assert!(report.sunset_utc.is_none());
        assert_eq!(report.findings.len(), 1);
        assert!(report.findings[0].text.contains("does not set"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let assessment = evaluated(10.0, 12.0, 24.0, 0.02, Some(60.0));
        assert_eq!(explain(&assessment), explain(&assessment));
    }

    #[test]
    fn test_display_one_line_per_finding() {
        let report = explain(&evaluated(10.0, 12.0, 24.0, 0.02, Some(60.0)));
        let text = report.to_string();
        assert_eq!(text.lines().count(), report.findings.len());
    }
}
