//! Rule-based cardiac risk scoring.
//!
//! Five independent conditions each award one point and one fixed reason.
//! Severe hyponatremia is reported as a flag but never scored.

use serde::Serialize;

use crate::constants::{
    HIGH_HEART_SCORE, KIDNEY_FAILURE_CREATININE, MODERATE_HEART_SCORE, REASON_ADVANCED_AGE,
    REASON_HIGH_WBC, REASON_KIDNEY_FAILURE, REASON_LOW_HEMOGLOBIN, REASON_LOW_SODIUM,
};
use crate::features::ClinicalFlags;

/// Three-level cardiac risk category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum HeartRisk {
    Low,
    Moderate,
    High,
}

impl HeartRisk {
    /// Maps a rule score to its category.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_HEART_SCORE {
            HeartRisk::High
        } else if score >= MODERATE_HEART_SCORE {
            HeartRisk::Moderate
        } else {
            HeartRisk::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeartRisk::Low => "Low",
            HeartRisk::Moderate => "Moderate",
            HeartRisk::High => "High",
        }
    }
}

impl std::fmt::Display for HeartRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the cardiac rules for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeartAssessment {
    pub score: u8,
    pub risk: HeartRisk,
    pub reasons: Vec<&'static str>,
}

/// Tallies the cardiac score from the clinical flags.
///
/// `creatinine` is needed because kidney failure requires a stricter value
/// than the renal dysfunction flag alone.
pub fn score_heart_risk(flags: &ClinicalFlags, creatinine: f64) -> HeartAssessment {
    let rules = [
        (flags.elderly_risk, REASON_ADVANCED_AGE),
        (
            flags.renal_dysfunction && creatinine >= KIDNEY_FAILURE_CREATININE,
            REASON_KIDNEY_FAILURE,
        ),
        (flags.severe_anemia, REASON_LOW_HEMOGLOBIN),
        (flags.hyponatremia, REASON_LOW_SODIUM),
        (flags.leukocytosis, REASON_HIGH_WBC),
    ];

    let reasons: Vec<&'static str> = rules
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, reason)| reason)
        .collect();
    // At most five rules fire, so the count always fits.
    let score = reasons.len() as u8;

    HeartAssessment {
        score,
        risk: HeartRisk::from_score(score),
        reasons,
    }
}
