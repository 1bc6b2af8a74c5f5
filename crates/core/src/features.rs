//! Feature engineering.
//!
//! Derives the secondary clinical indicators (BUN/creatinine ratio and six
//! independent flags) from the six raw measurements. Every threshold is
//! applied exactly as stated, with no rounding or unit conversion.

use serde::Serialize;

use crate::constants::{
    ELDERLY_AGE, HYPONATREMIA_SODIUM, LEUKOCYTOSIS_WBC, RENAL_DYSFUNCTION_CREATININE,
    SEVERE_ANEMIA_HEMOGLOBIN, SEVERE_HYPONATREMIA_SODIUM,
};

/// The six raw measurements scored for a patient.
///
/// No range validation is applied. Negative or biologically impossible values
/// are accepted and scored as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PatientInput {
    pub age: f64,
    pub sodium: f64,
    pub creatinine: f64,
    pub hemoglobin: f64,
    pub wbc: f64,
    pub bun: f64,
}

impl PatientInput {
    /// Names of the measurements that are below zero.
    ///
    /// Such values are still scored. Callers use this to log implausible input.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        [
            ("age", self.age),
            ("sodium", self.sodium),
            ("creatinine", self.creatinine),
            ("hemoglobin", self.hemoglobin),
            ("wbc", self.wbc),
            ("bun", self.bun),
        ]
        .into_iter()
        .filter(|(_, value)| *value < 0.0)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Binary clinical indicators.
///
/// The flags are independent: `severe_hyponatremia` implies `hyponatremia`
/// only because its threshold is lower, not because the flags are tiered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClinicalFlags {
    pub renal_dysfunction: bool,
    pub severe_anemia: bool,
    pub hyponatremia: bool,
    pub severe_hyponatremia: bool,
    pub leukocytosis: bool,
    pub elderly_risk: bool,
}

/// Values derived from a [`PatientInput`] for a single request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedFeatures {
    pub bun_creatinine_ratio: f64,
    pub flags: ClinicalFlags,
}

/// BUN divided by creatinine, or zero when creatinine is not positive.
pub fn bun_creatinine_ratio(bun: f64, creatinine: f64) -> f64 {
    if creatinine > 0.0 {
        bun / creatinine
    } else {
        0.0
    }
}

/// Computes the ratio and flags for a patient. Never fails.
pub fn derive_features(input: &PatientInput) -> DerivedFeatures {
    DerivedFeatures {
        bun_creatinine_ratio: bun_creatinine_ratio(input.bun, input.creatinine),
        flags: ClinicalFlags {
            renal_dysfunction: input.creatinine >= RENAL_DYSFUNCTION_CREATININE,
            severe_anemia: input.hemoglobin < SEVERE_ANEMIA_HEMOGLOBIN,
            hyponatremia: input.sodium < HYPONATREMIA_SODIUM,
            severe_hyponatremia: input.sodium < SEVERE_HYPONATREMIA_SODIUM,
            leukocytosis: input.wbc > LEUKOCYTOSIS_WBC,
            elderly_risk: input.age >= ELDERLY_AGE,
        },
    }
}
