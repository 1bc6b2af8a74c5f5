//! Assembly of the model's input row.
//!
//! The service offers a fixed set of named slots. The row handed to the model
//! is those slots selected in the order the model declares; a declared name
//! with no slot is a schema mismatch.

use crate::constants::{
    FEATURE_AGE, FEATURE_BUN, FEATURE_BUN_CREATININE_RATIO, FEATURE_CREATININE,
    FEATURE_ELDERLY_RISK, FEATURE_GENDER, FEATURE_HEMOGLOBIN, FEATURE_HYPONATREMIA,
    FEATURE_LEUKOCYTOSIS, FEATURE_RENAL_DYSFUNCTION, FEATURE_SEVERE_ANEMIA,
    FEATURE_SEVERE_HYPONATREMIA, FEATURE_SODIUM, FEATURE_WBC,
};
use crate::features::{DerivedFeatures, PatientInput};
use crate::{RiskError, RiskResult};

/// A feature row ordered to match a model's declared schema.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelFeatureVector {
    values: Vec<f64>,
}

impl ModelFeatureVector {
    /// Build the row for `expected` feature names.
    ///
    /// # Errors
    /// Returns `RiskError::SchemaMismatch` listing every expected name that
    /// has no slot.
    pub fn assemble(
        expected: &[String],
        input: &PatientInput,
        derived: &DerivedFeatures,
        gender_code: f64,
    ) -> RiskResult<Self> {
        let slots = feature_slots(input, derived, gender_code);

        let mut values = Vec::with_capacity(expected.len());
        let mut missing = Vec::new();
        for name in expected {
            match slots.iter().find(|(slot, _)| *slot == name.as_str()) {
                Some((_, value)) => values.push(*value),
                None => missing.push(name.clone()),
            }
        }

        if !missing.is_empty() {
            return Err(RiskError::SchemaMismatch { missing });
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Every named value the service can supply to a model.
pub fn feature_slots(
    input: &PatientInput,
    derived: &DerivedFeatures,
    gender_code: f64,
) -> [(&'static str, f64); 14] {
    let flags = &derived.flags;
    [
        (FEATURE_AGE, input.age),
        (FEATURE_GENDER, gender_code),
        (FEATURE_CREATININE, input.creatinine),
        (FEATURE_HEMOGLOBIN, input.hemoglobin),
        (FEATURE_SODIUM, input.sodium),
        (FEATURE_BUN, input.bun),
        (FEATURE_WBC, input.wbc),
        (FEATURE_BUN_CREATININE_RATIO, derived.bun_creatinine_ratio),
        (FEATURE_RENAL_DYSFUNCTION, indicator(flags.renal_dysfunction)),
        (FEATURE_SEVERE_ANEMIA, indicator(flags.severe_anemia)),
        (FEATURE_HYPONATREMIA, indicator(flags.hyponatremia)),
        (FEATURE_SEVERE_HYPONATREMIA, indicator(flags.severe_hyponatremia)),
        (FEATURE_LEUKOCYTOSIS, indicator(flags.leukocytosis)),
        (FEATURE_ELDERLY_RISK, indicator(flags.elderly_risk)),
    ]
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}
