//! Constants used throughout the SALTGUARD core crate.
//!
//! This module holds the clinical thresholds, the model feature slot names and
//! the default locations so that scoring rules live in one place.

/// Default location of the model artifact, relative to the workspace root.
pub const DEFAULT_MODEL_PATH: &str = "models/mortality_model.json";

/// Gender value fed to the model when the caller does not configure one.
///
/// Gender is not collected from the caller. The model was trained with it as a
/// feature, so a constant is supplied in its slot.
pub const DEFAULT_GENDER_CODE: f64 = 1.0;

/// Only supported model artifact format version.
pub const MODEL_FORMAT_VERSION: u32 = 1;

// Feature engineering thresholds.

/// Creatinine at or above this value flags renal dysfunction.
pub const RENAL_DYSFUNCTION_CREATININE: f64 = 1.5;
/// Hemoglobin below this value flags severe anemia.
pub const SEVERE_ANEMIA_HEMOGLOBIN: f64 = 9.0;
/// Sodium below this value flags hyponatremia.
pub const HYPONATREMIA_SODIUM: f64 = 135.0;
/// Sodium below this value flags severe hyponatremia.
pub const SEVERE_HYPONATREMIA_SODIUM: f64 = 125.0;
/// White-blood-cell count above this value flags leukocytosis.
pub const LEUKOCYTOSIS_WBC: f64 = 11_000.0;
/// Age at or above this value flags elderly risk.
pub const ELDERLY_AGE: f64 = 65.0;

// Cardiac rule engine.

/// Creatinine at or above this value (with renal dysfunction) scores kidney failure.
pub const KIDNEY_FAILURE_CREATININE: f64 = 2.0;
/// Highest score the cardiac rules can award.
pub const MAX_HEART_SCORE: u8 = 5;
/// Score at or above which heart risk is "High".
pub const HIGH_HEART_SCORE: u8 = 4;
/// Score at or above which heart risk is "Moderate".
pub const MODERATE_HEART_SCORE: u8 = 2;

pub const REASON_ADVANCED_AGE: &str = "Advanced age";
pub const REASON_KIDNEY_FAILURE: &str = "Kidney failure";
pub const REASON_LOW_HEMOGLOBIN: &str = "Low hemoglobin";
pub const REASON_LOW_SODIUM: &str = "Low sodium";
pub const REASON_HIGH_WBC: &str = "High WBC (infection)";

// Mortality categories, as exclusive lower bounds on the rounded percentage.

pub const VERY_HIGH_MORTALITY_PERCENT: f64 = 75.0;
pub const HIGH_MORTALITY_PERCENT: f64 = 50.0;
pub const MODERATE_MORTALITY_PERCENT: f64 = 25.0;

// Model feature slot names, as the classifier was trained on them.

pub const FEATURE_AGE: &str = "anchor_age";
pub const FEATURE_GENDER: &str = "gender";
pub const FEATURE_CREATININE: &str = "Creatinine";
pub const FEATURE_HEMOGLOBIN: &str = "Hemoglobin";
pub const FEATURE_SODIUM: &str = "Sodium";
pub const FEATURE_BUN: &str = "Urea Nitrogen";
pub const FEATURE_WBC: &str = "WBC";
pub const FEATURE_BUN_CREATININE_RATIO: &str = "bun_creatinine_ratio";
pub const FEATURE_RENAL_DYSFUNCTION: &str = "renal_dysfunction_flag";
pub const FEATURE_SEVERE_ANEMIA: &str = "severe_anemia";
pub const FEATURE_HYPONATREMIA: &str = "hyponatremia";
pub const FEATURE_SEVERE_HYPONATREMIA: &str = "severe_hyponatremia";
pub const FEATURE_LEUKOCYTOSIS: &str = "leukocytosis";
pub const FEATURE_ELDERLY_RISK: &str = "elderly_risk";
