//! Wire types for the SALTGUARD API.
//!
//! These mirror the core domain types but own the JSON field names and the
//! OpenAPI schemas, so the domain crate stays free of transport concerns.

use saltguard_core::{ClinicalFlags, PatientInput, RiskAssessment};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static liveness payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusRes {
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Six lab/vital measurements to score. All fields are required numbers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictReq {
    #[schema(example = 70.0)]
    pub age: f64,
    /// Serum sodium (mmol/L)
    #[schema(example = 130.0)]
    pub sodium: f64,
    /// Serum creatinine (mg/dL)
    #[schema(example = 2.0)]
    pub creatinine: f64,
    /// Hemoglobin (g/dL)
    #[schema(example = 8.0)]
    pub hemoglobin: f64,
    /// White blood cell count (cells/µL)
    #[schema(example = 12000.0)]
    pub wbc: f64,
    /// Blood urea nitrogen (mg/dL)
    #[schema(example = 40.0)]
    pub bun: f64,
}

impl From<PredictReq> for PatientInput {
    fn from(req: PredictReq) -> Self {
        PatientInput {
            age: req.age,
            sodium: req.sodium,
            creatinine: req.creatinine,
            hemoglobin: req.hemoglobin,
            wbc: req.wbc,
            bun: req.bun,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClinicalFlagsRes {
    pub renal_dysfunction: bool,
    pub severe_anemia: bool,
    pub hyponatremia: bool,
    pub severe_hyponatremia: bool,
    pub leukocytosis: bool,
    pub elderly_risk: bool,
}

impl From<ClinicalFlags> for ClinicalFlagsRes {
    fn from(flags: ClinicalFlags) -> Self {
        ClinicalFlagsRes {
            renal_dysfunction: flags.renal_dysfunction,
            severe_anemia: flags.severe_anemia,
            hyponatremia: flags.hyponatremia,
            severe_hyponatremia: flags.severe_hyponatremia,
            leukocytosis: flags.leukocytosis,
            elderly_risk: flags.elderly_risk,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictRes {
    /// One of "Low Risk", "Moderate Risk", "High Risk", "Very High Risk"
    #[schema(example = "High Risk")]
    pub mortality_risk: String,
    /// Percentage in [0, 100], two decimals
    #[schema(example = 71.09)]
    pub mortality_probability: f64,
    /// One of "Low", "Moderate", "High"
    #[schema(example = "High")]
    pub heart_risk: String,
    #[schema(example = 5)]
    pub heart_risk_score: u8,
    pub heart_risk_reasons: Vec<String>,
    pub clinical_flags: ClinicalFlagsRes,
}

impl From<RiskAssessment> for PredictRes {
    fn from(assessment: RiskAssessment) -> Self {
        PredictRes {
            mortality_risk: assessment.mortality_risk.as_str().to_string(),
            mortality_probability: assessment.mortality_probability,
            heart_risk: assessment.heart_risk.as_str().to_string(),
            heart_risk_score: assessment.heart_risk_score,
            heart_risk_reasons: assessment
                .heart_risk_reasons
                .into_iter()
                .map(String::from)
                .collect(),
            clinical_flags: assessment.clinical_flags.into(),
        }
    }
}
