//! Risk scoring service.
//!
//! Ties feature engineering, the mortality model and the cardiac rules into a
//! single assessment. The model is injected so callers and tests choose the
//! implementation.

use std::sync::Arc;

use serde::Serialize;

use crate::config::ScoringSettings;
use crate::features::{derive_features, ClinicalFlags, PatientInput};
use crate::heart::{score_heart_risk, HeartRisk};
use crate::model::RiskModel;
use crate::mortality::{probability_to_percent, MortalityRisk};
use crate::vector::ModelFeatureVector;
use crate::{RiskError, RiskResult};

/// Full outcome for one patient.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub mortality_risk: MortalityRisk,
    /// Percentage, rounded to two decimals
    pub mortality_probability: f64,
    pub heart_risk: HeartRisk,
    pub heart_risk_score: u8,
    pub heart_risk_reasons: Vec<&'static str>,
    pub clinical_flags: ClinicalFlags,
}

/// Read-only scoring service shared by every request.
#[derive(Clone)]
pub struct RiskService {
    model: Arc<dyn RiskModel>,
    settings: ScoringSettings,
}

impl RiskService {
    pub fn new(model: Arc<dyn RiskModel>, settings: ScoringSettings) -> Self {
        Self { model, settings }
    }

    pub fn settings(&self) -> ScoringSettings {
        self.settings
    }

    /// Feature names in the order the model expects them.
    pub fn feature_names(&self) -> &[String] {
        self.model.feature_names()
    }

    /// Confirm every feature the model declares can be assembled.
    ///
    /// Intended to run once at startup so a mismatched artifact is rejected before
    /// any request is served.
    ///
    /// # Errors
    /// Returns `RiskError::SchemaMismatch` naming the features that cannot be supplied.
    pub fn check_schema(&self) -> RiskResult<()> {
        let sample = PatientInput {
            age: 0.0,
            sodium: 0.0,
            creatinine: 0.0,
            hemoglobin: 0.0,
            wbc: 0.0,
            bun: 0.0,
        };
        let derived = derive_features(&sample);
        ModelFeatureVector::assemble(
            self.model.feature_names(),
            &sample,
            &derived,
            self.settings.gender_code,
        )
        .map(|_| ())
    }

    /// Score a patient.
    ///
    /// # Errors
    /// Returns an error if the model's schema cannot be satisfied or the model
    /// fails to produce a probability in `[0, 1]`. There are no partial results.
    pub fn assess(&self, input: &PatientInput) -> RiskResult<RiskAssessment> {
        let derived = derive_features(input);

        let vector = ModelFeatureVector::assemble(
            self.model.feature_names(),
            input,
            &derived,
            self.settings.gender_code,
        )?;
        let [_, positive] = self.model.predict_proba(vector.values())?;
        if !(0.0..=1.0).contains(&positive) {
            return Err(RiskError::Prediction(format!(
                "positive-class probability {} is outside [0, 1]",
                positive
            )));
        }

        let mortality_probability = probability_to_percent(positive);
        let heart = score_heart_risk(&derived.flags, input.creatinine);

        Ok(RiskAssessment {
            mortality_risk: MortalityRisk::from_percent(mortality_probability),
            mortality_probability,
            heart_risk: heart.risk,
            heart_risk_score: heart.score,
            heart_risk_reasons: heart.reasons,
            clinical_flags: derived.flags,
        })
    }
}

impl std::fmt::Debug for RiskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskService")
            .field("feature_names", &self.model.feature_names())
            .field("settings", &self.settings)
            .finish()
    }
}
