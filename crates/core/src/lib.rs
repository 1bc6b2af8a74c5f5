//! # SALTGUARD Core
//!
//! Core business logic for the SALTGUARD clinical risk-scoring service.
//!
//! This crate contains the pure scoring pipeline:
//! - Feature engineering from six lab/vital measurements
//! - Mortality probability from an injected pre-trained classifier
//! - Rule-based cardiac risk scoring
//! - Loading and validation of the gradient-boosted model artifact
//!
//! **No API concerns**: HTTP servers, CORS and wire schemas belong in `api-rest` or `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod heart;
pub mod model;
pub mod mortality;
pub mod service;
pub mod vector;

pub use config::{CoreConfig, ScoringSettings};
pub use constants::{DEFAULT_GENDER_CODE, DEFAULT_MODEL_PATH};
pub use error::{RiskError, RiskResult};
pub use features::{derive_features, ClinicalFlags, DerivedFeatures, PatientInput};
pub use heart::{score_heart_risk, HeartAssessment, HeartRisk};
pub use model::{GradientBoostedModel, RiskModel};
pub use mortality::MortalityRisk;
pub use service::{RiskAssessment, RiskService};
pub use vector::ModelFeatureVector;
