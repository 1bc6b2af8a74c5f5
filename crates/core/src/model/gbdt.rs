//! Gradient-boosted tree classifier loaded from a JSON artifact.
//!
//! The artifact declares its feature names in training order, a base margin and
//! the trees. The positive-class probability is the logistic of the base margin
//! plus the sum of the leaves each tree reaches.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::tree::Tree;
use super::RiskModel;
use crate::constants::MODEL_FORMAT_VERSION;
use crate::{RiskError, RiskResult};

/// Binary gradient-boosted tree ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedModel {
    /// Artifact format version (always 1 for now)
    pub version: u32,

    /// Feature names in the order rows must be supplied
    pub feature_names: Vec<String>,

    /// Raw score added before the logistic transform
    #[serde(default)]
    pub base_margin: f64,

    pub trees: Vec<Tree>,
}

impl GradientBoostedModel {
    pub fn new(feature_names: Vec<String>, base_margin: f64, trees: Vec<Tree>) -> Self {
        Self {
            version: MODEL_FORMAT_VERSION,
            feature_names,
            base_margin,
            trees,
        }
    }

    /// Validate model structure.
    pub fn validate(&self) -> RiskResult<()> {
        if self.version != MODEL_FORMAT_VERSION {
            return Err(RiskError::InvalidModel(format!(
                "unsupported model version: {}",
                self.version
            )));
        }

        if self.feature_names.is_empty() {
            return Err(RiskError::InvalidModel(
                "model declares no feature names".into(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.feature_names {
            if !seen.insert(name.as_str()) {
                return Err(RiskError::InvalidModel(format!(
                    "duplicate feature name: {}",
                    name
                )));
            }
        }

        if !self.base_margin.is_finite() {
            return Err(RiskError::InvalidModel(
                "base_margin must be finite".into(),
            ));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_names.len())
                .map_err(|e| RiskError::InvalidModel(format!("tree {}: {}", i, e)))?;
        }

        Ok(())
    }

    /// Parse and validate a model from JSON text.
    pub fn from_json_str(json: &str) -> RiskResult<Self> {
        let model: Self = serde_json::from_str(json).map_err(RiskError::ModelParse)?;
        model.validate()?;
        Ok(model)
    }

    /// Load model from JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> RiskResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(RiskError::ModelRead)?;
        let model = Self::from_json_str(&json)?;
        tracing::info!(
            "Model loaded from {} ({} trees, {} features)",
            path.display(),
            model.num_trees(),
            model.feature_names.len()
        );
        Ok(model)
    }

    /// Raw additive score for a row.
    pub fn margin(&self, row: &[f64]) -> RiskResult<f64> {
        if row.len() != self.feature_names.len() {
            return Err(RiskError::FeatureCount {
                expected: self.feature_names.len(),
                actual: row.len(),
            });
        }

        let mut sum = self.base_margin;
        for (i, tree) in self.trees.iter().enumerate() {
            let leaf = tree.evaluate(row).ok_or_else(|| {
                RiskError::Prediction(format!("tree {} could not be evaluated", i))
            })?;
            sum += leaf;
        }

        Ok(sum)
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }
}

impl RiskModel for GradientBoostedModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, row: &[f64]) -> RiskResult<[f64; 2]> {
        let positive = sigmoid(self.margin(row)?);
        if !positive.is_finite() {
            return Err(RiskError::Prediction(
                "model produced a non-finite probability".into(),
            ));
        }
        Ok([1.0 - positive, positive])
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    fn age_model() -> GradientBoostedModel {
        GradientBoostedModel::new(
            vec!["anchor_age".into(), "Creatinine".into()],
            -0.5,
            vec![
                Tree::new(vec![
                    Node::Split {
                        feature: 0,
                        threshold: 65.0,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf { leaf: -1.0 },
                    Node::Leaf { leaf: 1.0 },
                ]),
                Tree::new(vec![
                    Node::Split {
                        feature: 1,
                        threshold: 2.0,
                        left: 1,
                        right: 2,
                    },
                    Node::Leaf { leaf: 0.0 },
                    Node::Leaf { leaf: 0.5 },
                ]),
            ],
        )
    }

    #[test]
    fn test_margin_sums_base_and_leaves() {
        let model = age_model();
        assert_eq!(model.margin(&[70.0, 2.5]).unwrap(), 1.0);
        assert_eq!(model.margin(&[40.0, 1.0]).unwrap(), -1.5);
    }

    #[test]
    fn test_predict_proba_applies_logistic() {
        let model = age_model();
        let [negative, positive] = model.predict_proba(&[70.0, 2.5]).unwrap();
        assert!((positive - 0.731_058_578_630_004_9).abs() < 1e-12);
        assert!((negative + positive - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_margin_is_even_odds() {
        let model = GradientBoostedModel::new(vec!["x".into()], 0.0, vec![]);
        assert_eq!(model.predict_proba(&[3.0]).unwrap(), [0.5, 0.5]);
    }

    #[test]
    fn test_predict_proba_rejects_wrong_row_width() {
        let err = age_model()
            .predict_proba(&[70.0])
            .expect_err("should reject short row");
        assert!(matches!(
            err,
            RiskError::FeatureCount {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_version() {
        let mut model = age_model();
        model.version = 2;
        let err = model.validate().expect_err("should reject version");
        assert!(matches!(err, RiskError::InvalidModel(msg) if msg.contains("version")));
    }

    #[test]
    fn test_validate_rejects_duplicate_feature_names() {
        let mut model = age_model();
        model.feature_names = vec!["anchor_age".into(), "anchor_age".into()];
        let err = model.validate().expect_err("should reject duplicates");
        assert!(matches!(err, RiskError::InvalidModel(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_validate_rejects_empty_schema() {
        let model = GradientBoostedModel::new(vec![], 0.0, vec![]);
        let err = model.validate().expect_err("should reject empty schema");
        assert!(matches!(err, RiskError::InvalidModel(msg) if msg.contains("no feature names")));
    }

    #[test]
    fn test_validate_reports_bad_tree_index() {
        let mut model = age_model();
        model.feature_names.pop();
        let err = model.validate().expect_err("should reject tree");
        assert!(matches!(err, RiskError::InvalidModel(msg) if msg.starts_with("tree 1:")));
    }

    #[test]
    fn test_from_json_str_parses_and_validates() {
        let json = r#"{
            "version": 1,
            "feature_names": ["anchor_age"],
            "base_margin": 0.25,
            "trees": [{"nodes": [{"leaf": 0.5}]}]
        }"#;
        let model = GradientBoostedModel::from_json_str(json).unwrap();
        assert_eq!(model.num_trees(), 1);
        assert_eq!(model.margin(&[1.0]).unwrap(), 0.75);
    }

    #[test]
    fn test_from_json_str_base_margin_defaults_to_zero() {
        let json = r#"{"version": 1, "feature_names": ["a"], "trees": []}"#;
        let model = GradientBoostedModel::from_json_str(json).unwrap();
        assert_eq!(model.base_margin, 0.0);
    }

    #[test]
    fn test_from_json_str_rejects_malformed_json() {
        let err = GradientBoostedModel::from_json_str("{not json")
            .expect_err("should reject malformed json");
        assert!(matches!(err, RiskError::ModelParse(_)));
    }

    #[test]
    fn test_load_json_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, serde_json::to_string(&age_model()).unwrap()).unwrap();

        let loaded = GradientBoostedModel::load_json(&path).unwrap();
        assert_eq!(loaded, age_model());
        assert_eq!(loaded.num_trees(), 2);
    }

    #[test]
    fn test_load_json_rejects_invalid_model_after_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut model = age_model();
        model.feature_names.pop();
        std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

        let err = GradientBoostedModel::load_json(&path).expect_err("split feature out of range");
        assert!(matches!(err, RiskError::InvalidModel(_)));
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = GradientBoostedModel::load_json(dir.path().join("absent.json"))
            .expect_err("should fail to read");
        assert!(matches!(err, RiskError::ModelRead(_)));
    }
}
