//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handling never reads environment variables.

use crate::constants::{DEFAULT_GENDER_CODE, DEFAULT_MODEL_PATH};
use crate::{RiskError, RiskResult};
use std::path::{Path, PathBuf};

/// Constants the scoring pipeline feeds to the model on behalf of the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringSettings {
    /// Value placed in the model's `gender` slot. Gender is not collected per
    /// request; the default is [`DEFAULT_GENDER_CODE`].
    pub gender_code: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            gender_code: DEFAULT_GENDER_CODE,
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    model_path: PathBuf,
    settings: ScoringSettings,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(model_path: PathBuf, settings: ScoringSettings) -> RiskResult<Self> {
        if !settings.gender_code.is_finite() {
            return Err(RiskError::InvalidInput(
                "gender code must be a finite number".into(),
            ));
        }

        Ok(Self {
            model_path,
            settings,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn settings(&self) -> ScoringSettings {
        self.settings
    }
}

/// Resolve the model artifact path without reading environment variables.
///
/// If `override_path` is provided, it must be an existing file. Otherwise this looks for
/// `models/mortality_model.json` relative to the current working directory and then walks up
/// from `CARGO_MANIFEST_DIR`.
pub fn resolve_model_path(override_path: Option<PathBuf>) -> RiskResult<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        return Err(RiskError::InvalidInput(format!(
            "SALTGUARD_MODEL_PATH override is not a file: {}",
            path.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_MODEL_PATH);
    if cwd_relative.is_file() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_MODEL_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(RiskError::InvalidInput(format!(
        "could not locate model artifact {}",
        DEFAULT_MODEL_PATH
    )))
}

/// Parse the gender code from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_GENDER_CODE`].
pub fn gender_code_from_env_value(value: Option<String>) -> RiskResult<f64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_GENDER_CODE),
        Some(v) => match v.parse::<f64>() {
            Ok(code) if code.is_finite() => Ok(code),
            _ => Err(RiskError::InvalidInput(format!(
                "SALTGUARD_GENDER_CODE must be a finite number, got {:?}",
                v
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_code_defaults_when_unset_or_blank() {
        assert_eq!(gender_code_from_env_value(None).unwrap(), 1.0);
        assert_eq!(gender_code_from_env_value(Some("   ".into())).unwrap(), 1.0);
    }

    #[test]
    fn test_gender_code_parses_numbers() {
        assert_eq!(gender_code_from_env_value(Some("0".into())).unwrap(), 0.0);
        assert_eq!(gender_code_from_env_value(Some(" 1.0 ".into())).unwrap(), 1.0);
    }

    #[test]
    fn test_gender_code_rejects_garbage() {
        let err = gender_code_from_env_value(Some("male".into())).expect_err("should reject");
        assert!(matches!(err, RiskError::InvalidInput(msg) if msg.contains("finite number")));

        assert!(gender_code_from_env_value(Some("NaN".into())).is_err());
        assert!(gender_code_from_env_value(Some("inf".into())).is_err());
    }

    #[test]
    fn test_core_config_rejects_non_finite_gender() {
        let settings = ScoringSettings {
            gender_code: f64::NAN,
        };
        assert!(CoreConfig::new(PathBuf::from("model.json"), settings).is_err());
    }

    #[test]
    fn test_core_config_keeps_values() {
        let cfg = CoreConfig::new(PathBuf::from("model.json"), ScoringSettings::default()).unwrap();
        assert_eq!(cfg.model_path(), Path::new("model.json"));
        assert_eq!(cfg.settings().gender_code, DEFAULT_GENDER_CODE);
    }

    #[test]
    fn test_resolve_model_path_accepts_existing_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(resolve_model_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn test_resolve_model_path_rejects_missing_override() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_model_path(Some(dir.path().join("absent.json")))
            .expect_err("should reject missing file");
        assert!(matches!(err, RiskError::InvalidInput(msg) if msg.contains("not a file")));
    }

    #[test]
    fn test_resolve_model_path_rejects_directory_override() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_model_path(Some(dir.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_resolve_model_path_finds_shipped_artifact() {
        let path = resolve_model_path(None).unwrap();
        assert!(path.ends_with(DEFAULT_MODEL_PATH));
    }
}
