#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read model artifact: {0}")]
    ModelRead(std::io::Error),
    #[error("failed to parse model artifact: {0}")]
    ModelParse(serde_json::Error),
    #[error("invalid model artifact: {0}")]
    InvalidModel(String),
    #[error("model expects features that cannot be assembled: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },
    #[error("feature row has {actual} values but the model expects {expected}")]
    FeatureCount { expected: usize, actual: usize },
    #[error("prediction failed: {0}")]
    Prediction(String),
}

pub type RiskResult<T> = std::result::Result<T, RiskError>;
