use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use saltguard_core::{
    CoreConfig, GradientBoostedModel, RiskService, ScoringSettings,
    config::{gender_code_from_env_value, resolve_model_path},
};

/// Main entry point for the SALTGUARD application
///
/// Resolves configuration, loads the mortality model once and serves the REST API.
/// A restart is required to pick up a new model artifact.
///
/// # Environment Variables
/// - `SALTGUARD_REST_ADDR`: REST server address (default: "0.0.0.0:8000")
/// - `SALTGUARD_MODEL_PATH`: Model artifact (default: `models/mortality_model.json`, searched upwards)
/// - `SALTGUARD_GENDER_CODE`: Value fed to the model's gender feature (default: 1)
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, model loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("saltguard_run=info".parse()?)
                .add_directive("saltguard_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("SALTGUARD_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());

    let model_override = std::env::var("SALTGUARD_MODEL_PATH").ok().map(PathBuf::from);
    let gender_code = gender_code_from_env_value(std::env::var("SALTGUARD_GENDER_CODE").ok())?;
    let cfg = CoreConfig::new(
        resolve_model_path(model_override)?,
        ScoringSettings { gender_code },
    )?;

    let model = GradientBoostedModel::load_json(cfg.model_path())?;

    let risk_service = RiskService::new(Arc::new(model), cfg.settings());
    risk_service.check_schema()?;
    tracing::info!("Model features: {:?}", risk_service.feature_names());
    tracing::info!("Gender code fed to the model: {}", gender_code);

    let app = router(AppState::new(Arc::new(risk_service)));

    tracing::info!("++ Starting SALTGUARD REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
