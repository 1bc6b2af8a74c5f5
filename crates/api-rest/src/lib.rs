//! # API REST
//!
//! REST API implementation for SALTGUARD.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for the wire types and `saltguard-core` for scoring.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::Instrument;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    ClinicalFlagsRes, HealthRes, HealthService, PredictReq, PredictRes, StatusRes,
};
use saltguard_core::{PatientInput, RiskService};

/// Application state shared across REST API handlers
///
/// Holds the scoring service. The model inside it is loaded once at startup and is
/// read-only, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    risk_service: Arc<RiskService>,
}

impl AppState {
    pub fn new(risk_service: Arc<RiskService>) -> Self {
        Self { risk_service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(status, health, predict),
    components(schemas(StatusRes, HealthRes, PredictReq, PredictRes, ClinicalFlagsRes))
)]
pub struct ApiDoc;

/// Build the REST router with CORS and Swagger UI attached.
///
/// Cross-origin requests are accepted from any origin, with any method and header.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = StatusRes)
    )
)]
/// Liveness endpoint
///
/// Returns a static payload confirming the service is running.
#[axum::debug_handler]
async fn status() -> Json<StatusRes> {
    Json(HealthService::status())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/predict",
    request_body = PredictReq,
    responses(
        (status = 200, description = "Risk assessment", body = PredictRes),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Missing or non-numeric field"),
        (status = 500, description = "Internal server error")
    )
)]
/// Score a patient
///
/// Derives the clinical flags, asks the model for a mortality probability and tallies the
/// cardiac rule score. Malformed bodies are rejected by the `Json` extractor before any
/// scoring happens.
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - the model's declared features cannot be assembled, or
/// - the model fails to produce a probability.
#[axum::debug_handler]
async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictReq>,
) -> Result<Json<PredictRes>, (StatusCode, &'static str)> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("predict", %request_id);

    async move {
        let input = PatientInput::from(req);

        let negative = input.negative_fields();
        if !negative.is_empty() {
            tracing::warn!("scoring implausible negative values: {}", negative.join(", "));
        }

        match state.risk_service.assess(&input) {
            Ok(assessment) => {
                tracing::debug!(
                    "mortality={} ({:.2}%), heart={} (score {})",
                    assessment.mortality_risk,
                    assessment.mortality_probability,
                    assessment.heart_risk,
                    assessment.heart_risk_score
                );
                Ok(Json(PredictRes::from(assessment)))
            }
            Err(e) => {
                tracing::error!("Predict error: {:?}", e);
                Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
            }
        }
    }
    .instrument(span)
    .await
}
