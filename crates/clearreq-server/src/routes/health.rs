use axum::{extract::State, response::Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::AppState;

const READY: &str = "ready";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
    services: Services,
}

#[derive(Debug, Serialize)]
pub struct Services {
    file_processor: &'static str,
    ml_pipeline: &'static str,
    ai_analyzer: String,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "ClearReq API is running!",
        status: "healthy",
    })
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        version: env!("CARGO_PKG_VERSION"),
        services: Services {
            file_processor: READY,
            ml_pipeline: READY,
            ai_analyzer: state.analyzer.strategy().name().to_string(),
        },
    })
}
