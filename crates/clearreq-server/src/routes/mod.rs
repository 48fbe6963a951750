//! Route table:
//!
//! - `GET /` - liveness message
//! - `GET /health` - service status and active enhancement strategy
//! - `POST /api/analyze` - multipart upload (`file` field) → analysis report
//! - `GET /api/history` - always empty

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub mod analyze;
pub mod health;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/analyze", post(analyze::analyze))
        .route("/api/history", get(analyze::history))
}
