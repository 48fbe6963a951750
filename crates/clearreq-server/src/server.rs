//! Server setup with Tower middleware

use std::net::SocketAddr;

use axum::{Router, extract::DefaultBodyLimit, http::HeaderValue};
use clearreq_ingest::MAX_UPLOAD_BYTES;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::AppState;
use crate::error::ServerError;
use crate::routes;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub cors_origins: Vec<String>,
}

/// Bind and serve until the process is stopped.
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServerError> {
    let strategy = state.analyzer.strategy().name().to_string();
    let app = create_app(state, &config.cors_origins)?;

    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, strategy = %strategy, "ClearReq API listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the application router with CORS, tracing and the upload size limit.
pub fn create_app(state: AppState, cors_origins: &[String]) -> Result<Router, ServerError> {
    Ok(routes::create_router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD))
        .layer(cors_layer(cors_origins)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(origins: &[String]) -> Result<CorsLayer, ServerError> {
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o.trim()).map_err(|_| ServerError::InvalidOrigin(o.clone())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}
