//! HTTP surface for the analyzer: upload a document, get an analysis report.

mod error;
mod routes;
mod server;

use std::sync::Arc;

use clearreq_ai::Analyzer;

pub use error::{ApiError, ServerError};
pub use server::{DEFAULT_ADDR, DEFAULT_CORS_ORIGINS, ServerConfig, create_app, run_server};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}
