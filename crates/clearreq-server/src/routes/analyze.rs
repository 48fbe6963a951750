use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Json,
};
use clearreq_ai::ThreadSource;
use clearreq_core::AnalysisReport;
use serde::Serialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, Result};

const FILE_FIELD: &str = "file";

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No file provided".to_string()))?;

    info!(filename = %filename, bytes = bytes.len(), "processing upload");
    let text = extract_blocking(filename.clone(), bytes).await?;
    let report = state.analyzer.analyze(&filename, &text, &mut ThreadSource).await;
    Ok(Json(report))
}

/// Text extraction (PDF parsing in particular) runs on the blocking pool.
async fn extract_blocking(filename: String, bytes: Bytes) -> Result<String> {
    tokio::task::spawn_blocking(move || clearreq_ingest::extract_text(&filename, &bytes))
        .await
        .map_err(|e| ApiError::Unprocessable(format!("text extraction aborted: {e}")))?
        .map_err(ApiError::from)
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    history: Vec<AnalysisReport>,
}

/// GET /api/history
pub async fn history() -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn blocking_extraction_returns_cleaned_text() {
        let bytes = Bytes::from_static(b"The system  shall\r\nlog in.");
        let text = extract_blocking("r.txt".into(), bytes).await.unwrap();
        assert_eq!(text, "The system shall log in.");
    }

    #[tokio::test]
    async fn blocking_extraction_maps_broken_pdf_to_422() {
        let err = extract_blocking("broken.pdf".into(), Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn blocking_extraction_keeps_input_errors_as_400() {
        let err = extract_blocking("notes.rtf".into(), Bytes::from_static(b"text"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
