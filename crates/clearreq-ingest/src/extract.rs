use tracing::debug;

use crate::clean::clean_text;
use crate::error::IngestError;

/// Largest accepted upload, in bytes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Text,
    Pdf,
}

impl DocumentKind {
    /// Kind from the filename extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Result<Self, IngestError> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".txt") {
            Ok(Self::Text)
        } else if lower.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else {
            Err(IngestError::UnsupportedFileType(filename.to_string()))
        }
    }
}

/// Validate an upload and return its cleaned text.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, IngestError> {
    let kind = DocumentKind::from_filename(filename)?;
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(IngestError::TooLarge {
            size: bytes.len(),
            limit: MAX_UPLOAD_BYTES,
        });
    }

    let raw = match kind {
        DocumentKind::Text => decode_text(bytes),
        DocumentKind::Pdf => extract_pdf(bytes)?,
    };
    let text = clean_text(&raw);
    debug!(filename, ?kind, bytes = bytes.len(), chars = text.len(), "extracted document text");
    Ok(text)
}

/// UTF-8, falling back to Latin-1 (every byte maps to one code point).
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> Result<String, IngestError> {
    // pdf-extract can panic on malformed documents; uploads are untrusted.
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| IngestError::Pdf("document could not be parsed".to_string()))?
        .map_err(|e| IngestError::Pdf(e.to_string()))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> Result<String, IngestError> {
    Err(IngestError::FeatureDisabled("pdf"))
}
