use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Unsupported file type. Supported types: .txt, .pdf")]
    UnsupportedFileType(String),
    #[error("file is {size} bytes; the limit is {limit} bytes")]
    TooLarge { size: usize, limit: usize },
    #[error("could not extract text from PDF: {0}")]
    Pdf(String),
    #[error("support for this format requires the '{0}' feature")]
    FeatureDisabled(&'static str),
}

impl IngestError {
    /// Whether the upload itself was rejected, as opposed to extraction failing on accepted input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::UnsupportedFileType(_) | Self::TooLarge { .. })
    }
}
