//! Upload validation, text extraction and cleaning.

pub mod clean;
mod error;
pub mod extract;

pub use clean::clean_text;
pub use error::IngestError;
pub use extract::{DocumentKind, MAX_UPLOAD_BYTES, extract_text};
