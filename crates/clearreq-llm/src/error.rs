use clearreq_ai::AdviceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response contained no text")]
    EmptyResponse,
    #[error("invalid advice: {0}")]
    InvalidAdvice(String),
}

impl From<LlmError> for AdviceError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) if e.is_timeout() => AdviceError::Transport(format!("timeout: {e}")),
            LlmError::Http(e) => AdviceError::Transport(e.to_string()),
            LlmError::Server { status, body } => AdviceError::Status { status, body },
            other @ (LlmError::Json(_) | LlmError::EmptyResponse | LlmError::InvalidAdvice(_)) => {
                AdviceError::Malformed(other.to_string())
            }
        }
    }
}
