//! Hosted model advisors: request/response plumbing for the optional remote
//! enhancement strategy.

pub mod anthropic;
mod config;
mod error;
pub mod openai;
pub mod prompt;

pub use anthropic::AnthropicAdvisor;
pub use config::{ProviderConfig, select_strategy};
pub use error::LlmError;
pub use openai::OpenAiAdvisor;
