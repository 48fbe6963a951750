use async_trait::async_trait;
use clearreq_ai::{Advice, AdviceError, AdviceRequest, RequirementAdvisor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LlmError;
use crate::prompt::{SYSTEM_PROMPT, build_user_prompt, parse_advice};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-3-5-haiku-latest";
pub const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 512;

/// Messages-API advisor.
pub struct AnthropicAdvisor {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'static str,
    messages: [UserMessage<'a>; 1],
}

#[derive(Serialize)]
struct UserMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicAdvisor {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &AdviceRequest) -> Result<Advice, LlmError> {
        let url = format!("{}/v1/messages", self.base_url);
        let user = build_user_prompt(request);
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            temperature: 0.0,
            system: SYSTEM_PROMPT,
            messages: [UserMessage {
                role: "user",
                content: &user,
            }],
        };

        debug!(url = %url, model = %self.model, "requesting anthropic advice");
        let resp = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LlmError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let reply: MessagesResponse = serde_json::from_str(&resp.text().await?)?;
        let text = reply
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or(LlmError::EmptyResponse)?;
        parse_advice(&text)
    }
}

#[async_trait]
impl RequirementAdvisor for AnthropicAdvisor {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<Advice, AdviceError> {
        Ok(self.complete(request).await?)
    }
}

impl std::fmt::Debug for AnthropicAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicAdvisor")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
