use async_trait::async_trait;
use clearreq_ai::{Advice, AdviceError, AdviceRequest, RequirementAdvisor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LlmError;
use crate::prompt::{SYSTEM_PROMPT, build_user_prompt, parse_advice};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completions advisor.
pub struct OpenAiAdvisor {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

impl OpenAiAdvisor {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Point at a compatible endpoint, e.g. `http://localhost:8080` (no trailing slash needed).
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &AdviceRequest) -> Result<Advice, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let user = build_user_prompt(request);
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat { kind: "json_object" },
        };

        debug!(url = %url, model = %self.model, "requesting openai advice");
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
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

        // Decode via serde_json so a bad envelope counts as malformed, not transport.
        let reply: ChatResponse = serde_json::from_str(&resp.text().await?)?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)?;
        parse_advice(&content)
    }
}

#[async_trait]
impl RequirementAdvisor for OpenAiAdvisor {
    fn name(&self) -> &str {
        "openai"
    }

    async fn advise(&self, request: &AdviceRequest) -> Result<Advice, AdviceError> {
        Ok(self.complete(request).await?)
    }
}

impl std::fmt::Debug for OpenAiAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAdvisor")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
