use std::sync::Arc;

use clearreq_ai::EnhancementStrategy;
use tracing::info;

use crate::{AnthropicAdvisor, OpenAiAdvisor, anthropic, openai};

/// Provider credentials and endpoints as read from the environment.
#[derive(Clone)]
pub struct ProviderConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub anthropic_base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: openai::DEFAULT_MODEL.to_string(),
            openai_base_url: openai::DEFAULT_BASE_URL.to_string(),
            anthropic_api_key: None,
            anthropic_model: anthropic::DEFAULT_MODEL.to_string(),
            anthropic_base_url: anthropic::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("anthropic_api_key", &self.anthropic_api_key.as_ref().map(|_| "<redacted>"))
            .field("anthropic_model", &self.anthropic_model)
            .field("anthropic_base_url", &self.anthropic_base_url)
            .finish()
    }
}

fn present(key: &Option<String>) -> Option<&str> {
    key.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

/// Pick the enhancement strategy: OpenAI, then Anthropic, then local heuristics.
///
/// Missing credentials are the normal case and select [`EnhancementStrategy::Local`].
pub fn select_strategy(config: &ProviderConfig) -> EnhancementStrategy {
    if let Some(key) = present(&config.openai_api_key) {
        info!(provider = "openai", model = %config.openai_model, "remote enhancement enabled");
        let advisor = OpenAiAdvisor::new(key, config.openai_model.clone())
            .with_base_url(&config.openai_base_url);
        return EnhancementStrategy::Remote(Arc::new(advisor));
    }
    if let Some(key) = present(&config.anthropic_api_key) {
        info!(
            provider = "anthropic",
            model = %config.anthropic_model,
            "remote enhancement enabled"
        );
        let advisor = AnthropicAdvisor::new(key, config.anthropic_model.clone())
            .with_base_url(&config.anthropic_base_url);
        return EnhancementStrategy::Remote(Arc::new(advisor));
    }
    info!("no provider credentials, using local enhancement");
    EnhancementStrategy::Local
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_selects_local() {
        assert_eq!(select_strategy(&ProviderConfig::default()).name(), "local");
    }

    #[test]
    fn blank_key_counts_as_absent() {
        let config = ProviderConfig {
            openai_api_key: Some("   ".into()),
            ..ProviderConfig::default()
        };
        assert_eq!(select_strategy(&config).name(), "local");
    }

    #[test]
    fn openai_takes_precedence() {
        let config = ProviderConfig {
            openai_api_key: Some("sk".into()),
            anthropic_api_key: Some("ak".into()),
            ..ProviderConfig::default()
        };
        assert_eq!(select_strategy(&config).name(), "openai");
    }

    #[test]
    fn anthropic_when_only_its_key_is_set() {
        let config = ProviderConfig {
            anthropic_api_key: Some("ak".into()),
            ..ProviderConfig::default()
        };
        assert_eq!(select_strategy(&config).name(), "anthropic");
    }

    #[test]
    fn debug_redacts_keys() {
        let config = ProviderConfig {
            openai_api_key: Some("sk-live-123".into()),
            ..ProviderConfig::default()
        };
        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-live-123"));
        assert!(printed.contains("<redacted>"));
    }
}
