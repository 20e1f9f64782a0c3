use std::sync::Arc;

use autopath_core::provider::{CurriculumProvider, TemplateProvider};
use autopath_llm::{LlmConfig, LlmProvider};

use crate::config::{ConfigError, ProviderKind, ServerConfig};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generator behind the follow-up and plan endpoints.
    pub provider: Arc<dyn CurriculumProvider>,
}

impl AppState {
    pub fn new(config: ServerConfig, provider: Arc<dyn CurriculumProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}

/// Construct the provider selected by `config.provider`.
///
/// The `openai` provider reads [`LlmConfig::from_env`], so a missing API key
/// fails here rather than on the first request.
pub fn build_provider(config: &ServerConfig) -> Result<Arc<dyn CurriculumProvider>, ConfigError> {
    build_provider_from(config, |var| std::env::var(var).ok())
}

/// Same as [`build_provider`], reading LLM settings through `lookup`.
pub fn build_provider_from<F>(
    config: &ServerConfig,
    lookup: F,
) -> Result<Arc<dyn CurriculumProvider>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match config.provider {
        ProviderKind::Template => Ok(Arc::new(TemplateProvider)),
        ProviderKind::OpenAi => {
            let llm_config = LlmConfig::from_lookup(lookup)?;
            tracing::info!(
                model = %llm_config.model,
                base_url = %llm_config.base_url,
                timeout_secs = llm_config.timeout_secs,
                "Using LLM curriculum provider",
            );
            Ok(Arc::new(LlmProvider::from_config(&llm_config)?))
        }
    }
}
