//! Completion Service provider implementations.
//!
//! Contains the OpenAI-compatible implementation of the [`LlmProvider`]
//! trait defined in `deskmate-core`, and a factory ([`create_provider`])
//! that builds it from the `[completion]` section of `config.toml`.
//!
//! [`LlmProvider`]: deskmate_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::SecretString;
use tracing::warn;

use deskmate_core::llm::box_provider::BoxLlmProvider;
use deskmate_types::config::CompletionConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{
    OPENAI_BASE_URL, OpenAiCompatConfig, gemini_defaults, glm_defaults, mistral_defaults,
    openai_defaults,
};

/// Create a [`BoxLlmProvider`] from a [`CompletionConfig`].
pub fn create_provider(config: &CompletionConfig, api_key: SecretString) -> BoxLlmProvider {
    BoxLlmProvider::new(OpenAiCompatibleProvider::new(provider_config(
        config, api_key,
    )))
}

/// Resolve the connection settings for the configured provider.
///
/// An explicit `base_url` wins. Otherwise known provider names get their
/// defaults, and unknown names fall back to the OpenAI endpoint.
fn provider_config(config: &CompletionConfig, api_key: SecretString) -> OpenAiCompatConfig {
    let model = config.model.as_str();
    if let Some(base_url) = &config.base_url {
        return OpenAiCompatConfig {
            provider_name: config.provider_name.clone(),
            base_url: base_url.clone(),
            api_key,
            model: model.to_string(),
        };
    }

    match config.provider_name.as_str() {
        "openai" => openai_defaults(api_key, model),
        "gemini" => gemini_defaults(api_key, model),
        "mistral" => mistral_defaults(api_key, model),
        "glm" => glm_defaults(api_key, model),
        other => {
            warn!(
                provider = %other,
                "unknown provider name without base_url; using the OpenAI endpoint"
            );
            OpenAiCompatConfig {
                provider_name: other.to_string(),
                base_url: OPENAI_BASE_URL.to_string(),
                api_key,
                model: model.to_string(),
            }
        }
    }
}
