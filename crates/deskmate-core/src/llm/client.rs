//! Completion client: the single call path to the Completion Service.
//!
//! Wraps a [`BoxLlmProvider`] with the request defaults (model, token limit,
//! temperature) and a bounded timeout. Every call is instrumented with a
//! `gen_ai.complete` span tagged with the purpose of the call.

use std::fmt;
use std::time::Duration;

use tracing::{Instrument, debug, info_span};

use deskmate_types::config::CompletionConfig;
use deskmate_types::llm::{CompletionRequest, LlmError, Message};

use super::box_provider::BoxLlmProvider;

/// Default bound on one Completion Service call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Why a Completion Service call is made. Recorded on the tracing span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPurpose {
    Routing,
    Turn,
    Translation,
}

impl fmt::Display for CallPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallPurpose::Routing => write!(f, "routing"),
            CallPurpose::Turn => write!(f, "turn"),
            CallPurpose::Translation => write!(f, "translation"),
        }
    }
}

/// Issues single, non-streaming completion calls and returns trimmed text.
///
/// No retries: a failure or timeout is returned to the caller as-is.
#[derive(Debug)]
pub struct CompletionClient {
    provider: BoxLlmProvider,
    model: String,
    max_tokens: u32,
    temperature: Option<f64>,
    timeout: Duration,
}

impl CompletionClient {
    pub fn new(provider: BoxLlmProvider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            max_tokens: 1024,
            temperature: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a client from the `[completion]` section of `config.toml`.
    pub fn from_config(provider: BoxLlmProvider, config: &CompletionConfig) -> Self {
        Self {
            provider,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `messages` as one request and return the generated text, trimmed
    /// of surrounding whitespace.
    pub async fn complete(
        &self,
        purpose: CallPurpose,
        messages: Vec<Message>,
    ) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.message_count = request.messages.len(),
            purpose = %purpose,
        );

        let call = self.provider.complete(&request).instrument(span);
        let response = match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result?,
            Err(_) => {
                return Err(LlmError::Timeout {
                    after_ms: self.timeout.as_millis() as u64,
                });
            }
        };

        debug!(
            %purpose,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion received"
        );

        Ok(response.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedProvider, SlowProvider};

    #[tokio::test]
    async fn test_complete_trims_and_uses_defaults() {
        let (provider, log) = ScriptedProvider::new(|_| Ok("  hello there \n".to_string()));
        let client = CompletionClient::new(BoxLlmProvider::new(provider), "gpt-4");

        let text = client
            .complete(CallPurpose::Turn, vec![Message::user("hi")])
            .await
            .unwrap();

        assert_eq!(text, "hello there");
        let requests = log.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gpt-4");
        assert_eq!(requests[0].max_tokens, 1024);
        assert_eq!(requests[0].messages, vec![Message::user("hi")]);
    }

    #[tokio::test]
    async fn test_from_config_applies_settings() {
        let (provider, log) = ScriptedProvider::new(|_| Ok("ok".to_string()));
        let config = CompletionConfig {
            model: "mistral-large-latest".to_string(),
            max_tokens: 256,
            temperature: Some(0.2),
            ..CompletionConfig::default()
        };
        let client = CompletionClient::from_config(BoxLlmProvider::new(provider), &config);
        client
            .complete(CallPurpose::Routing, vec![Message::user("x")])
            .await
            .unwrap();

        let requests = log.lock().unwrap();
        assert_eq!(requests[0].model, "mistral-large-latest");
        assert_eq!(requests[0].max_tokens, 256);
        assert_eq!(requests[0].temperature, Some(0.2));
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let (provider, _log) = ScriptedProvider::new(|_| Err(LlmError::AuthenticationFailed));
        let client = CompletionClient::new(BoxLlmProvider::new(provider), "gpt-4");

        let err = client
            .complete(CallPurpose::Turn, vec![Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let provider = SlowProvider::new(Duration::from_secs(5));
        let client = CompletionClient::new(BoxLlmProvider::new(provider), "gpt-4")
            .with_timeout(Duration::from_millis(20));

        let err = client
            .complete(CallPurpose::Translation, vec![Message::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Timeout { after_ms: 20 }));
    }

    #[test]
    fn test_purpose_display() {
        assert_eq!(CallPurpose::Routing.to_string(), "routing");
        assert_eq!(CallPurpose::Turn.to_string(), "turn");
        assert_eq!(CallPurpose::Translation.to_string(), "translation");
    }
}
