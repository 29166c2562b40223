//! LlmProvider trait definition.
//!
//! This is the Completion Service abstraction that all backends implement.
//! Uses RPITIT for `complete`; the object-safe wrapper lives in
//! [`super::box_provider`].

use deskmate_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for Completion Service backends (OpenAI, Gemini, Mistral, ...).
///
/// Stateless per call: every request carries the full ordered message list.
///
/// Implementations live in deskmate-infra (e.g., `OpenAiCompatibleProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "mistral").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
