use thiserror::Error;
use uuid::Uuid;

use crate::llm::LlmError;

/// Errors surfaced by support-desk operations.
///
/// None of these is fatal to the process; each is scoped to the current turn
/// or session.
#[derive(Debug, Error)]
pub enum SupportError {
    /// The Completion Service failed or timed out.
    #[error("completion service unavailable: {0}")]
    ServiceUnavailable(#[from] LlmError),

    #[error("session {0} not found")]
    SessionNotFound(Uuid),

    #[error("unsupported language: '{0}'")]
    InvalidLanguage(String),
}
