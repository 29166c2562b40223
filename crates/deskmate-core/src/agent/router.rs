//! Agent router: classifies a query into one support persona.
//!
//! Called once per session, on the first submit. The answer is cached on the
//! session by the controller and never re-evaluated.

use std::sync::Arc;

use tracing::{info, warn};

use deskmate_types::language::Language;
use deskmate_types::llm::{LlmError, Message};
use deskmate_types::persona::RoutedPersona;

use crate::llm::client::{CallPurpose, CompletionClient};

use super::prompt::routing_prompt;

/// Routes free-text intent to a persona via the Completion Service.
#[derive(Debug, Clone)]
pub struct AgentRouter {
    client: Arc<CompletionClient>,
}

impl AgentRouter {
    pub fn new(client: Arc<CompletionClient>) -> Self {
        Self { client }
    }

    /// Classify `query` (written in `language`).
    ///
    /// No retries and no default persona: a service failure is returned so a
    /// refund or return request is never silently misrouted.
    #[tracing::instrument(name = "route", skip_all, fields(language = %language))]
    pub async fn route(&self, query: &str, language: Language) -> Result<RoutedPersona, LlmError> {
        let messages = vec![Message::user(routing_prompt(query, language))];
        let raw = self.client.complete(CallPurpose::Routing, messages).await?;

        let routed = RoutedPersona::from_router_output(&raw);
        match &routed {
            RoutedPersona::Known(persona) => info!(persona = %persona, "query routed"),
            RoutedPersona::Unrecognized(label) => warn!(
                label = %label,
                "router answered with an uncatalogued persona; generic prompts will be used"
            ),
        }
        Ok(routed)
    }
}
