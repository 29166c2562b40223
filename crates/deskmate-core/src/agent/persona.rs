//! Persona agent: produces assistant turns and closing messages.
//!
//! A turn is one Completion Service call whose message list is
//! `[system instruction] + [history as user/assistant pairs] + [new query]`.
//! The closing message is a static catalog sentence, translated by a second
//! call only when the language is not the default.

use std::sync::Arc;

use tracing::debug;

use deskmate_types::chat::Turn;
use deskmate_types::language::Language;
use deskmate_types::llm::{LlmError, Message};
use deskmate_types::order::OrderRecord;
use deskmate_types::persona::RoutedPersona;

use crate::llm::client::{CallPurpose, CompletionClient};
use crate::order::OrderDirectory;

use super::farewell::{catalog_entry, decorate};
use super::prompt::{system_instruction, translation_prompt};

/// Speaks as the persona assigned to a session.
#[derive(Clone)]
pub struct PersonaAgent {
    client: Arc<CompletionClient>,
    directory: Arc<dyn OrderDirectory>,
}

impl PersonaAgent {
    pub fn new(client: Arc<CompletionClient>, directory: Arc<dyn OrderDirectory>) -> Self {
        Self { client, directory }
    }

    /// Assemble the full message list for a turn.
    pub fn build_messages(
        &self,
        persona: &RoutedPersona,
        contact_identifier: &str,
        history: &[Turn],
        new_query: &str,
        language: Language,
    ) -> Vec<Message> {
        let order = self.order_facts(persona, contact_identifier);

        let mut messages = Vec::with_capacity(history.len() * 2 + 2);
        messages.push(Message::system(system_instruction(persona, &order, language)));
        for turn in history {
            messages.push(Message::user(turn.query.clone()));
            messages.push(Message::assistant(turn.response.clone()));
        }
        messages.push(Message::user(new_query));
        messages
    }

    /// Order facts for the instruction. Only personas that work from order
    /// facts consult the directory.
    fn order_facts(&self, persona: &RoutedPersona, contact_identifier: &str) -> OrderRecord {
        match persona.known() {
            Some(p) if p.uses_order_facts() => {
                let order = self.directory.lookup(contact_identifier);
                if order.is_empty() {
                    debug!(contact = %contact_identifier, "no order facts for contact");
                }
                order
            }
            _ => OrderRecord::default(),
        }
    }

    /// Produce the next assistant message for `new_query`.
    #[tracing::instrument(
        name = "handle_turn",
        skip_all,
        fields(persona = %persona, language = %language, history_len = history.len())
    )]
    pub async fn handle_turn(
        &self,
        persona: &RoutedPersona,
        contact_identifier: &str,
        history: &[Turn],
        new_query: &str,
        language: Language,
    ) -> Result<String, LlmError> {
        let messages =
            self.build_messages(persona, contact_identifier, history, new_query, language);
        self.client.complete(CallPurpose::Turn, messages).await
    }

    /// Localized closing message for the persona and language captured at close.
    ///
    /// The default language is answered from the catalog without a service call.
    #[tracing::instrument(name = "close", skip_all, fields(language = %language))]
    pub async fn close(
        &self,
        persona: Option<&RoutedPersona>,
        language: Language,
    ) -> Result<String, LlmError> {
        let (sentence, emoji) = catalog_entry(persona);
        if language.is_default() {
            return Ok(decorate(emoji, sentence));
        }

        let messages = vec![Message::user(translation_prompt(sentence, language))];
        let translated = self
            .client
            .complete(CallPurpose::Translation, messages)
            .await?;
        Ok(decorate(emoji, &translated))
    }
}

impl std::fmt::Debug for PersonaAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonaAgent")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::test_support::{MapDirectory, RequestLog, ScriptedProvider, john_record};
    use deskmate_types::llm::MessageRole;
    use deskmate_types::persona::Persona;

    fn agent_with(provider: ScriptedProvider) -> PersonaAgent {
        let client = CompletionClient::new(BoxLlmProvider::new(provider), "gpt-4");
        let directory = MapDirectory::default().with("john@example.com", john_record());
        PersonaAgent::new(Arc::new(client), Arc::new(directory))
    }

    fn desk_agent() -> (PersonaAgent, RequestLog) {
        let (provider, log) = ScriptedProvider::desk("Order Tracking Agent");
        (agent_with(provider), log)
    }

    fn turn(query: &str, response: &str) -> Turn {
        Turn {
            query: query.to_string(),
            response: response.to_string(),
        }
    }

    #[tokio::test]
    async fn test_handle_turn_replays_history_in_order() {
        let (agent, log) = desk_agent();
        let history = vec![turn("q1", "r1"), turn("q2", "r2")];

        let reply = agent
            .handle_turn(
                &Persona::OrderTracking.into(),
                "john@example.com",
                &history,
                "q3",
                Language::English,
            )
            .await
            .unwrap();
        assert_eq!(reply, "reply to: q3");

        let requests = log.lock().unwrap();
        let messages = &requests[0].messages;
        let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User,
            ]
        );
        let contents: Vec<&str> = messages[1..].iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q1", "r1", "q2", "r2", "q3"]);
        assert!(messages[0].content.contains("ORD12345"));
    }

    #[tokio::test]
    async fn test_unknown_contact_embeds_empty_record() {
        let (agent, log) = desk_agent();

        let reply = agent
            .handle_turn(
                &Persona::OrderTracking.into(),
                "zzz@nowhere.com",
                &[],
                "where is my order?",
                Language::English,
            )
            .await
            .unwrap();
        assert_eq!(reply, "reply to: where is my order?");

        let requests = log.lock().unwrap();
        assert_eq!(
            requests[0].messages[0].content,
            "You are an order tracking assistant. Use this order info: {}"
        );
    }

    /// Directory that fails the test if it is consulted.
    struct UntouchedDirectory;

    impl OrderDirectory for UntouchedDirectory {
        fn lookup(&self, contact_identifier: &str) -> OrderRecord {
            panic!("unexpected order lookup for {contact_identifier}");
        }
    }

    #[test]
    fn test_personas_without_order_facts_skip_lookup() {
        let (provider, _log) = ScriptedProvider::desk("General Support agent");
        let client = CompletionClient::new(BoxLlmProvider::new(provider), "gpt-4");
        let agent = PersonaAgent::new(Arc::new(client), Arc::new(UntouchedDirectory));

        let general = agent.build_messages(
            &Persona::GeneralSupport.into(),
            "john@example.com",
            &[],
            "hello",
            Language::English,
        );
        assert_eq!(
            general[0].content,
            "You are a general support assistant. Help the user with their request."
        );

        let unrecognized = agent.build_messages(
            &RoutedPersona::Unrecognized("Billing Agent".to_string()),
            "john@example.com",
            &[],
            "hello",
            Language::English,
        );
        assert_eq!(unrecognized[0].content, "You are a helpful assistant.");
    }

    #[tokio::test]
    async fn test_non_default_language_adds_directive() {
        let (agent, log) = desk_agent();
        agent
            .handle_turn(
                &Persona::Refund.into(),
                "john@example.com",
                &[],
                "refund?",
                Language::Telugu,
            )
            .await
            .unwrap();

        let requests = log.lock().unwrap();
        assert!(requests[0].messages[0]
            .content
            .contains("Respond in Telugu using its native writing script."));
    }

    #[tokio::test]
    async fn test_default_language_has_no_directive() {
        let (agent, log) = desk_agent();
        agent
            .handle_turn(
                &Persona::Refund.into(),
                "john@example.com",
                &[],
                "refund?",
                Language::English,
            )
            .await
            .unwrap();

        let requests = log.lock().unwrap();
        assert!(!requests[0].messages[0].content.contains("Respond in"));
    }

    #[tokio::test]
    async fn test_close_default_language_makes_no_call() {
        let (agent, log) = desk_agent();
        let persona = RoutedPersona::Known(Persona::Return);

        let farewell = agent.close(Some(&persona), Language::English).await.unwrap();
        assert_eq!(farewell, "🔄 Hope we made your return process easier! 💬✨");
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_close_translates_catalog_sentence() {
        let (agent, log) = desk_agent();
        let persona = RoutedPersona::Known(Persona::Refund);

        let farewell = agent.close(Some(&persona), Language::Hindi).await.unwrap();
        assert_eq!(farewell, "💸 [translated] 💬✨");

        let requests = log.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages.len(), 1);
        assert_eq!(
            requests[0].messages[0].content,
            "Translate this message into Hindi using its native script:\n\n\"Your refund request is in good hands. Thank you for your patience!\""
        );
    }

    #[tokio::test]
    async fn test_close_without_persona_uses_fallback() {
        let (agent, _log) = desk_agent();
        let farewell = agent.close(None, Language::English).await.unwrap();
        assert_eq!(
            farewell,
            "💬 It was a pleasure assisting you today. Take care! 💬✨"
        );
    }

    #[tokio::test]
    async fn test_close_translation_failure_propagates() {
        let (provider, _log) = ScriptedProvider::new(|_| Err(LlmError::AuthenticationFailed));
        let agent = agent_with(provider);

        let result = agent.close(None, Language::Telugu).await;
        assert!(matches!(result, Err(LlmError::AuthenticationFailed)));
    }
}
