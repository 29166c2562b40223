//! Session controller: applies submit, clear, and end events to a session.
//!
//! The controller holds no session state of its own. Callers pass the
//! [`Session`] they own, and every event runs to completion before the next
//! one is applied.

use tracing::{info, warn};

use deskmate_types::chat::{CloseEvent, Session, Turn};
use deskmate_types::error::SupportError;

use crate::agent::persona::PersonaAgent;
use crate::agent::router::AgentRouter;

/// Drives the session lifecycle on top of the router and persona agent.
#[derive(Debug, Clone)]
pub struct SessionController {
    router: AgentRouter,
    persona: PersonaAgent,
}

impl SessionController {
    pub fn new(router: AgentRouter, persona: PersonaAgent) -> Self {
        Self { router, persona }
    }

    /// Process `session.pending_query`.
    ///
    /// Returns `Ok(None)` without any service call when the query is empty.
    /// Whitespace is a query like any other.
    /// The router runs only while no persona is assigned; once it answers,
    /// the persona stays for the rest of the session even if the turn itself
    /// fails. A failed call never appends a turn.
    #[tracing::instrument(name = "submit", skip_all, fields(persona = session.persona_label()))]
    pub async fn submit(&self, session: &mut Session) -> Result<Option<Turn>, SupportError> {
        if session.pending_query.is_empty() {
            return Ok(None);
        }
        let query = session.pending_query.clone();

        let persona = match &session.assigned_persona {
            Some(persona) => persona.clone(),
            None => {
                let routed = self
                    .router
                    .route(&query, session.language)
                    .await
                    .inspect_err(|e| warn!(error = %e, "routing failed; no persona assigned"))?;
                session.assigned_persona = Some(routed.clone());
                routed
            }
        };

        let response = self
            .persona
            .handle_turn(
                &persona,
                &session.contact_identifier,
                &session.turn_history,
                &query,
                session.language,
            )
            .await
            .inspect_err(|e| warn!(persona = %persona, error = %e, "turn failed"))?;

        let turn = Turn { query, response };
        session.turn_history.push(turn.clone());
        info!(
            persona = %persona,
            history_len = session.turn_history.len(),
            "turn appended"
        );
        Ok(Some(turn))
    }

    /// Empty the turn history. The persona and identity inputs are kept.
    pub fn clear(&self, session: &mut Session) {
        let dropped = session.turn_history.len();
        session.turn_history.clear();
        info!(dropped, "history cleared");
    }

    /// Close the session.
    ///
    /// The persona and language in effect are captured in a [`CloseEvent`]
    /// before every field is reset, so the farewell is rendered from what the
    /// customer was actually talking to.
    pub fn end(&self, session: &mut Session) {
        let event = CloseEvent {
            persona_at_close: session.assigned_persona.take(),
            language_at_close: session.language,
        };
        info!(
            persona = event
                .persona_at_close
                .as_ref()
                .map(|p| p.label())
                .unwrap_or("unassigned"),
            language = %event.language_at_close,
            "session ended"
        );

        session.turn_history.clear();
        session.pending_query.clear();
        session.contact_identifier.clear();
        session.language = Default::default();
        session.pending_farewells.push_back(event);
    }

    /// Render the oldest pending farewell, if any.
    ///
    /// Each close event yields its farewell at most once. If rendering fails
    /// the event stays queued and the next render pass retries it.
    pub async fn take_farewell(
        &self,
        session: &mut Session,
    ) -> Result<Option<String>, SupportError> {
        let Some(event) = session.pending_farewells.front() else {
            return Ok(None);
        };

        let farewell = self
            .persona
            .close(event.persona_at_close.as_ref(), event.language_at_close)
            .await
            .inspect_err(|e| warn!(error = %e, "farewell rendering failed; will retry"))?;

        session.pending_farewells.pop_front();
        Ok(Some(farewell))
    }
}
