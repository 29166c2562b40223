//! Support session, turn, and close-event types for Deskmate.
//!
//! A [`Session`] is the full state of one ongoing support interaction. It is
//! mutated only by the session controller in `deskmate-core`, one lifecycle
//! event at a time.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::persona::RoutedPersona;

// Re-export MessageRole from llm module (turns are flattened into role-tagged messages).
pub use crate::llm::MessageRole;

/// One user query paired with the assistant's response.
///
/// Immutable once appended to a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub query: String,
    pub response: String,
}

/// Snapshot taken when a session ends.
///
/// The farewell is rendered after the session's persona and language have
/// already been reset, so it works from this snapshot only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseEvent {
    pub persona_at_close: Option<RoutedPersona>,
    pub language_at_close: Language,
}

/// Lifecycle state derived from a session's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No persona assigned yet.
    Idle,
    /// A persona is assigned; history may be empty after a clear.
    Active,
    /// An end event is waiting for its farewell to be rendered.
    ClosedPendingFarewell,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::Active => write!(f, "active"),
            SessionState::ClosedPendingFarewell => write!(f, "closed_pending_farewell"),
        }
    }
}

/// State of one support interaction.
///
/// `assigned_persona` is set at most once per session lifetime; only an end
/// event clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub contact_identifier: String,
    pub language: Language,
    pub assigned_persona: Option<RoutedPersona>,
    /// Chronological; replayed in order to the Completion Service.
    pub turn_history: Vec<Turn>,
    pub pending_query: String,
    /// End events whose farewell has not been rendered yet.
    pub pending_farewells: VecDeque<CloseEvent>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-filled with the customer's identity inputs.
    pub fn with_identity(contact_identifier: impl Into<String>, language: Language) -> Self {
        Self {
            contact_identifier: contact_identifier.into(),
            language,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        if !self.pending_farewells.is_empty() {
            SessionState::ClosedPendingFarewell
        } else if self.assigned_persona.is_some() {
            SessionState::Active
        } else {
            SessionState::Idle
        }
    }

    /// Persona label for display, or `"unassigned"`.
    pub fn persona_label(&self) -> &str {
        self.assigned_persona
            .as_ref()
            .map(RoutedPersona::label)
            .unwrap_or("unassigned")
    }

    /// History in display order: most recent turn first.
    pub fn history_newest_first(&self) -> impl Iterator<Item = &Turn> {
        self.turn_history.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Persona;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.language, Language::English);
        assert!(session.contact_identifier.is_empty());
        assert_eq!(session.persona_label(), "unassigned");
    }

    #[test]
    fn test_state_follows_fields() {
        let mut session = Session::with_identity("john@example.com", Language::Hindi);
        session.assigned_persona = Some(Persona::Refund.into());
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.persona_label(), "Refund Agent");

        session.pending_farewells.push_back(CloseEvent {
            persona_at_close: None,
            language_at_close: Language::English,
        });
        assert_eq!(session.state(), SessionState::ClosedPendingFarewell);
    }

    #[test]
    fn test_history_newest_first() {
        let mut session = Session::new();
        for i in 1..=3 {
            session.turn_history.push(Turn {
                query: format!("q{i}"),
                response: format!("r{i}"),
            });
        }
        let queries: Vec<&str> = session
            .history_newest_first()
            .map(|t| t.query.as_str())
            .collect();
        assert_eq!(queries, vec!["q3", "q2", "q1"]);
    }

    #[test]
    fn test_session_state_serde() {
        let json = serde_json::to_string(&SessionState::ClosedPendingFarewell).unwrap();
        assert_eq!(json, "\"closed_pending_farewell\"");
        assert_eq!(SessionState::Active.to_string(), "active");
    }

    #[test]
    fn test_message_role_reexport() {
        let role = MessageRole::Assistant;
        assert_eq!(role.to_string(), "assistant");
    }
}
