//! In-memory registry of live support sessions.
//!
//! Sessions are never persisted. Each entry is guarded by its own async mutex
//! so events on one session are applied strictly in order while other
//! sessions proceed concurrently.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use deskmate_types::chat::Session;
use deskmate_types::error::SupportError;

/// Shared handle to one session.
pub type SharedSession = Arc<Mutex<Session>>;

/// Thread-safe map of session id to session.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<Uuid, SharedSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `session` under a fresh id.
    pub fn create(&self, session: Session) -> (Uuid, SharedSession) {
        let id = Uuid::now_v7();
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id, Arc::clone(&shared));
        info!(session_id = %id, "session created");
        (id, shared)
    }

    /// Look up a session. The handle is cloned out so no map guard is held
    /// across an await.
    pub fn get(&self, id: &Uuid) -> Result<SharedSession, SupportError> {
        self.sessions
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(SupportError::SessionNotFound(*id))
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.remove(id).is_some();
        if removed {
            info!(session_id = %id, "session removed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskmate_types::language::Language;

    #[tokio::test]
    async fn test_create_and_get() {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create(Session::with_identity("alice@example.com", Language::Hindi));

        let shared = registry.get(&id).unwrap();
        let session = shared.lock().await;
        assert_eq!(session.contact_identifier, "alice@example.com");
        assert_eq!(session.language, Language::Hindi);
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_mutation_is_visible_through_registry() {
        let registry = SessionRegistry::new();
        let (id, shared) = registry.create(Session::new());
        shared.lock().await.pending_query = "hello".to_string();

        let again = registry.get(&id).unwrap();
        assert_eq!(again.lock().await.pending_query, "hello");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let registry = SessionRegistry::new();
        let id = Uuid::now_v7();
        assert!(matches!(
            registry.get(&id),
            Err(SupportError::SessionNotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn test_remove() {
        let registry = SessionRegistry::new();
        let (id, _) = registry.create(Session::new());
        assert!(registry.remove(&id));
        assert!(!registry.remove(&id));
        assert!(registry.is_empty());
    }
}
