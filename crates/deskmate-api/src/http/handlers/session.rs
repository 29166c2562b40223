//! Support session HTTP handlers.
//!
//! Endpoints:
//! - POST   /api/v1/sessions              - Create a session
//! - GET    /api/v1/sessions/{id}         - Render the session (drains a pending farewell)
//! - PUT    /api/v1/sessions/{id}/context - Set contact identifier and/or language
//! - POST   /api/v1/sessions/{id}/submit  - Submit a query
//! - POST   /api/v1/sessions/{id}/clear   - Clear turn history
//! - POST   /api/v1/sessions/{id}/end     - End the session
//! - DELETE /api/v1/sessions/{id}         - Drop the session
//!
//! Every event on one session runs under that session's lock, so events are
//! applied strictly one at a time. Submit, clear, end and `GET` each finish
//! with a render pass that delivers a pending farewell.

use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use deskmate_types::chat::{Session, SessionState, Turn};
use deskmate_types::language::Language;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Body for session creation and context updates.
#[derive(Debug, Default, Deserialize)]
pub struct ContextRequest {
    #[serde(default)]
    pub contact_identifier: Option<String>,
    /// Language name, case-insensitive (e.g. "Telugu").
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub query: String,
}

/// What a client sees of a session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub state: SessionState,
    /// Assigned persona label, or "unassigned".
    pub persona: String,
    pub contact_identifier: String,
    pub language: Language,
    /// Most recent turn first.
    pub history: Vec<Turn>,
    /// Closing message, present at most once per end event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farewell: Option<String>,
}

impl SessionView {
    fn new(id: Uuid, session: &Session, farewell: Option<String>) -> Self {
        Self {
            id,
            state: session.state(),
            persona: session.persona_label().to_string(),
            contact_identifier: session.contact_identifier.clone(),
            language: session.language,
            history: session.history_newest_first().cloned().collect(),
            farewell,
        }
    }
}

/// Parse a UUID from a path parameter, returning a 400 error on invalid format.
fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Validation(format!("Invalid UUID: {s}")))
}

fn apply_context(session: &mut Session, body: ContextRequest) -> Result<(), AppError> {
    if let Some(language) = body.language {
        session.language = language.parse()?;
    }
    if let Some(contact) = body.contact_identifier {
        session.contact_identifier = contact;
    }
    Ok(())
}

fn respond(
    id: Uuid,
    session: &Session,
    farewell: Option<String>,
    start: Instant,
) -> Json<ApiResponse<SessionView>> {
    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(
        SessionView::new(id, session, farewell),
        Uuid::now_v7().to_string(),
        elapsed,
    )
    .with_link("self", &format!("/api/v1/sessions/{id}"));
    Json(resp)
}

/// Render pass that follows every lifecycle event.
///
/// A failed farewell is already logged by the controller; it stays pending and
/// the event's own response is still returned. `GET` reports the failure.
async fn render_farewell(state: &AppState, session: &mut Session) -> Option<String> {
    state.controller.take_farewell(session).await.ok().flatten()
}

/// POST /api/v1/sessions - Create a session, optionally with identity inputs.
pub async fn create_session(
    State(state): State<AppState>,
    Json(body): Json<ContextRequest>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let start = Instant::now();

    let mut session = Session::new();
    apply_context(&mut session, body)?;
    let (id, shared) = state.sessions.create(session);

    let session = shared.lock().await;
    Ok(respond(id, &session, None, start))
}

/// GET /api/v1/sessions/{id} - Render pass.
///
/// If an end event is pending its farewell, the farewell is produced here and
/// included exactly once. A failed farewell is reported and stays pending.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let start = Instant::now();
    let id = parse_uuid(&session_id)?;

    let shared = state.sessions.get(&id)?;
    let mut session = shared.lock().await;
    let farewell = state.controller.take_farewell(&mut session).await?;

    Ok(respond(id, &session, farewell, start))
}

/// PUT /api/v1/sessions/{id}/context - Update contact identifier and/or language.
pub async fn update_context(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<ContextRequest>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let start = Instant::now();
    let id = parse_uuid(&session_id)?;

    let shared = state.sessions.get(&id)?;
    let mut session = shared.lock().await;
    apply_context(&mut session, body)?;

    Ok(respond(id, &session, None, start))
}

/// POST /api/v1/sessions/{id}/submit - Submit event.
///
/// An empty query is accepted and does nothing.
pub async fn submit(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(body): Json<SubmitRequest>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let start = Instant::now();
    let id = parse_uuid(&session_id)?;

    let shared = state.sessions.get(&id)?;
    let mut session = shared.lock().await;
    session.pending_query = body.query;
    state.controller.submit(&mut session).await?;
    let farewell = render_farewell(&state, &mut session).await;

    Ok(respond(id, &session, farewell, start))
}

/// POST /api/v1/sessions/{id}/clear - Clear event.
pub async fn clear_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let start = Instant::now();
    let id = parse_uuid(&session_id)?;

    let shared = state.sessions.get(&id)?;
    let mut session = shared.lock().await;
    state.controller.clear(&mut session);
    let farewell = render_farewell(&state, &mut session).await;

    Ok(respond(id, &session, farewell, start))
}

/// POST /api/v1/sessions/{id}/end - End event.
///
/// The farewell is rendered in the same response. If rendering fails the
/// session stays `closed_pending_farewell` and the next render pass retries.
pub async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<SessionView>>, AppError> {
    let start = Instant::now();
    let id = parse_uuid(&session_id)?;

    let shared = state.sessions.get(&id)?;
    let mut session = shared.lock().await;
    state.controller.end(&mut session);
    let farewell = render_farewell(&state, &mut session).await;

    Ok(respond(id, &session, farewell, start))
}

/// DELETE /api/v1/sessions/{id} - Drop a session.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<ApiResponse<serde_json::Value>>, AppError> {
    let start = Instant::now();
    let id = parse_uuid(&session_id)?;

    if !state.sessions.remove(&id) {
        return Err(deskmate_types::error::SupportError::SessionNotFound(id).into());
    }

    let elapsed = start.elapsed().as_millis() as u64;
    let resp = ApiResponse::success(
        serde_json::json!({ "deleted": true, "id": id }),
        Uuid::now_v7().to_string(),
        elapsed,
    );
    Ok(Json(resp))
}
