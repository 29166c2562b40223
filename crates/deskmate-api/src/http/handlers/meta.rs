//! Service metadata handlers.
//!
//! - GET /api/v1/languages - Offered conversation languages
//! - GET /api/v1/health    - Liveness

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use uuid::Uuid;

use deskmate_types::language::Language;

use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub name: &'static str,
    pub default: bool,
}

/// GET /api/v1/languages - The fixed language list, default first.
pub async fn list_languages() -> Json<ApiResponse<Vec<LanguageInfo>>> {
    let start = Instant::now();
    let languages = Language::ALL
        .iter()
        .map(|l| LanguageInfo {
            name: l.name(),
            default: l.is_default(),
        })
        .collect();

    let elapsed = start.elapsed().as_millis() as u64;
    Json(ApiResponse::success(languages, Uuid::now_v7().to_string(), elapsed))
}

/// GET /api/v1/health - Liveness plus the configured Completion Service.
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "provider": state.provider_name,
        "model": state.model,
        "sessions": state.sessions.len(),
    }))
}
