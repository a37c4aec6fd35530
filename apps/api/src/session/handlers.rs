//! Axum route handlers for session lifecycle.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::filters::FilterRecord;
use crate::session::UsageReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub has_graph: bool,
    pub pending_fetch: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterRecord>,
    pub usage: UsageReport,
    pub created_at: DateTime<Utc>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<CreateSessionResponse> {
    let session_id = state.sessions.create().await;
    // The id was just inserted; a racing delete is not possible because
    // sessions are never removed, only cleared.
    let created_at = state
        .sessions
        .get(session_id)
        .await
        .map(|s| s.created_at)
        .unwrap_or_else(|_| Utc::now());
    Json(CreateSessionResponse {
        session_id,
        created_at,
    })
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    let usage = session.usage();
    Ok(Json(SessionSnapshot {
        session_id: id,
        has_graph: session.graph.is_some(),
        pending_fetch: session.pending_fetch,
        usage,
        created_at: session.created_at,
        filters: session.filters,
    }))
}

/// POST /api/v1/sessions/:id/clear
///
/// The "clear map" action: drops the graph and resets the usage counters.
pub async fn handle_clear_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    state.sessions.clear(id).await?;
    let session = state.sessions.get(id).await?;
    let usage = session.usage();
    Ok(Json(SessionSnapshot {
        session_id: id,
        has_graph: false,
        pending_fetch: false,
        usage,
        created_at: session.created_at,
        filters: session.filters,
    }))
}
