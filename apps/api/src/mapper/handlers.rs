//! Axum route handler for the generate action.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::filters::FilterRecord;
use crate::mapper::transformer::run_fetch_cycle;
use crate::presenter::{build_view, resolve_details, GraphView, NodeDetails};
use crate::session::UsageReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub graph: GraphView,
    /// Details panel content for the default (center) selection.
    pub details: NodeDetails,
    pub usage: UsageReport,
}

/// POST /api/v1/sessions/:id/generate
///
/// Runs one full fetch cycle: prompt → completion call → parse → install.
/// On failure the session's previous graph (if any) is left in place and the
/// error surfaces as a structured message.
pub async fn handle_generate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(filters): Json<FilterRecord>,
) -> Result<Json<GenerateResponse>, AppError> {
    let graph = run_fetch_cycle(
        &state.sessions,
        id,
        filters.clone(),
        state.completion.as_deref(),
    )
    .await?;

    let view = build_view(&graph, &filters);
    let details = resolve_details(&graph, None, filters.industry);
    let usage = state.sessions.get(id).await?.usage();

    Ok(Json(GenerateResponse {
        graph: view,
        details,
        usage,
    }))
}
