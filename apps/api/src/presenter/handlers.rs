//! Axum route handlers for the rendered map and the details panel.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::presenter::{build_view, landing_card, resolve_details, GraphView, LandingCard, NodeDetails};
use crate::session::UsageReport;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MapResponse {
    /// Present when a graph has been generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphView>,
    /// Present while the session has no graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing: Option<LandingCard>,
    pub pending_fetch: bool,
    pub usage: UsageReport,
}

#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    /// Selected node id from the widget; absent means the center.
    pub node: Option<String>,
}

/// GET /api/v1/sessions/:id/map
pub async fn handle_get_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MapResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let usage = session.usage();

    let response = match (&session.graph, &session.filters) {
        (Some(graph), Some(filters)) => MapResponse {
            graph: Some(build_view(graph, filters)),
            landing: None,
            pending_fetch: session.pending_fetch,
            usage,
        },
        _ => MapResponse {
            graph: None,
            landing: Some(landing_card()),
            pending_fetch: session.pending_fetch,
            usage,
        },
    };

    Ok(Json(response))
}

/// GET /api/v1/sessions/:id/details?node=...
pub async fn handle_get_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<NodeDetails>, AppError> {
    let session = state.sessions.get(id).await?;

    let (graph, filters) = match (&session.graph, &session.filters) {
        (Some(graph), Some(filters)) => (graph, filters),
        _ => {
            return Err(AppError::NotFound(
                "No career map has been generated for this session".to_string(),
            ))
        }
    };

    Ok(Json(resolve_details(
        graph,
        query.node.as_deref(),
        filters.industry,
    )))
}
