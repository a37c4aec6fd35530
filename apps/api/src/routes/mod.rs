pub mod health;
pub mod meta;

use axum::{
    routing::{get, post},
    Router,
};

use crate::mapper;
use crate::presenter;
use crate::session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Filter catalog and static transparency content
        .route("/api/v1/catalog", get(meta::catalog_handler))
        .route("/api/v1/model-card", get(meta::model_card_handler))
        // Session lifecycle
        .route(
            "/api/v1/sessions",
            post(session::handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session::handlers::handle_get_session),
        )
        .route(
            "/api/v1/sessions/:id/clear",
            post(session::handlers::handle_clear_session),
        )
        // Career-map generation and presentation
        .route(
            "/api/v1/sessions/:id/generate",
            post(mapper::handlers::handle_generate),
        )
        .route(
            "/api/v1/sessions/:id/map",
            get(presenter::handlers::handle_get_map),
        )
        .route(
            "/api/v1/sessions/:id/details",
            get(presenter::handlers::handle_get_details),
        )
        .with_state(state)
}
