//! Static informational endpoints: the filter catalog and the model card.

use axum::Json;
use serde_json::{json, Value};

use crate::filters::FilterCatalog;
use crate::llm_client;

/// GET /api/v1/catalog
/// The option sets a front-end needs to build its selectors.
pub async fn catalog_handler() -> Json<FilterCatalog> {
    Json(FilterCatalog::current())
}

/// GET /api/v1/model-card
/// Transparency document on how the mapper works.
pub async fn model_card_handler() -> Json<Value> {
    Json(json!({
        "project": "Career Atlas",
        "model_engine": llm_client::MODEL,
        "purpose": "Map AI graduate degrees to industry roles and the certifications that support them.",
        "intended_use": {
            "primary_users": "Students and alumni of AI Master's programs.",
            "goal": "Career exploration and strategic planning.",
            "mechanism": "Generates a 3-layer knowledge graph (Degree -> Jobs -> Certifications)."
        },
        "personas": {
            "AI Management & Policy": "Strategic leader and governance expert; bridges business and tech, ethics, risk.",
            "AI and Machine Learning": "Technical builder and data scientist; coding, model deployment, math."
        },
        "limitations": [
            "Hallucination risk: the model may suggest deprecated certifications.",
            "Knowledge cutoff: suggestions reflect the model's training data.",
            "Advisory only: verify exam requirements (costs, prerequisites) independently."
        ]
    }))
}
