//! The transformer core: builds the instruction, issues it to the completion
//! service, and parses the embedded JSON document into a `CareerGraph`.
//!
//! A fetch cycle runs Prompting → AwaitingCompletion → Parsing as one call
//! chain over the session store. Ready replaces the session's graph
//! wholesale; Failed leaves the previous graph untouched.

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::filters::FilterRecord;
use crate::llm_client::prompts::JSON_ONLY_PREAMBLE;
use crate::llm_client::CompletionService;
use crate::mapper::models::CareerGraph;
use crate::mapper::prompts::{track_persona, CAREER_MAP_PROMPT_TEMPLATE};
use crate::session::SessionStore;

/// The data model holds at most five job titles per graph.
pub const MAX_JOB_NODES: usize = 5;
/// And at most three certifications per job title.
pub const MAX_CERTS_PER_JOB: usize = 3;

/// Coarse 4-characters-per-token heuristic. An estimate, not a meter.
const CHARS_PER_TOKEN: f64 = 4.0;
/// Flat per-call cost estimate in currency units, not derived from actual
/// token counts.
const COST_PER_CALL: f64 = 0.003;

/// Renders the career-map instruction for one filter snapshot.
/// Deterministic: same record, same prompt. Interpolated values are
/// closed-set enum display strings only.
pub fn build_prompt(filters: &FilterRecord) -> String {
    let (persona, center_name) = track_persona(filters.track);

    let body = CAREER_MAP_PROMPT_TEMPLATE
        .replace("{persona}", persona)
        .replace("{center_name}", center_name)
        .replace("{track}", filters.track.as_str())
        .replace("{industry}", filters.industry.as_str())
        .replace("{role_function}", filters.role_function.as_str());

    format!("{JSON_ONLY_PREAMBLE}\n\n{body}")
}

/// Strips ```json ... ``` or ``` ... ``` code fences from completion output.
/// Exactly one leading and one trailing marker; a no-op on unfenced text.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Parses raw completion text into a `CareerGraph`.
///
/// The requested cardinality (5 jobs, 2-3 certifications each) is
/// best-effort on the model's side, so counts are clamped to the data model
/// rather than rejected: connections truncate to five, certifications per
/// job to three, nothing is padded.
pub fn parse_graph(raw: &str) -> Result<CareerGraph, AppError> {
    let text = strip_json_fences(raw);

    let mut graph: CareerGraph = serde_json::from_str(text).map_err(|e| {
        AppError::MalformedGraph(format!("response is not the expected JSON shape: {e}"))
    })?;

    if graph.center_node.name.trim().is_empty() {
        return Err(AppError::MalformedGraph(
            "center node has an empty name".to_string(),
        ));
    }

    graph.connections.truncate(MAX_JOB_NODES);
    for job in &mut graph.connections {
        job.sub_connections.truncate(MAX_CERTS_PER_JOB);
    }

    Ok(graph)
}

fn estimate_tokens(prompt: &str, response: &str) -> f64 {
    (prompt.len() + response.len()) as f64 / CHARS_PER_TOKEN
}

/// Runs one full fetch cycle for a session. `pending_fetch` is raised on
/// entry and cleared on every exit path, success or failure.
pub async fn run_fetch_cycle(
    store: &SessionStore,
    session_id: Uuid,
    filters: FilterRecord,
    completion: Option<&dyn CompletionService>,
) -> Result<CareerGraph, AppError> {
    store.set_pending(session_id, true).await?;
    let result = fetch_once(store, session_id, &filters, completion).await;
    // The session may have been deleted mid-flight; the fetch result wins.
    let _ = store.set_pending(session_id, false).await;
    result
}

async fn fetch_once(
    store: &SessionStore,
    session_id: Uuid,
    filters: &FilterRecord,
    completion: Option<&dyn CompletionService>,
) -> Result<CareerGraph, AppError> {
    // Credential gate: without a backend the cycle fails before any prompt
    // is built, leaving the usage counters untouched.
    let Some(completion) = completion else {
        return Err(AppError::MissingCredential);
    };

    info!("Analyzing career paths for {}", filters.track.as_str());

    let prompt = build_prompt(filters);
    debug!("Prompt built ({} chars)", prompt.len());

    let response = completion
        .complete(&prompt)
        .await
        .map_err(|e| AppError::CompletionService(e.to_string()))?;

    // The call reached the service, so it counts — even if parsing fails.
    store
        .record_usage(session_id, estimate_tokens(&prompt, &response), COST_PER_CALL)
        .await?;

    let graph = parse_graph(&response)?;
    store
        .install_graph(session_id, graph.clone(), filters.clone())
        .await?;

    info!(
        "Career map ready: {} job titles for {}",
        graph.connections.len(),
        graph.center_node.name
    );

    Ok(graph)
}
