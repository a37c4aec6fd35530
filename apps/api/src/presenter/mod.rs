//! Graph Presenter — turns a `CareerGraph` into the node/edge/config payload
//! the rendering widget consumes, and resolves a selected node id back to
//! its explanatory text.

pub mod handlers;

use std::collections::HashSet;

use serde::Serialize;

use crate::filters::{FilterRecord, Industry};
use crate::mapper::models::CareerGraph;

const CENTER_COLOR: &str = "#B19CD9";
const JOB_COLOR: &str = "#FF4B4B";
const CERT_COLOR: &str = "#00C0F2";
const TRUNK_EDGE_COLOR: &str = "#808080";
const BRANCH_EDGE_COLOR: &str = "#404040";
const HIGHLIGHT_COLOR: &str = "#F7A7A6";
const BACKGROUND_COLOR: &str = "#0e1117";

const CENTER_SIZE: u32 = 45;
const JOB_SIZE: u32 = 30;
const CERT_SIZE: u32 = 20;

const ADVISORY: &str =
    "AI Generated Advisory: Verify all role availability and requirements independently.";

const SELECTION_HINT: &str =
    "Select a red node (Job) to see details, or a blue diamond (Cert) for requirements.";

const NOT_FOUND_BODY: &str = "Node details not found.";

/// Label styling readable against the dark canvas.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFont {
    pub color: &'static str,
    pub stroke_width: u32,
    pub stroke_color: &'static str,
}

const HIGH_CONTRAST_FONT: NodeFont = NodeFont {
    color: "white",
    stroke_width: 4,
    stroke_color: "black",
};

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub size: u32,
    pub color: &'static str,
    pub shape: &'static str,
    pub font: NodeFont,
    /// Hover tooltip. The center node has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub color: &'static str,
    pub width: u32,
    pub dashes: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub width: u32,
    pub height: u32,
    pub directed: bool,
    pub physics: bool,
    pub hierarchical: bool,
    pub node_highlight_behavior: bool,
    pub highlight_color: &'static str,
    pub collapsible: bool,
    pub background_color: &'static str,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            width: 1200,
            height: 600,
            directed: true,
            physics: true,
            hierarchical: false,
            node_highlight_behavior: true,
            highlight_color: HIGHLIGHT_COLOR,
            collapsible: true,
            background_color: BACKGROUND_COLOR,
        }
    }
}

/// The full widget payload for one rendered career map.
#[derive(Debug, Clone, Serialize)]
pub struct GraphView {
    pub heading: String,
    pub advisory: &'static str,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub config: ViewConfig,
}

/// Details panel content for the current selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDetails {
    pub title: String,
    pub body: String,
    pub footer: String,
    /// External search link for job and certification selections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_url: Option<String>,
}

/// Landing card shown while the session has no graph.
#[derive(Debug, Clone, Serialize)]
pub struct LandingCard {
    pub title: &'static str,
    pub message: &'static str,
    pub hint: &'static str,
}

pub fn landing_card() -> LandingCard {
    LandingCard {
        title: "Welcome, AI Graduates",
        message: "Select your degree track and target industry to begin.",
        hint: "We will map diverse career paths and the specific certifications \
               you need to be credible in them.",
    }
}

/// Builds the widget payload. A name seen twice is the same node: no second
/// node is created and no content is merged, but every connection still
/// contributes its edge.
pub fn build_view(graph: &CareerGraph, filters: &FilterRecord) -> GraphView {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut node_ids: HashSet<&str> = HashSet::new();

    let center_name = graph.center_node.name.as_str();
    nodes.push(GraphNode {
        id: center_name.to_string(),
        label: center_name.to_string(),
        size: CENTER_SIZE,
        color: CENTER_COLOR,
        shape: "dot",
        font: HIGH_CONTRAST_FONT,
        title: None,
    });
    node_ids.insert(center_name);

    for job in &graph.connections {
        if node_ids.insert(job.name.as_str()) {
            nodes.push(GraphNode {
                id: job.name.clone(),
                label: job.name.clone(),
                size: JOB_SIZE,
                color: JOB_COLOR,
                shape: "dot",
                font: HIGH_CONTRAST_FONT,
                title: Some(job.reason.clone()),
            });
        }

        edges.push(GraphEdge {
            source: center_name.to_string(),
            target: job.name.clone(),
            color: TRUNK_EDGE_COLOR,
            width: 3,
            dashes: false,
        });

        for cert in &job.sub_connections {
            if node_ids.insert(cert.name.as_str()) {
                nodes.push(GraphNode {
                    id: cert.name.clone(),
                    label: cert.name.clone(),
                    size: CERT_SIZE,
                    color: CERT_COLOR,
                    shape: "diamond",
                    font: HIGH_CONTRAST_FONT,
                    title: Some(format!("Cert for {}: {}", job.name, cert.reason)),
                });
            }

            edges.push(GraphEdge {
                source: job.name.clone(),
                target: cert.name.clone(),
                color: BRANCH_EDGE_COLOR,
                width: 1,
                dashes: true,
            });
        }
    }

    GraphView {
        heading: format!(
            "Career Map: {} in {}",
            filters.track.as_str(),
            filters.industry.as_str()
        ),
        advisory: ADVISORY,
        nodes,
        edges,
        config: ViewConfig::default(),
    }
}

/// Resolves a selection back to its explanatory text by re-traversing the
/// graph. No selection (or the center's own name) yields the mission text;
/// an id matching nothing yields a placeholder — stale ids from a previous
/// graph must never error.
pub fn resolve_details(
    graph: &CareerGraph,
    selected: Option<&str>,
    industry: Industry,
) -> NodeDetails {
    let center_name = graph.center_node.name.as_str();
    let selected = selected.unwrap_or(center_name);

    if selected == center_name {
        return NodeDetails {
            title: center_name.to_string(),
            body: graph.center_node.mission.clone(),
            footer: SELECTION_HINT.to_string(),
            research_url: None,
        };
    }

    if let Some(job) = graph.job(selected) {
        let mut footer = String::from("Top Recommended Certifications:");
        for cert in &job.sub_connections {
            footer.push_str("\n- ");
            footer.push_str(&cert.name);
        }
        return NodeDetails {
            title: job.name.clone(),
            body: job.reason.clone(),
            footer,
            research_url: Some(research_url(&job.name, industry)),
        };
    }

    if let Some((job, cert)) = graph.cert_with_parent(selected) {
        return NodeDetails {
            title: cert.name.clone(),
            body: cert.reason.clone(),
            footer: format!("Critical credibility booster for: {}", job.name),
            research_url: Some(research_url(&cert.name, industry)),
        };
    }

    NodeDetails {
        title: selected.to_string(),
        body: NOT_FOUND_BODY.to_string(),
        footer: String::new(),
        research_url: None,
    }
}

/// Search link for verifying a role or certification independently.
fn research_url(node_name: &str, industry: Industry) -> String {
    let query = format!("{node_name} {} certification requirements", industry.as_str());
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &query)
        .finish();
    format!("https://www.google.com/search?{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{DegreeTrack, RoleFunction};
    use crate::mapper::models::{CenterNode, CertNode, JobNode};

    /// 1 center + 5 jobs + 2 certs each = 16 nodes, 15 edges.
    fn full_graph() -> CareerGraph {
        CareerGraph {
            center_node: CenterNode {
                name: "AI Policy Grad".to_string(),
                mission: "Career map for the policy track.".to_string(),
                positive_news: "Demand is rising.".to_string(),
                red_flags: "Needs ML literacy.".to_string(),
            },
            connections: (1..=5)
                .map(|i| JobNode {
                    name: format!("Job {i}"),
                    reason: format!("Reason {i}"),
                    sub_connections: vec![
                        CertNode {
                            name: format!("Cert {i}A"),
                            reason: "First credential".to_string(),
                        },
                        CertNode {
                            name: format!("Cert {i}B"),
                            reason: "Second credential".to_string(),
                        },
                    ],
                })
                .collect(),
        }
    }

    fn big_tech_filters() -> FilterRecord {
        FilterRecord {
            track: DegreeTrack::ManagementPolicy,
            industry: Industry::BigTech,
            role_function: RoleFunction::ProductStrategy,
        }
    }

    #[test]
    fn test_full_graph_has_sixteen_nodes_and_fifteen_edges() {
        let view = build_view(&full_graph(), &big_tech_filters());
        assert_eq!(view.nodes.len(), 16);
        assert_eq!(view.edges.len(), 15);
    }

    #[test]
    fn test_heading_names_track_and_industry() {
        let view = build_view(&full_graph(), &big_tech_filters());
        assert_eq!(
            view.heading,
            "Career Map: AI Management & Policy in Big Tech (FAANG)"
        );
    }

    #[test]
    fn test_node_styling_by_layer() {
        let view = build_view(&full_graph(), &big_tech_filters());
        let center = &view.nodes[0];
        assert_eq!(center.size, 45);
        assert_eq!(center.shape, "dot");
        assert!(center.title.is_none());

        let job = view.nodes.iter().find(|n| n.id == "Job 1").unwrap();
        assert_eq!(job.size, 30);
        assert_eq!(job.title.as_deref(), Some("Reason 1"));

        let cert = view.nodes.iter().find(|n| n.id == "Cert 1A").unwrap();
        assert_eq!(cert.size, 20);
        assert_eq!(cert.shape, "diamond");
        assert_eq!(
            cert.title.as_deref(),
            Some("Cert for Job 1: First credential")
        );
    }

    #[test]
    fn test_cert_edges_are_dashed_and_thin() {
        let view = build_view(&full_graph(), &big_tech_filters());
        let trunk = view.edges.iter().find(|e| e.target == "Job 1").unwrap();
        assert!(!trunk.dashes);
        assert_eq!(trunk.width, 3);

        let branch = view.edges.iter().find(|e| e.target == "Cert 1A").unwrap();
        assert!(branch.dashes);
        assert_eq!(branch.width, 1);
        assert_eq!(branch.source, "Job 1");
    }

    #[test]
    fn test_duplicate_name_creates_no_second_node_but_keeps_edge() {
        let mut graph = full_graph();
        // The model repeated a certification name under two jobs.
        graph.connections[1].sub_connections[0].name = "Cert 1A".to_string();

        let view = build_view(&graph, &big_tech_filters());
        assert_eq!(view.nodes.len(), 15);
        assert_eq!(view.edges.len(), 15);
        assert_eq!(
            view.edges.iter().filter(|e| e.target == "Cert 1A").count(),
            2
        );
    }

    #[test]
    fn test_no_selection_resolves_to_center_mission() {
        let graph = full_graph();
        let details = resolve_details(&graph, None, Industry::BigTech);
        assert_eq!(details.title, "AI Policy Grad");
        assert_eq!(details.body, "Career map for the policy track.");
        assert_eq!(details.footer, SELECTION_HINT);
        assert!(details.research_url.is_none());
    }

    #[test]
    fn test_center_name_selection_resolves_to_center_mission() {
        let graph = full_graph();
        let details = resolve_details(&graph, Some("AI Policy Grad"), Industry::BigTech);
        assert_eq!(details.body, "Career map for the policy track.");
    }

    #[test]
    fn test_job_selection_lists_all_its_certifications() {
        let graph = full_graph();
        let details = resolve_details(&graph, Some("Job 3"), Industry::BigTech);
        assert_eq!(details.body, "Reason 3");
        let bullets: Vec<&str> = details
            .footer
            .lines()
            .filter(|line| line.starts_with("- "))
            .collect();
        assert_eq!(bullets.len(), graph.connections[2].sub_connections.len());
        assert!(details.footer.contains("- Cert 3A"));
        assert!(details.footer.contains("- Cert 3B"));
    }

    #[test]
    fn test_cert_selection_names_its_parent_job() {
        let graph = full_graph();
        let details = resolve_details(&graph, Some("Cert 4B"), Industry::BigTech);
        assert_eq!(details.body, "Second credential");
        assert_eq!(details.footer, "Critical credibility booster for: Job 4");
    }

    #[test]
    fn test_stale_selection_falls_back_without_error() {
        let graph = full_graph();
        let details = resolve_details(&graph, Some("Job From Last Graph"), Industry::BigTech);
        assert_eq!(details.body, NOT_FOUND_BODY);
        assert!(details.footer.is_empty());
        assert!(details.research_url.is_none());
    }

    #[test]
    fn test_research_url_is_percent_encoded() {
        let graph = full_graph();
        let details = resolve_details(&graph, Some("Job 1"), Industry::BigTech);
        let url = details.research_url.unwrap();
        assert!(url.starts_with("https://www.google.com/search?q="));
        assert!(url.contains("Big+Tech+%28FAANG%29"));
        assert!(!url.contains(' '));
    }
}
