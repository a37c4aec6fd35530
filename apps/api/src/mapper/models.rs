//! Typed model of the completion service's graph contract.
//!
//! A `CareerGraph` is a rooted tree of depth two: one center node (the
//! degree), job-title children, certification grandchildren. Wire names
//! (`center_node`, `connections`, `sub_connections`) are the JSON keys the
//! prompt instructs the model to emit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerGraph {
    pub center_node: CenterNode,
    #[serde(default)]
    pub connections: Vec<JobNode>,
}

/// The degree at the center of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterNode {
    pub name: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub positive_news: String,
    #[serde(default)]
    pub red_flags: String,
}

/// A first-layer job title with its recommended certifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobNode {
    pub name: String,
    pub reason: String,
    #[serde(default)]
    pub sub_connections: Vec<CertNode>,
}

/// A second-layer certification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertNode {
    pub name: String,
    pub reason: String,
}

impl CareerGraph {
    /// Looks up a job node by exact name. Linear scan; graphs are capped at
    /// roughly twenty nodes.
    pub fn job(&self, name: &str) -> Option<&JobNode> {
        self.connections.iter().find(|job| job.name == name)
    }

    /// Looks up a certification by exact name, returning it with its parent
    /// job. First match wins, which doubles as identity-deduplication when
    /// the model repeats a name.
    pub fn cert_with_parent(&self, name: &str) -> Option<(&JobNode, &CertNode)> {
        self.connections.iter().find_map(|job| {
            job.sub_connections
                .iter()
                .find(|cert| cert.name == name)
                .map(|cert| (job, cert))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> CareerGraph {
        CareerGraph {
            center_node: CenterNode {
                name: "AI Policy Grad".to_string(),
                mission: "Career map".to_string(),
                positive_news: "Strong demand".to_string(),
                red_flags: "Watch for hype".to_string(),
            },
            connections: vec![
                JobNode {
                    name: "AI Audit Manager".to_string(),
                    reason: "Fits the governance profile".to_string(),
                    sub_connections: vec![
                        CertNode {
                            name: "CISA".to_string(),
                            reason: "Audit credibility".to_string(),
                        },
                        CertNode {
                            name: "AIGP".to_string(),
                            reason: "AI governance".to_string(),
                        },
                    ],
                },
                JobNode {
                    name: "AI Product Manager".to_string(),
                    reason: "Bridges business and tech".to_string(),
                    sub_connections: vec![CertNode {
                        name: "CSPO".to_string(),
                        reason: "Product ownership".to_string(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_job_lookup_is_exact_match() {
        let graph = sample_graph();
        assert!(graph.job("AI Audit Manager").is_some());
        assert!(graph.job("AI Audit").is_none());
    }

    #[test]
    fn test_cert_lookup_returns_parent_job() {
        let graph = sample_graph();
        let (job, cert) = graph.cert_with_parent("CSPO").unwrap();
        assert_eq!(job.name, "AI Product Manager");
        assert_eq!(cert.reason, "Product ownership");
    }

    #[test]
    fn test_cert_lookup_first_match_wins_on_duplicates() {
        let mut graph = sample_graph();
        graph.connections[1].sub_connections.push(CertNode {
            name: "CISA".to_string(),
            reason: "Duplicate entry".to_string(),
        });
        let (job, cert) = graph.cert_with_parent("CISA").unwrap();
        assert_eq!(job.name, "AI Audit Manager");
        assert_eq!(cert.reason, "Audit credibility");
    }

    #[test]
    fn test_center_fields_default_to_empty() {
        let json = r#"{"center_node": {"name": "Grad"}, "connections": []}"#;
        let graph: CareerGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.center_node.name, "Grad");
        assert!(graph.center_node.mission.is_empty());
        assert!(graph.center_node.red_flags.is_empty());
    }

    #[test]
    fn test_job_without_certs_deserializes() {
        let json = r#"{"name": "Analyst", "reason": "Entry point"}"#;
        let job: JobNode = serde_json::from_str(json).unwrap();
        assert!(job.sub_connections.is_empty());
    }
}
