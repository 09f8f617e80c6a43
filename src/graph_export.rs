//! Graph export (§10.6): a serializable snapshot of a resolved registry for
//! downstream consumers that compute an ordering or render a diagram.
//!
//! This is a convenience on top of the core resolution ABI, not part of it —
//! no ordering is computed here, only a plain node/edge/metadata document.

#![cfg(feature = "graph-export")]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kind::RelationKind;
use crate::registry::ServiceRegistry;

/// One service in the exported graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub provides: Option<String>,
    pub mtime: u64,
    /// Whether this service has any unresolved `NEED` target recorded
    /// under `BROKEN`.
    pub broken: bool,
}

/// One directed edge in the exported graph, for one of the four active
/// relation kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: String,
}

/// Summary counts and export provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
    pub service_count: usize,
    pub edge_count: usize,
    pub broken_count: usize,
    pub exported_at: DateTime<Utc>,
}

/// A serializable snapshot of a [`ServiceRegistry`], suitable for
/// `serde_json`/`serde_yaml` export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub metadata: GraphMetadata,
}

impl DependencyGraph {
    /// Builds a graph from the current state of `registry`, stamping
    /// `exported_at` with the current time. Ordinarily called after
    /// [`crate::resolver::Resolver::resolve_all`] has run, but makes no
    /// assumption about that — it just reads whatever is there.
    pub fn export_now(registry: &ServiceRegistry) -> Self {
        Self::export(registry, Utc::now())
    }

    /// Builds a graph from the current state of `registry` with an explicit
    /// timestamp, for callers that need deterministic output (tests, golden
    /// files).
    pub fn export(registry: &ServiceRegistry, exported_at: DateTime<Utc>) -> Self {
        let mut nodes = Vec::with_capacity(registry.len());
        let mut edges = Vec::new();
        let mut broken_count = 0;

        for record in registry.enumerate() {
            let broken = !record.relations().get(RelationKind::Broken).is_empty();
            if broken {
                broken_count += 1;
            }
            nodes.push(GraphNode {
                name: record.name().to_string(),
                provides: registry.virtuals().virtual_provided_by(record.name()).map(str::to_string),
                mtime: record.mtime(),
                broken,
            });

            for kind in RelationKind::SWEEP_ORDER {
                for peer in record.relations().get(kind) {
                    edges.push(GraphEdge {
                        from: record.name().to_string(),
                        to: peer.clone(),
                        kind: kind.to_string(),
                    });
                }
            }
        }

        let metadata = GraphMetadata {
            service_count: nodes.len(),
            edge_count: edges.len(),
            broken_count,
            exported_at,
        };

        Self { nodes, edges, metadata }
    }

    /// Serializes to a pretty-printed JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
