//! # Window Record Format
//!
//! JSON representation of one window as handed over by the graph builder:
//!
//! ```json
//! {
//!   "nodes": [{"id": 1, "nodetype": "publisher"},
//!             {"id": 2, "nodetype": "content", "content": "text"}],
//!   "edges": [[1, 2]],
//!   "cc_sizes": [2]
//! }
//! ```
//!
//! Records are validated before they become a [`WindowInput`]: a missing or
//! unknown `nodetype`, a content node without `content`, or an edge to an
//! undeclared node fails the whole record. Nothing is defaulted, since a
//! wrong node type would silently corrupt publisher filtering.

use crate::primitives::{MAX_WINDOW_EDGES, MAX_WINDOW_NODES};
use crate::window::WindowInput;
use crate::{DeliError, Graph, Node, NodeId, NodeType};
use serde::{Deserialize, Serialize};

/// Serialized node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodetype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NodeRecord {
    /// Validate into a [`Node`].
    pub fn to_node(&self) -> Result<Node, DeliError> {
        let id = NodeId(self.id);
        let raw = self.nodetype.as_deref().ok_or_else(|| DeliError::MalformedNode {
            id,
            reason: "missing nodetype".to_string(),
        })?;
        let nodetype = NodeType::parse(id, raw)?;
        Node::new(id, nodetype, self.content.clone())
    }
}

impl From<&Node> for NodeRecord {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id().0,
            nodetype: Some(node.nodetype().as_str().to_string()),
            content: node.text().map(str::to_string),
        }
    }
}

/// Serialized window: graph plus the upstream component-size list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<(u64, u64)>,
    /// Absent: sizes are derived from the record's own components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc_sizes: Option<Vec<usize>>,
}

impl WindowRecord {
    /// Parse a record from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DeliError> {
        serde_json::from_slice(bytes).map_err(|e| DeliError::SerializationError(e.to_string()))
    }

    /// Serialize the record as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DeliError> {
        serde_json::to_string_pretty(self).map_err(|e| DeliError::SerializationError(e.to_string()))
    }

    /// Build the validated graph.
    pub fn to_graph(&self) -> Result<Graph, DeliError> {
        if self.nodes.len() > MAX_WINDOW_NODES {
            return Err(DeliError::SerializationError(format!(
                "Node count {} exceeds maximum allowed {}",
                self.nodes.len(),
                MAX_WINDOW_NODES
            )));
        }
        if self.edges.len() > MAX_WINDOW_EDGES {
            return Err(DeliError::SerializationError(format!(
                "Edge count {} exceeds maximum allowed {}",
                self.edges.len(),
                MAX_WINDOW_EDGES
            )));
        }

        let mut graph = Graph::new();
        for record in &self.nodes {
            let node = record.to_node()?;
            if graph.insert_node(node).is_some() {
                return Err(DeliError::MalformedNode {
                    id: NodeId(record.id),
                    reason: "duplicate node id".to_string(),
                });
            }
        }
        for &(a, b) in &self.edges {
            graph.insert_edge(NodeId(a), NodeId(b))?;
        }
        Ok(graph)
    }

    /// Validate into a detector input.
    pub fn into_input(self) -> Result<WindowInput, DeliError> {
        let graph = self.to_graph()?;
        Ok(match self.cc_sizes {
            Some(cc_sizes) => WindowInput { graph, cc_sizes },
            None => WindowInput::from_graph(graph),
        })
    }
}

impl From<&Graph> for WindowRecord {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().map(NodeRecord::from).collect(),
            edges: graph.edges().map(|(a, b)| (a.0, b.0)).collect(),
            cc_sizes: None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
