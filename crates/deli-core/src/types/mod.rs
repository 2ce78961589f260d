//! # Core Type Definitions
//!
//! This module contains the core types shared by every stage of the detector:
//! - Node identifiers and node kinds (`NodeId`, `NodeType`, `Node`)
//! - Error types (`DeliError`)
//!
//! ## Determinism Guarantees
//!
//! All identifier types implement `Ord` so that graphs built on
//! `BTreeMap`/`BTreeSet` iterate in the same order on every run. Tie-breaking
//! in the delineator relies on this ordering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Opaque identifier for a node in a window graph.
///
/// Identity is stable across windows: a node id seen in the cache and in the
/// current window refers to the same message or publisher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// NODE TYPE
// =============================================================================

/// Kind of a node in the similarity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// The information source. Never carries a description.
    Publisher,
    /// A text-bearing message.
    Content,
}

impl NodeType {
    /// Wire name of the node type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Publisher => "publisher",
            NodeType::Content => "content",
        }
    }

    /// Parse a wire name. Unknown names are rejected rather than defaulted.
    pub fn parse(id: NodeId, raw: &str) -> Result<Self, DeliError> {
        match raw {
            "publisher" => Ok(NodeType::Publisher),
            "content" => Ok(NodeType::Content),
            other => Err(DeliError::MalformedNode {
                id,
                reason: format!("unknown nodetype '{}'", other),
            }),
        }
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A node in a window graph.
///
/// Content nodes always carry a description and publisher nodes never do.
/// The constructor enforces this, so the delineator can rely on it without
/// re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    nodetype: NodeType,
    content: Option<String>,
}

impl Node {
    /// Create a validated node.
    ///
    /// Returns `DeliError::MalformedNode` if a content node has no description
    /// or a publisher node has one.
    pub fn new(id: NodeId, nodetype: NodeType, content: Option<String>) -> Result<Self, DeliError> {
        match (nodetype, &content) {
            (NodeType::Content, None) => Err(DeliError::MalformedNode {
                id,
                reason: "content node without a content attribute".to_string(),
            }),
            (NodeType::Publisher, Some(_)) => Err(DeliError::MalformedNode {
                id,
                reason: "publisher node carrying a content attribute".to_string(),
            }),
            _ => Ok(Self {
                id,
                nodetype,
                content,
            }),
        }
    }

    /// Create a publisher node.
    #[must_use]
    pub fn publisher(id: NodeId) -> Self {
        Self {
            id,
            nodetype: NodeType::Publisher,
            content: None,
        }
    }

    /// Create a content node with its description.
    #[must_use]
    pub fn content(id: NodeId, text: impl Into<String>) -> Self {
        Self {
            id,
            nodetype: NodeType::Content,
            content: Some(text.into()),
        }
    }

    /// The node identifier.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The node kind.
    #[must_use]
    pub const fn nodetype(&self) -> NodeType {
        self.nodetype
    }

    /// The text description, present only on content nodes.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Check if this is a publisher node.
    #[must_use]
    pub fn is_publisher(&self) -> bool {
        self.nodetype == NodeType::Publisher
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while detecting or delineating events.
///
/// - No silent failures
/// - Use `Result<T, DeliError>` for fallible operations
/// - The core never panics; a failed window surfaces here and the caller
///   decides whether to skip it or abort the run
#[derive(Debug, Error)]
pub enum DeliError {
    /// An edge references a node that is not part of the graph.
    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    /// A node violates the publisher/content attribute contract.
    #[error("Malformed node {id}: {reason}")]
    MalformedNode { id: NodeId, reason: String },

    /// A tuning parameter or statistic is negative or not finite.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A component exceeds the size bound for centrality computation.
    #[error("Component of {size} nodes exceeds centrality limit of {limit}")]
    ComponentTooLarge { size: usize, limit: usize },

    /// Two per-window sequences that must align have different lengths.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Processing of a specific window failed.
    #[error("Window {index}: {source}")]
    Window {
        index: usize,
        #[source]
        source: Box<DeliError>,
    },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A configuration file could not be parsed or is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DeliError {
    /// Attach a window index to an error.
    #[must_use]
    pub fn in_window(self, index: usize) -> Self {
        DeliError::Window {
            index,
            source: Box::new(self),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
