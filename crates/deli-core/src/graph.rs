//! # Graph Store
//!
//! The undirected similarity graph for one window (or the carried-over cache).
//!
//! All data structures use `BTreeMap`/`BTreeSet` for deterministic ordering:
//! node iteration, neighbor iteration and component discovery all proceed in
//! ascending `NodeId` order.

use crate::{DeliError, Node, NodeId};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// An undirected graph of typed nodes.
///
/// The adjacency map is kept symmetric: `b ∈ adjacency[a]` iff
/// `a ∈ adjacency[b]`. Every node has an adjacency entry, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Node storage: NodeId -> Node
    nodes: BTreeMap<NodeId, Node>,

    /// Adjacency sets: node -> neighbors
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any node with the same id.
    ///
    /// Existing edges of a replaced node are kept.
    /// Returns the previous node, if any.
    pub fn insert_node(&mut self, node: Node) -> Option<Node> {
        let id = node.id();
        self.adjacency.entry(id).or_default();
        self.nodes.insert(id, node)
    }

    /// Insert a node only if no node with the same id exists.
    ///
    /// Returns `true` if the node was inserted.
    pub fn insert_node_if_absent(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.id()) {
            return false;
        }
        self.insert_node(node);
        true
    }

    /// Insert an undirected edge between two existing nodes.
    ///
    /// Self-loops carry no connectivity information and are ignored.
    /// Returns `DeliError::UnknownNode` if either endpoint is missing.
    pub fn insert_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), DeliError> {
        for id in [a, b] {
            if !self.nodes.contains_key(&id) {
                return Err(DeliError::UnknownNode(id));
            }
        }
        if a == b {
            return Ok(());
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        Ok(())
    }

    /// Remove a node and all of its incident edges.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let removed = self.nodes.remove(&id)?;
        if let Some(neighbors) = self.adjacency.remove(&id) {
            for neighbor in neighbors {
                if let Some(set) = self.adjacency.get_mut(&neighbor) {
                    set.remove(&id);
                }
            }
        }
        Some(removed)
    }

    /// Remove every listed node. Unknown ids are skipped.
    ///
    /// Returns the number of nodes actually removed.
    pub fn remove_nodes<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) -> usize {
        ids.into_iter()
            .filter(|id| self.remove_node(*id).is_some())
            .count()
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Check if the graph contains a node.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Check if the graph contains an edge (in either direction).
    #[must_use]
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    /// Get all nodes in deterministic order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get every undirected edge once, as `(low, high)`, in deterministic order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .filter(move |to| *from < **to)
                .map(move |to| (*from, *to))
        })
    }

    /// Get the neighbors of a node in ascending order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    /// Get the degree of a node (0 for unknown nodes).
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, BTreeSet::len)
    }

    /// Get the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Check if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// =============================================================================
// CONNECTED COMPONENTS
// =============================================================================

impl Graph {
    /// Partition the graph into connected components.
    ///
    /// Components are discovered by breadth-first search seeded from the
    /// lowest unvisited `NodeId`, so the result is ordered by each
    /// component's lowest node id. Components are derived on demand and never
    /// stored.
    #[must_use]
    pub fn connected_components(&self) -> Vec<BTreeSet<NodeId>> {
        let mut visited = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.nodes.keys() {
            if visited.contains(start) {
                continue;
            }

            let mut component = BTreeSet::new();
            let mut queue = VecDeque::new();
            visited.insert(*start);
            queue.push_back(*start);

            while let Some(current) = queue.pop_front() {
                component.insert(current);
                for neighbor in self.neighbors(current) {
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }

            components.push(component);
        }

        components
    }

    /// Sizes of the connected components, in discovery order.
    #[must_use]
    pub fn component_sizes(&self) -> Vec<usize> {
        self.connected_components()
            .iter()
            .map(BTreeSet::len)
            .collect()
    }

    /// Build the subgraph induced by a node set.
    ///
    /// Ids not present in this graph are ignored.
    #[must_use]
    pub fn induced_subgraph(&self, ids: &BTreeSet<NodeId>) -> Graph {
        let mut sub = Graph::new();
        for id in ids {
            if let Some(node) = self.nodes.get(id) {
                sub.insert_node(node.clone());
            }
        }
        for id in ids {
            if let Some(neighbors) = self.adjacency.get(id) {
                let kept: BTreeSet<NodeId> = neighbors.intersection(ids).copied().collect();
                if sub.adjacency.contains_key(id) {
                    sub.adjacency.insert(*id, kept);
                }
            }
        }
        sub
    }

    /// Remove every node for which the predicate returns `false`.
    ///
    /// Returns the number of nodes removed.
    pub fn retain_nodes<F: Fn(&Node) -> bool>(&mut self, keep: F) -> usize {
        let doomed: Vec<NodeId> = self
            .nodes
            .values()
            .filter(|node| !keep(node))
            .map(Node::id)
            .collect();
        self.remove_nodes(doomed)
    }
}

// =============================================================================
// TESTS
// =============================================================================
