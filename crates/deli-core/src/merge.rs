//! # Snapshot Merger
//!
//! Unions the current window's graph with the cache carried over from the
//! previous window.
//!
//! Node identity drives deduplication. When a node appears in both graphs the
//! current window's representation wins: the cache is layered underneath and
//! never overwrites a node already present in the window.

use crate::Graph;

/// Compose the current window graph with the cached candidate graph.
///
/// Neither input is modified; the union of nodes and edges is returned as a
/// new graph.
#[must_use]
pub fn compose(current: &Graph, cache: &Graph) -> Graph {
    let mut merged = current.clone();

    for node in cache.nodes() {
        merged.insert_node_if_absent(node.clone());
    }

    for (a, b) in cache.edges() {
        // Both endpoints exist: every cache node is now present in `merged`.
        let _ = merged.insert_edge(a, b);
    }

    merged
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Node, NodeId};

    #[test]
    fn union_of_disjoint_graphs() {
        let mut current = Graph::new();
        current.insert_node(Node::content(NodeId(1), "a"));
        current.insert_node(Node::content(NodeId(2), "b"));
        current.insert_edge(NodeId(1), NodeId(2)).expect("edge");

        let mut cache = Graph::new();
        cache.insert_node(Node::content(NodeId(10), "x"));
        cache.insert_node(Node::publisher(NodeId(11)));
        cache.insert_edge(NodeId(10), NodeId(11)).expect("edge");

        let merged = compose(&current, &cache);
        assert_eq!(merged.node_count(), 4);
        assert_eq!(merged.edge_count(), 2);
        assert_eq!(merged.connected_components().len(), 2);
    }

    #[test]
    fn overlapping_nodes_coalesce_and_current_wins() {
        let mut current = Graph::new();
        current.insert_node(Node::content(NodeId(1), "fresh"));
        current.insert_node(Node::content(NodeId(2), "b"));
        current.insert_edge(NodeId(1), NodeId(2)).expect("edge");

        let mut cache = Graph::new();
        cache.insert_node(Node::content(NodeId(1), "stale"));
        cache.insert_node(Node::content(NodeId(3), "c"));
        cache.insert_edge(NodeId(1), NodeId(3)).expect("edge");

        let merged = compose(&current, &cache);
        assert_eq!(merged.node_count(), 3);
        assert_eq!(merged.node(NodeId(1)).and_then(Node::text), Some("fresh"));
        // Node 1 bridges both halves into one component.
        assert_eq!(merged.component_sizes(), vec![3]);
    }

    #[test]
    fn inputs_are_untouched() {
        let mut current = Graph::new();
        current.insert_node(Node::content(NodeId(1), "a"));
        let mut cache = Graph::new();
        cache.insert_node(Node::content(NodeId(2), "b"));

        let before_current = current.clone();
        let before_cache = cache.clone();
        let _ = compose(&current, &cache);

        assert_eq!(current, before_current);
        assert_eq!(cache, before_cache);
    }

    #[test]
    fn empty_cache_is_identity() {
        let mut current = Graph::new();
        current.insert_node(Node::content(NodeId(1), "a"));
        assert_eq!(compose(&current, &Graph::new()), current);
    }
}
