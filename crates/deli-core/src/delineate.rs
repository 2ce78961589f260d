//! # Sub-event Delineator
//!
//! Breaks a graph that holds at least one event into sub-events and picks a
//! representative description for each.
//!
//! 1. Publisher nodes are dropped; they carry no text and would distort both
//!    the component sizes and the centrality scores.
//! 2. The remaining graph is re-partitioned into connected components.
//! 3. Components at or above the mean component size qualify as sub-events.
//! 4. Within each qualifying component, the content node with the highest
//!    betweenness centrality supplies the description. Equal scores resolve
//!    to the lowest `NodeId`.
//!
//! Sub-events are reported in ascending order of each component's lowest
//! node id.

#![allow(clippy::float_arithmetic)]

use crate::centrality::betweenness_centrality;
use crate::primitives::CENTRALITY_TIE_EPSILON;
use crate::{DeliError, Graph, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One delineated sub-event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subevent {
    /// Description of the representative node.
    pub description: String,
    /// The representative (most central content-bearing) node.
    pub representative: NodeId,
    /// Betweenness centrality of the representative within its component.
    pub centrality: f64,
    /// Number of nodes in the sub-event component.
    pub size: usize,
}

/// Delineate the sub-events of `graph`.
///
/// The input is not modified. Components holding no content node are
/// skipped. Returns `DeliError::ComponentTooLarge` if a qualifying component
/// exceeds `max_component_size`.
pub fn delineate(graph: &Graph, max_component_size: usize) -> Result<Vec<Subevent>, DeliError> {
    let mut content_graph = graph.clone();
    content_graph.retain_nodes(|node| !node.is_publisher());

    let components = content_graph.connected_components();
    let Some(threshold) = subevent_threshold(&components) else {
        return Ok(Vec::new());
    };

    let mut subevents = Vec::new();
    for component in &components {
        if (component.len() as f64) < threshold {
            continue;
        }
        if component.len() > max_component_size {
            return Err(DeliError::ComponentTooLarge {
                size: component.len(),
                limit: max_component_size,
            });
        }

        let subgraph = content_graph.induced_subgraph(component);
        if let Some(subevent) = representative(&subgraph) {
            subevents.push(subevent);
        }
    }

    Ok(subevents)
}

/// Mean component size, or `None` when there are no components.
#[must_use]
pub fn subevent_threshold(components: &[BTreeSet<NodeId>]) -> Option<f64> {
    if components.is_empty() {
        return None;
    }
    let total: usize = components.iter().map(BTreeSet::len).sum();
    Some(total as f64 / components.len() as f64)
}

/// Pick the most central content-bearing node of a component.
///
/// Only content nodes compete; a non-content node with a higher score never
/// shadows them. Scores within `CENTRALITY_TIE_EPSILON` count as equal and the
/// lower id wins.
fn representative(component: &Graph) -> Option<Subevent> {
    let scores = betweenness_centrality(component);

    let mut best: Option<(NodeId, f64, &str)> = None;
    for (id, score) in &scores {
        let Some(text) = component.node(*id).and_then(|node| node.text()) else {
            continue;
        };
        let better = match best {
            None => true,
            Some((_, best_score, _)) => *score > best_score + CENTRALITY_TIE_EPSILON,
        };
        if better {
            best = Some((*id, *score, text));
        }
    }

    best.map(|(id, centrality, text)| Subevent {
        description: text.to_string(),
        representative: id,
        centrality,
        size: component.node_count(),
    })
}

/// Extract the descriptions from a list of sub-events, in order.
#[must_use]
pub fn descriptions(subevents: &[Subevent]) -> Vec<String> {
    subevents.iter().map(|s| s.description.clone()).collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Node;
    use crate::primitives::MAX_CENTRALITY_COMPONENT_SIZE;

    fn content(graph: &mut Graph, id: u64) {
        graph.insert_node(Node::content(NodeId(id), format!("text {id}")));
    }

    fn edge(graph: &mut Graph, a: u64, b: u64) {
        graph.insert_edge(NodeId(a), NodeId(b)).expect("edge");
    }

    #[test]
    fn publisher_removal_splits_component() {
        // 0-1-2-3 star on 1, publisher 9 bridges 3 to 4-5.
        let mut graph = Graph::new();
        for id in 0..6 {
            content(&mut graph, id);
        }
        graph.insert_node(Node::publisher(NodeId(9)));
        edge(&mut graph, 0, 1);
        edge(&mut graph, 1, 2);
        edge(&mut graph, 1, 3);
        edge(&mut graph, 3, 9);
        edge(&mut graph, 9, 4);
        edge(&mut graph, 4, 5);

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert_eq!(descriptions(&subevents), vec!["text 1".to_string()]);
        assert_eq!(subevents[0].size, 4);
        assert_eq!(subevents[0].representative, NodeId(1));
        // Input keeps its publisher.
        assert!(graph.contains_node(NodeId(9)));
    }

    #[test]
    fn ties_resolve_to_lowest_id() {
        // Path 0-1-2-3: nodes 1 and 2 share the top score.
        let mut graph = Graph::new();
        for id in [3, 2, 1, 0] {
            content(&mut graph, id);
        }
        edge(&mut graph, 2, 3);
        edge(&mut graph, 1, 2);
        edge(&mut graph, 0, 1);

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert_eq!(subevents.len(), 1);
        assert_eq!(subevents[0].representative, NodeId(1));
    }

    #[test]
    fn all_zero_centrality_picks_lowest_content_node() {
        let mut graph = Graph::new();
        content(&mut graph, 4);
        content(&mut graph, 2);
        edge(&mut graph, 2, 4);

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert_eq!(descriptions(&subevents), vec!["text 2".to_string()]);
    }

    #[test]
    fn small_components_do_not_qualify() {
        // Sizes 3 and 1: mean 2, only the triangle qualifies.
        let mut graph = Graph::new();
        for id in 0..4 {
            content(&mut graph, id);
        }
        edge(&mut graph, 0, 1);
        edge(&mut graph, 1, 2);

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert_eq!(subevents.len(), 1);
        assert_eq!(subevents[0].size, 3);
    }

    #[test]
    fn only_publishers_yields_nothing() {
        let mut graph = Graph::new();
        graph.insert_node(Node::publisher(NodeId(1)));
        graph.insert_node(Node::publisher(NodeId(2)));
        edge(&mut graph, 1, 2);

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert!(subevents.is_empty());
    }

    #[test]
    fn oversized_component_is_an_error() {
        let mut graph = Graph::new();
        for id in 0..4 {
            content(&mut graph, id);
        }
        edge(&mut graph, 0, 1);
        edge(&mut graph, 1, 2);
        edge(&mut graph, 2, 3);

        let result = delineate(&graph, 3);
        assert!(matches!(
            result,
            Err(DeliError::ComponentTooLarge { size: 4, limit: 3 })
        ));
    }

    #[test]
    fn threshold_is_mean_size() {
        let components: Vec<BTreeSet<NodeId>> = vec![
            [NodeId(0), NodeId(1), NodeId(2), NodeId(3)].into_iter().collect(),
            [NodeId(4), NodeId(5)].into_iter().collect(),
        ];
        assert_eq!(subevent_threshold(&components), Some(3.0));
        assert_eq!(subevent_threshold(&[]), None);
    }
}
