//! # Betweenness Centrality
//!
//! Brandes' algorithm over an unweighted, undirected graph.
//!
//! Scores are normalized to the fraction of shortest paths between pairs of
//! other nodes that pass through each node: raw pair counts are scaled by
//! `2 / ((n - 1)(n - 2))` for `n > 2` and left unscaled (all zero) otherwise.

#![allow(clippy::float_arithmetic)]

use crate::{Graph, NodeId};
use std::collections::{BTreeMap, VecDeque};

/// Compute betweenness centrality for every node of `graph`.
///
/// Runs in `O(V * E)`. Callers bound the component size before calling.
#[must_use]
pub fn betweenness_centrality(graph: &Graph) -> BTreeMap<NodeId, f64> {
    let ids: Vec<NodeId> = graph.node_ids().collect();
    let n = ids.len();
    let index: BTreeMap<NodeId, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let adjacency: Vec<Vec<usize>> = ids
        .iter()
        .map(|id| {
            graph
                .neighbors(*id)
                .filter_map(|neighbor| index.get(&neighbor).copied())
                .collect()
        })
        .collect();

    let mut scores = vec![0.0f64; n];

    for source in 0..n {
        let mut order = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0f64; n];
        let mut distance: Vec<Option<usize>> = vec![None; n];

        sigma[source] = 1.0;
        distance[source] = Some(0);
        let mut queue = VecDeque::from([source]);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            let Some(dv) = distance[v] else {
                continue;
            };
            for &w in &adjacency[v] {
                if distance[w].is_none() {
                    distance[w] = Some(dv + 1);
                    queue.push_back(w);
                }
                if distance[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0f64; n];
        while let Some(w) = order.pop() {
            for &v in &predecessors[w] {
                delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
            }
            if w != source {
                scores[w] += delta[w];
            }
        }
    }

    // Each unordered pair was counted from both ends.
    let scale = if n > 2 {
        1.0 / ((n - 1) as f64 * (n - 2) as f64)
    } else {
        1.0
    };

    ids.into_iter()
        .zip(scores)
        .map(|(id, score)| (id, score * scale))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
