//! # Component Classifier & Pruner
//!
//! Partitions a merged graph into connected components and labels each one
//! against the current size statistics:
//!
//! | Size `n` | Class | Fate |
//! |----------|-------|------|
//! | `n < avg` | Noise | removed |
//! | `avg <= n < threshold` | Candidate | kept in cache |
//! | `n >= threshold` | Event | kept in cache, counted |
//!
//! where `threshold = theta * std + avg`. Ties at `avg` are candidates; ties at
//! `threshold` are events.

#![allow(clippy::float_arithmetic)]

use crate::stats::{SizeStatistics, validate_theta};
use crate::{DeliError, Graph, NodeId};
use serde::{Deserialize, Serialize};

/// Verdict for one connected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentClass {
    /// Smaller than the running average. Pruned.
    Noise,
    /// Large enough to be cached, not yet an event.
    Candidate,
    /// At or above the event threshold.
    Event,
}

/// Classify a component by its node count.
#[must_use]
pub fn classify_size(size: usize, stats: &SizeStatistics, theta: f64) -> ComponentClass {
    let n = size as f64;
    if n < stats.avg() {
        ComponentClass::Noise
    } else if n >= stats.threshold(theta) {
        ComponentClass::Event
    } else {
        ComponentClass::Candidate
    }
}

/// Outcome of classifying and pruning one merged graph.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Number of components at or above the threshold.
    pub event_count: usize,
    /// Number of components kept without reaching the threshold.
    pub candidate_count: usize,
    /// Number of components discarded as noise.
    pub noise_count: usize,
    /// Number of nodes removed with the noise components.
    pub pruned_nodes: usize,
    /// The threshold that was applied.
    pub threshold: f64,
    /// The pruned graph, to be carried as the next window's cache.
    pub cache: Graph,
}

/// Classify every component of `merged` and drop the noise.
///
/// Returns `DeliError::InvalidParameter` if `theta` is negative or not finite.
pub fn classify_and_prune(
    mut merged: Graph,
    stats: &SizeStatistics,
    theta: f64,
) -> Result<Classification, DeliError> {
    validate_theta(theta)?;

    let mut event_count = 0usize;
    let mut candidate_count = 0usize;
    let mut noise_count = 0usize;
    let mut noise_nodes: Vec<NodeId> = Vec::new();

    for component in merged.connected_components() {
        match classify_size(component.len(), stats, theta) {
            ComponentClass::Noise => {
                noise_count += 1;
                noise_nodes.extend(component);
            }
            ComponentClass::Candidate => candidate_count += 1,
            ComponentClass::Event => event_count += 1,
        }
    }

    let pruned_nodes = merged.remove_nodes(noise_nodes);

    Ok(Classification {
        event_count,
        candidate_count,
        noise_count,
        pruned_nodes,
        threshold: stats.threshold(theta),
        cache: merged,
    })
}

// =============================================================================
// TESTS
// =============================================================================
