//! # Window Orchestrator
//!
//! Runs one detection step per time window:
//!
//! ```text
//! (stats_t, cache_t) + window graph
//!     → compose → classify & prune → (event_count, cache_t+1)
//!     → [event_count > 0] delineate → sub-events
//!     → tracker(window CC sizes) → stats_t+1
//! ```
//!
//! The state is an explicit value: each step consumes the previous
//! [`WindowState`] and returns the next one. Windows must be stepped in order.

use crate::classify::classify_and_prune;
use crate::delineate::{Subevent, delineate};
use crate::merge::compose;
use crate::stats::SizeStatistics;
use crate::{DeliError, DetectorConfig, Graph};
use serde::Serialize;

// =============================================================================
// STATE & INPUT
// =============================================================================

/// Cross-window state: size statistics for the next threshold and the cached
/// candidate graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowState {
    pub stats: SizeStatistics,
    pub cache: Graph,
}

impl WindowState {
    /// Bootstrap state with an empty cache.
    #[must_use]
    pub fn initial(stats: SizeStatistics) -> Self {
        Self {
            stats,
            cache: Graph::new(),
        }
    }
}

/// Input for one window, as produced by the upstream graph builder.
#[derive(Debug, Clone, Default)]
pub struct WindowInput {
    /// The window's snapshot graph with similarity edges already revealed.
    pub graph: Graph,
    /// Component sizes reported by the upstream noise-pruning pass, before
    /// merging with the cache.
    pub cc_sizes: Vec<usize>,
}

impl WindowInput {
    /// Build an input whose size list is taken from the graph's own
    /// components.
    #[must_use]
    pub fn from_graph(graph: Graph) -> Self {
        let cc_sizes = graph.component_sizes();
        Self { graph, cc_sizes }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// What one window produced, apart from the carried state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowReport {
    /// Components at or above the threshold.
    pub event_count: usize,
    /// Components cached without reaching the threshold.
    pub candidate_count: usize,
    /// Components pruned as noise.
    pub noise_count: usize,
    /// Nodes removed with the noise.
    pub pruned_nodes: usize,
    /// Nodes carried into the next window.
    pub cache_nodes: usize,
    /// Threshold applied to this window.
    pub threshold: f64,
    /// Statistics that set this window's threshold.
    pub applied: SizeStatistics,
    /// Statistics handed to the next window.
    pub next: SizeStatistics,
    /// The size list was empty and the `(0, 0)` sentinel was used.
    pub sentinel_statistics: bool,
    /// Delineated sub-events, empty when no event was found.
    pub subevents: Vec<Subevent>,
}

impl WindowReport {
    /// Sub-event descriptions in order.
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        crate::delineate::descriptions(&self.subevents)
    }
}

/// Result of one window step: the report plus the state for the next step.
#[derive(Debug, Clone)]
pub struct WindowOutcome {
    pub report: WindowReport,
    pub state: WindowState,
}

// =============================================================================
// DETECTOR
// =============================================================================

/// The event detector. Holds only run-constant parameters.
#[derive(Debug, Clone)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Create a detector from a validated configuration.
    pub fn new(config: DetectorConfig) -> Result<Self, DeliError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The run configuration.
    #[must_use]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// State for the first window: configured bootstrap statistics and an
    /// empty cache.
    pub fn initial_state(&self) -> Result<WindowState, DeliError> {
        Ok(WindowState::initial(self.config.initial_statistics()?))
    }

    /// Process one window.
    ///
    /// On error the previous state is lost to this call; the caller decides
    /// whether to skip the window (retrying from a saved state) or abort.
    pub fn step(&self, state: WindowState, input: WindowInput) -> Result<WindowOutcome, DeliError> {
        let merged = compose(&input.graph, &state.cache);
        let classification = classify_and_prune(merged, &state.stats, self.config.theta)?;

        let subevents = if classification.event_count > 0 {
            delineate(&classification.cache, self.config.max_component_size)?
        } else {
            Vec::new()
        };

        let next = SizeStatistics::from_sizes(&input.cc_sizes);

        let report = WindowReport {
            event_count: classification.event_count,
            candidate_count: classification.candidate_count,
            noise_count: classification.noise_count,
            pruned_nodes: classification.pruned_nodes,
            cache_nodes: classification.cache.node_count(),
            threshold: classification.threshold,
            applied: state.stats,
            next,
            sentinel_statistics: input.cc_sizes.is_empty(),
            subevents,
        };

        Ok(WindowOutcome {
            report,
            state: WindowState {
                stats: next,
                cache: classification.cache,
            },
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
