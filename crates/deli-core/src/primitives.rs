//! # Detector Primitives
//!
//! Fixed constants and defaults for the detector.
//!
//! These are compiled into the binary; run-time tuning goes through
//! [`DetectorConfig`](crate::DetectorConfig).

/// Default event-size multiplier.
///
/// A component must exceed the running mean by this many standard deviations
/// to count as an event.
pub const DEFAULT_THETA: f64 = 10.0;

/// Upper bound on the number of nodes in a component handed to the
/// betweenness computation.
///
/// Brandes' algorithm is `O(V * E)` per component; this bounds the latency of
/// a single window step.
pub const MAX_CENTRALITY_COMPONENT_SIZE: usize = 20_000;

/// Centrality scores closer than this are treated as tied.
pub const CENTRALITY_TIE_EPSILON: f64 = 1e-12;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of nodes in a single window record.
///
/// Records larger than this are rejected when parsed.
pub const MAX_WINDOW_NODES: usize = 1_000_000;

/// Maximum number of edges in a single window record.
pub const MAX_WINDOW_EDGES: usize = 10_000_000;
