//! # deli-core
//!
//! Incremental event detection over a stream of windowed similarity graphs.
//!
//! Each time window contributes a graph of publisher and content nodes whose
//! similarity edges were revealed upstream. This crate tracks connected
//! components across windows and flags those whose size is anomalous against
//! recent history, then breaks each detected event into sub-events using
//! betweenness centrality.
//!
//! ## Pipeline
//!
//! ```text
//! window graph ─┐
//!               ├─ merge ─ classify & prune ─┬─ cache ──────────► next window
//! cache graph ──┘                            └─ [events > 0] delineate ─► sub-events
//! window CC sizes ─ tracker ─────────────────────────────────────► next (avg, std)
//! ```
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no I/O, no logging, no async
//! - Deterministic: ordered collections and explicit tie-breaking
//! - Explicit state: the cross-window `(avg, std, cache)` is a value returned
//!   by each step and passed into the next

// =============================================================================
// MODULES
// =============================================================================

pub mod centrality;
pub mod classify;
pub mod config;
pub mod delineate;
pub mod evaluation;
pub mod formats;
pub mod graph;
pub mod merge;
pub mod primitives;
pub mod stats;
pub mod stream;
pub mod types;
pub mod window;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{DeliError, Node, NodeId, NodeType};

// =============================================================================
// RE-EXPORTS: Detection Pipeline
// =============================================================================

pub use centrality::betweenness_centrality;
pub use classify::{Classification, ComponentClass, classify_and_prune, classify_size};
pub use config::DetectorConfig;
pub use delineate::{Subevent, delineate};
pub use evaluation::{Evaluation, evaluate};
pub use graph::Graph;
pub use merge::compose;
pub use stats::SizeStatistics;
pub use stream::StreamReport;
pub use window::{Detector, WindowInput, WindowOutcome, WindowReport, WindowState};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{NodeRecord, WindowRecord};
