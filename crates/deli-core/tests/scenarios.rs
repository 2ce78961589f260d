//! # Detection Scenarios
//!
//! Concrete end-to-end cases, grouped by pipeline stage.
//!
//! ## Tiers
//! - S0: Bootstrap window
//! - S1: Classification against history
//! - S2: Sub-event delineation
//! - S3: Multi-window streams

use deli_core::{
    DeliError, Detector, DetectorConfig, Graph, Node, NodeId, SizeStatistics, WindowInput,
    WindowRecord, classify_and_prune, delineate, primitives::MAX_CENTRALITY_COMPONENT_SIZE,
};

/// Add a path-shaped content component with ids `first..first + size`.
fn add_path(graph: &mut Graph, first: u64, size: u64) {
    for id in first..first + size {
        graph.insert_node(Node::content(NodeId(id), format!("message {id}")));
        if id > first {
            graph.insert_edge(NodeId(id - 1), NodeId(id)).expect("edge");
        }
    }
}

// =============================================================================
// TIER S0: BOOTSTRAP
// =============================================================================

mod s0_bootstrap {
    use super::*;

    /// S0.1: Five singletons under (0, 0) and theta 17 are all events.
    #[test]
    fn zero_threshold_counts_every_component() {
        let mut graph = Graph::new();
        for id in 0..5 {
            graph.insert_node(Node::content(NodeId(id), "solo"));
        }

        let result = classify_and_prune(graph, &SizeStatistics::ZERO, 17.0).expect("classify");
        assert_eq!(result.threshold, 0.0);
        assert_eq!(result.event_count, 5);
        assert_eq!(result.pruned_nodes, 0);
        assert_eq!(result.cache.node_count(), 5);
    }

    /// S0.2: An empty first window yields nothing and fails nothing.
    #[test]
    fn empty_first_window() {
        let detector = Detector::new(DetectorConfig::default()).expect("detector");
        let outcome = detector
            .step(
                detector.initial_state().expect("state"),
                WindowInput::default(),
            )
            .expect("step");
        assert_eq!(outcome.report.event_count, 0);
        assert!(outcome.state.cache.is_empty());
        assert_eq!(outcome.state.stats, SizeStatistics::ZERO);
    }
}

// =============================================================================
// TIER S1: CLASSIFICATION
// =============================================================================

mod s1_classification {
    use super::*;

    /// S1.1: Sizes 3 and 12 with avg 5, std 1, theta 2 (threshold 7).
    #[test]
    fn small_pruned_large_detected() {
        let mut graph = Graph::new();
        add_path(&mut graph, 0, 3);
        add_path(&mut graph, 100, 12);

        let stats = SizeStatistics::new(5.0, 1.0).expect("stats");
        let result = classify_and_prune(graph, &stats, 2.0).expect("classify");

        assert_eq!(result.threshold, 7.0);
        assert_eq!(result.event_count, 1);
        assert_eq!(result.cache.node_count(), 12);
        assert!((100..112).all(|id| result.cache.contains_node(NodeId(id))));
        assert!((0..3).all(|id| !result.cache.contains_node(NodeId(id))));
    }

    /// S1.2: A component exactly at the mean is kept as a candidate.
    #[test]
    fn mean_tie_is_candidate() {
        let mut graph = Graph::new();
        add_path(&mut graph, 0, 5);

        let stats = SizeStatistics::new(5.0, 1.0).expect("stats");
        let result = classify_and_prune(graph, &stats, 2.0).expect("classify");
        assert_eq!(result.event_count, 0);
        assert_eq!(result.candidate_count, 1);
        assert_eq!(result.cache.node_count(), 5);
    }

    /// S1.3: A component exactly at the threshold is an event.
    #[test]
    fn threshold_tie_is_event() {
        let mut graph = Graph::new();
        add_path(&mut graph, 0, 7);

        let stats = SizeStatistics::new(5.0, 1.0).expect("stats");
        let result = classify_and_prune(graph, &stats, 2.0).expect("classify");
        assert_eq!(result.event_count, 1);
    }
}

// =============================================================================
// TIER S2: DELINEATION
// =============================================================================

mod s2_delineation {
    use super::*;

    /// S2.1: Six content nodes split by a publisher into sub-components of 4
    /// and 2; only the larger qualifies (mean 3) and its hub describes it.
    #[test]
    fn larger_subcomponent_described_by_hub() {
        let mut graph = Graph::new();
        graph.insert_node(Node::content(NodeId(1), "outer a"));
        graph.insert_node(Node::content(NodeId(2), "central report"));
        graph.insert_node(Node::content(NodeId(3), "outer b"));
        graph.insert_node(Node::content(NodeId(4), "outer c"));
        graph.insert_node(Node::content(NodeId(5), "side a"));
        graph.insert_node(Node::content(NodeId(6), "side b"));
        graph.insert_node(Node::publisher(NodeId(50)));
        for (a, b) in [(1, 2), (2, 3), (2, 4), (4, 50), (50, 5), (5, 6)] {
            graph.insert_edge(NodeId(a), NodeId(b)).expect("edge");
        }

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert_eq!(subevents.len(), 1);
        assert_eq!(subevents[0].description, "central report");
        assert_eq!(subevents[0].size, 4);
    }

    /// S2.2: A publisher hub never shadows the best content node.
    #[test]
    fn publisher_hub_ignored() {
        let mut graph = Graph::new();
        graph.insert_node(Node::publisher(NodeId(0)));
        for id in 1..4 {
            graph.insert_node(Node::content(NodeId(id), format!("leaf {id}")));
            graph.insert_edge(NodeId(0), NodeId(id)).expect("edge");
        }
        graph.insert_edge(NodeId(1), NodeId(2)).expect("edge");

        let subevents = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        // Without the publisher, 1-2 and 3 remain; mean 1.5 → only 1-2 qualifies.
        assert_eq!(subevents.len(), 1);
        assert_eq!(subevents[0].description, "leaf 1");
    }

    /// S2.3: Repeated runs agree.
    #[test]
    fn repeated_runs_agree() {
        let mut graph = Graph::new();
        add_path(&mut graph, 0, 6);
        add_path(&mut graph, 10, 6);

        let first = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        let second = delineate(&graph, MAX_CENTRALITY_COMPONENT_SIZE).expect("delineate");
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        // Path of 6: nodes 2 and 3 tie at the top; the lower id wins.
        assert_eq!(first[0].representative, NodeId(2));
        assert_eq!(first[1].representative, NodeId(12));
    }
}

// =============================================================================
// TIER S3: STREAMS
// =============================================================================

mod s3_streams {
    use super::*;

    fn record(json: &str) -> Result<WindowInput, DeliError> {
        WindowRecord::from_json(json.as_bytes()).and_then(WindowRecord::into_input)
    }

    /// S3.1: A burst stands out against quiet history and is delineated.
    #[test]
    fn burst_after_quiet_window() {
        let detector = Detector::new(DetectorConfig {
            theta: 2.0,
            ..DetectorConfig::default()
        })
        .expect("detector");

        let mut quiet = Graph::new();
        add_path(&mut quiet, 0, 2);
        add_path(&mut quiet, 10, 2);
        add_path(&mut quiet, 20, 2);

        let mut burst = Graph::new();
        add_path(&mut burst, 100, 9);

        let windows = vec![
            Ok(WindowInput::from_graph(quiet.clone())),
            Ok(WindowInput::from_graph(quiet)),
            Ok(WindowInput::from_graph(burst)),
        ];
        let report = detector.run(windows).expect("run");

        // Window 0: bootstrap threshold 0 flags the three pairs.
        // Window 1: avg 2, std 0 → threshold 2; the cached pairs coalesce
        //           with the identical new ones, still three events.
        // Window 2: std is still 0, so the cached pairs and the new 9-path all
        //           reach threshold 2; only the path is large enough to
        //           delineate.
        assert_eq!(report.events_per_window(), vec![3, 3, 4]);
        let last = &report.subevents_per_window()[2];
        assert_eq!(last.len(), 1);
        assert_eq!(last[0], "message 104");
    }

    /// S3.2: A malformed record aborts the stream at its index.
    #[test]
    fn malformed_record_aborts() {
        let detector = Detector::new(DetectorConfig::default()).expect("detector");
        let windows = vec![
            record(r#"{"nodes": [{"id": 1, "nodetype": "content", "content": "ok"}]}"#),
            record(r#"{"nodes": [{"id": 2, "nodetype": "tweet"}]}"#),
        ];
        let result = detector.run(windows);
        assert!(matches!(result, Err(DeliError::Window { index: 1, .. })));
    }
}
