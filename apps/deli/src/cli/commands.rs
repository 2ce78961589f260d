//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::{self, Overrides};
use crate::{loader, report};
use deli_core::{DeliError, Detector, DetectorConfig, WindowOutcome, delineate, evaluate};
use std::path::Path;

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Load the configuration file, apply overrides and validate.
pub fn load_run_config(
    path: Option<&Path>,
    overrides: Overrides,
) -> Result<DetectorConfig, DeliError> {
    let config = config::resolve(config::load_config(path)?, overrides)?;
    tracing::debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Print the run parameters.
pub fn print_header(config: &DetectorConfig) {
    println!("DeLi event detection");
    println!("====================");
    println!("theta:              {}", config.theta);
    println!("initial avg / std:  {} / {}", config.initial_avg, config.initial_std);
    println!("max component size: {}", config.max_component_size);
    println!();
}

fn print_json(value: &serde_json::Value) -> Result<(), DeliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| DeliError::SerializationError(e.to_string()))?;
    println!("{}", text);
    Ok(())
}

/// Log one finished window.
fn log_window(index: usize, outcome: &WindowOutcome) {
    let report = &outcome.report;
    tracing::debug!(
        window = index,
        avg = report.applied.avg(),
        std = report.applied.std(),
        threshold = report.threshold,
        events = report.event_count,
        candidates = report.candidate_count,
        noise = report.noise_count,
        pruned = report.pruned_nodes,
        cache_nodes = report.cache_nodes,
        "Window processed"
    );
    if report.sentinel_statistics {
        tracing::warn!(
            window = index,
            "Empty component-size list; next window uses avg = std = 0"
        );
    }
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Process every window of a data directory.
pub fn cmd_run(
    config: &DetectorConfig,
    dir: &Path,
    ground_truth: Option<&Path>,
    json_mode: bool,
) -> Result<(), DeliError> {
    let detector = Detector::new(config.clone())?;
    let paths = loader::list_windows(dir)?;
    tracing::info!("Processing {} windows from {:?}", paths.len(), dir);

    let truth = ground_truth.map(loader::load_ground_truth).transpose()?;

    let windows = paths.iter().map(|path| loader::load_window(path));
    let stream = detector.run_observed(windows, log_window)?;

    let evaluation = truth
        .map(|flags| evaluate(&flags, &stream.events_per_window()))
        .transpose()?;

    let detected = stream.windows.iter().filter(|w| w.event_count > 0).count();
    tracing::info!(
        "Run complete: {} of {} windows contain events",
        detected,
        stream.windows.len()
    );

    if json_mode {
        return print_json(&report::render_json(&stream, evaluation.as_ref()));
    }
    print!("{}", report::render_text(&stream, evaluation.as_ref()));
    Ok(())
}

// =============================================================================
// CLASSIFY COMMAND
// =============================================================================

/// Run one window step from the bootstrap state with an empty cache.
pub fn cmd_classify(config: &DetectorConfig, file: &Path, json_mode: bool) -> Result<(), DeliError> {
    let detector = Detector::new(config.clone())?;
    let input = loader::load_window(file)?;
    let outcome = detector.step(detector.initial_state()?, input)?;
    log_window(0, &outcome);

    let window = &outcome.report;
    if json_mode {
        let mut output = report::window_json(0, window);
        output["next_avg"] = serde_json::json!(window.next.avg());
        output["next_std"] = serde_json::json!(window.next.std());
        return print_json(&output);
    }

    println!("Window: {:?}", file);
    println!("Threshold:  {}", window.threshold);
    println!("Events:     {}", window.event_count);
    println!("Candidates: {}", window.candidate_count);
    println!("Noise:      {} ({} nodes pruned)", window.noise_count, window.pruned_nodes);
    println!("Cached:     {} nodes", window.cache_nodes);
    println!(
        "Next avg / std: {} / {}",
        window.next.avg(),
        window.next.std()
    );
    for description in window.descriptions() {
        println!("  - {}", description);
    }
    Ok(())
}

// =============================================================================
// DELINEATE COMMAND
// =============================================================================

/// Delineate the sub-events of a single window graph.
pub fn cmd_delineate(config: &DetectorConfig, file: &Path, json_mode: bool) -> Result<(), DeliError> {
    let input = loader::load_window(file)?;
    let subevents = delineate(&input.graph, config.max_component_size)?;
    tracing::info!("Delineated {} sub-events from {:?}", subevents.len(), file);

    if json_mode {
        return print_json(&serde_json::json!({ "subevents": subevents }));
    }

    if subevents.is_empty() {
        println!("No sub-events.");
    }
    for subevent in &subevents {
        println!(
            "[node {} | size {} | centrality {:.4}] {}",
            subevent.representative, subevent.size, subevent.centrality, subevent.description
        );
    }
    Ok(())
}

// =============================================================================
// INIT-CONFIG COMMAND
// =============================================================================

/// Write the default configuration to `output`.
pub fn cmd_init_config(output: &Path, force: bool) -> Result<(), DeliError> {
    if output.exists() && !force {
        return Err(DeliError::IoError(format!(
            "'{}' already exists. Use --force to overwrite.",
            output.display()
        )));
    }

    let text = config::default_config_toml()?;
    std::fs::write(output, text)
        .map_err(|e| DeliError::IoError(format!("Write '{}': {}", output.display(), e)))?;
    tracing::info!("Wrote default configuration to {:?}", output);
    println!("Configuration written to {:?}", output);
    Ok(())
}
