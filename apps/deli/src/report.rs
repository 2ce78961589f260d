//! # Reporting
//!
//! Renders run results as human-readable text or as a JSON document.

use deli_core::{Evaluation, StreamReport, WindowReport};
use std::fmt::Write;

/// Render a whole run as text, one block per window.
#[must_use]
pub fn render_text(report: &StreamReport, evaluation: Option<&Evaluation>) -> String {
    let mut out = String::new();
    for (index, window) in report.windows.iter().enumerate() {
        out.push_str(&render_window_text(index, window));
    }
    if let Some(eval) = evaluation {
        out.push_str(&render_evaluation_text(eval));
    }
    out
}

/// Render one window as text.
#[must_use]
pub fn render_window_text(index: usize, window: &WindowReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "For time window: {}", index);
    if window.event_count == 0 {
        let _ = writeln!(out, "  There are no events detected!");
    } else {
        let _ = writeln!(
            out,
            "  There are {} events with the following subevents:",
            window.event_count
        );
        for description in window.descriptions() {
            let _ = writeln!(out, "    {}", description);
        }
    }
    out
}

/// Render evaluation scores as text.
#[must_use]
pub fn render_evaluation_text(eval: &Evaluation) -> String {
    format!(
        "\nEvaluation: precision={:.4} recall={:.4} f1={:.4} (tp={}, fp={}, fn={})\n",
        eval.precision,
        eval.recall,
        eval.f1,
        eval.true_positives,
        eval.false_positives,
        eval.false_negatives
    )
}

/// Render one window as a JSON object.
#[must_use]
pub fn window_json(index: usize, window: &WindowReport) -> serde_json::Value {
    serde_json::json!({
        "window": index,
        "event_count": window.event_count,
        "candidate_count": window.candidate_count,
        "noise_count": window.noise_count,
        "avg": window.applied.avg(),
        "std": window.applied.std(),
        "threshold": window.threshold,
        "cache_nodes": window.cache_nodes,
        "subevents": window.descriptions(),
    })
}

/// Render a whole run as a JSON document.
#[must_use]
pub fn render_json(report: &StreamReport, evaluation: Option<&Evaluation>) -> serde_json::Value {
    let windows: Vec<serde_json::Value> = report
        .windows
        .iter()
        .enumerate()
        .map(|(index, window)| window_json(index, window))
        .collect();

    let mut output = serde_json::json!({
        "windows": windows,
        "events_per_window": report.events_per_window(),
    });
    if let Some(eval) = evaluation {
        output["evaluation"] = serde_json::json!(eval);
    }
    output
}
