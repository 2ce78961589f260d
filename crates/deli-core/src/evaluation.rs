//! # Evaluation
//!
//! Binary precision / recall / F1 of per-window event flags against ground
//! truth. A window counts as predicted positive when at least one event was
//! detected in it.

#![allow(clippy::float_arithmetic)]

use crate::DeliError;
use serde::{Deserialize, Serialize};

/// Scores for the positive ("event") class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Evaluation {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Compare ground-truth flags with per-window event counts.
///
/// Zero denominators score 0.0. Returns `DeliError::LengthMismatch` when the
/// sequences differ in length.
pub fn evaluate(ground_truth: &[bool], event_counts: &[usize]) -> Result<Evaluation, DeliError> {
    if ground_truth.len() != event_counts.len() {
        return Err(DeliError::LengthMismatch {
            expected: ground_truth.len(),
            actual: event_counts.len(),
        });
    }

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (&truth, &count) in ground_truth.iter().zip(event_counts) {
        match (truth, count > 0) {
            (true, true) => tp += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
            (false, false) => {}
        }
    }

    let ratio = |num: usize, den: usize| {
        if den == 0 { 0.0 } else { num as f64 / den as f64 }
    };
    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    Ok(Evaluation {
        precision,
        recall,
        f1,
        true_positives: tp,
        false_positives: fp,
        false_negatives: fn_,
    })
}
