//! # Stream Driver
//!
//! Folds [`Detector::step`] over an ordered sequence of windows.
//!
//! Windows form a strict dependency chain: each step needs the statistics and
//! cache of the one before it, so the sequence is processed one window at a
//! time in the order given. The first failing window aborts the stream.

use crate::window::{Detector, WindowInput, WindowOutcome, WindowReport, WindowState};
use crate::DeliError;

/// Per-window results of a whole run.
#[derive(Debug, Clone, Default)]
pub struct StreamReport {
    /// One report per window, in input order.
    pub windows: Vec<WindowReport>,
    /// State after the last window.
    pub final_state: WindowState,
}

impl StreamReport {
    /// Number of events detected in each window.
    #[must_use]
    pub fn events_per_window(&self) -> Vec<usize> {
        self.windows.iter().map(|w| w.event_count).collect()
    }

    /// Sub-event descriptions of each window.
    #[must_use]
    pub fn subevents_per_window(&self) -> Vec<Vec<String>> {
        self.windows.iter().map(WindowReport::descriptions).collect()
    }
}

impl Detector {
    /// Run every window in order from the configured bootstrap state.
    pub fn run<I>(&self, windows: I) -> Result<StreamReport, DeliError>
    where
        I: IntoIterator<Item = Result<WindowInput, DeliError>>,
    {
        self.run_observed(windows, |_, _| {})
    }

    /// Run every window in order, calling `observe` after each step with the
    /// window index and its outcome.
    pub fn run_observed<I, F>(&self, windows: I, mut observe: F) -> Result<StreamReport, DeliError>
    where
        I: IntoIterator<Item = Result<WindowInput, DeliError>>,
        F: FnMut(usize, &WindowOutcome),
    {
        let mut state = self.initial_state()?;
        let mut reports = Vec::new();

        for (index, input) in windows.into_iter().enumerate() {
            let outcome = input
                .and_then(|input| self.step(state, input))
                .map_err(|e| e.in_window(index))?;
            observe(index, &outcome);
            reports.push(outcome.report);
            state = outcome.state;
        }

        Ok(StreamReport {
            windows: reports,
            final_state: state,
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
