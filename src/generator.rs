//! Owns the data a scenario hands to the algorithms.
//!
//! One baseline ascending sequence is built per run configuration. The
//! active window is a suffix of it, tracked as an explicit offset so
//! shrinking never reallocates. The scenario image lives in `staged`; the
//! buffer the algorithms are allowed to mutate is `working`, refreshed from
//! `staged` before every timed trial so no trial ever observes another
//! trial's output.

use crate::scenarios::{self, Scenario};

pub struct ScenarioGenerator {
    /// Ascending source of truth, `baseline[i] == i + 1`. Never mutated.
    baseline: Vec<i64>,
    /// Scenario-transformed image of the current window.
    staged: Vec<i64>,
    /// Scratch copy of `staged` handed out to algorithms.
    working: Vec<i64>,
    /// Window start into `baseline`; the window is `baseline[offset..]`.
    offset: usize,
}

impl ScenarioGenerator {
    pub fn new(max_size: usize) -> Self {
        let baseline: Vec<i64> = (1..=max_size as i64).collect();
        let staged = baseline.clone();
        let working = Vec::with_capacity(max_size);

        Self {
            baseline,
            staged,
            working,
            offset: 0,
        }
    }

    /// Restores the staged window to the baseline's ascending values.
    pub fn reset(&mut self) {
        self.staged.clear();
        self.staged.extend_from_slice(&self.baseline[self.offset..]);
    }

    /// Rebuilds the staged window: reset, canonical ascending pass, then the
    /// scenario transform on top.
    pub fn apply(&mut self, scenario: Scenario) {
        self.reset();
        scenarios::make_ascending(&mut self.staged);
        scenario.transform(&mut self.staged);
    }

    /// Moves the window start forward by `by` elements.
    pub fn shrink_by(&mut self, by: usize) {
        self.offset = (self.offset + by).min(self.baseline.len());
        self.reset();
    }

    /// Shrinks the window until it is exactly `len` elements long. The
    /// window only ever shrinks; growing it back is not supported.
    pub fn shrink_to(&mut self, len: usize) {
        let target_offset = self.baseline.len().saturating_sub(len);
        debug_assert!(target_offset >= self.offset);
        self.offset = target_offset;
        self.reset();
    }

    /// The active scenario-transformed window.
    pub fn window(&self) -> &[i64] {
        &self.staged
    }

    pub fn window_len(&self) -> usize {
        self.staged.len()
    }

    /// Refreshes the working buffer from the staged image and hands it out.
    /// This is the reset discipline between timed trials.
    pub fn working_copy(&mut self) -> &mut [i64] {
        self.working.clear();
        self.working.extend_from_slice(&self.staged);
        &mut self.working
    }

    /// The working buffer as the last algorithm left it.
    pub fn last_output(&self) -> &[i64] {
        &self.working
    }
}
