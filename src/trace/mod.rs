//! Step traces recorded while a sorting algorithm runs
//!
//! A [`Trace`] is the complete, ordered history of one algorithm run over one
//! input array. Each [`Step`] owns a full copy of the array *after* its event
//! was applied, so a renderer can jump to any step without replaying the ones
//! before it.
//!
//! Traces are produced by [`recorder::Recorder`] and are immutable once
//! sealed. They are shared between playback lanes behind an `Arc`.

pub mod recorder;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A single array value. Valid values lie in
/// [`MIN_VALUE`](crate::engine::constants::MIN_VALUE)..=[`MAX_VALUE`](crate::engine::constants::MAX_VALUE).
pub type Element = u32;

/// The observable event a step describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Compare,
    Swap,
    PivotSelect,
    MarkSorted,
    /// A write into the array that is not an exchange (merge and insertion sort)
    Overwrite,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::PivotSelect => "pivot-select",
            StepKind::MarkSorted => "mark-sorted",
            StepKind::Overwrite => "overwrite",
        }
    }

    /// Whether applying this step may change the array
    pub fn moves_elements(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Overwrite)
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded event plus the array state after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub indices: Vec<usize>,
    /// Values involved, in message order. Usually the values at `indices` in
    /// `array`; a compare step carries its two operands instead.
    pub values: Vec<Element>,
    #[serde(rename = "array")]
    pub snapshot: Vec<Element>,
    pub message: String,
}

impl Step {
    /// Positions where `before` and this step's snapshot disagree
    pub fn changed_positions(&self, before: &[Element]) -> Vec<usize> {
        before
            .iter()
            .zip(&self.snapshot)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A sealed, replayable step sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    initial: Vec<Element>,
    steps: Vec<Step>,
}

impl Trace {
    /// The array as it was before the first step
    pub fn initial(&self) -> &[Element] {
        &self.initial
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Array state after the last step (the initial array for an empty trace)
    pub fn final_snapshot(&self) -> &[Element] {
        self.steps
            .last()
            .map(|step| step.snapshot.as_slice())
            .unwrap_or(&self.initial)
    }

    /// Number of steps of the given kind
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|step| step.kind == kind).count()
    }
}

/// Aggregate counters for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunMetrics {
    pub comparisons: usize,
    /// Element moves: `swap` plus `overwrite` steps
    pub swaps: usize,
    pub elapsed: Duration,
}

impl RunMetrics {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
