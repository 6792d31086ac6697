//! Sorting engine
//!
//! This module runs one of the six supported algorithms over a copy of the
//! caller's array and returns the recorded trace:
//! - [`sorts`]: the instrumented algorithms and their shared [`sorts::Workspace`]
//! - [`input`]: validation, parsing and random generation of input arrays
//! - [`errors`]: the [`SortError`] taxonomy
//! - [`constants`]: value range, length cap and playback timing
//!
//! # Determinism
//!
//! For a fixed input the step sequence is identical across runs; nothing in
//! an algorithm depends on time, randomness or hash order. Only
//! [`RunMetrics::elapsed`] varies.

pub mod constants;
pub mod errors;
pub mod input;
pub mod sorts;

use crate::trace::{RunMetrics, Trace};
pub use crate::trace::Element;
pub use errors::SortError;
use serde::{Deserialize, Serialize};
use sorts::Workspace;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// The supported algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmId {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::Bubble,
        AlgorithmId::Insertion,
        AlgorithmId::Selection,
        AlgorithmId::Merge,
        AlgorithmId::Quick,
        AlgorithmId::Heap,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::Bubble => "bubble",
            AlgorithmId::Insertion => "insertion",
            AlgorithmId::Selection => "selection",
            AlgorithmId::Merge => "merge",
            AlgorithmId::Quick => "quick",
            AlgorithmId::Heap => "heap",
        }
    }

    fn sort_fn(self) -> fn(&mut Workspace) {
        match self {
            AlgorithmId::Bubble => sorts::bubble::sort,
            AlgorithmId::Insertion => sorts::insertion::sort,
            AlgorithmId::Selection => sorts::selection::sort,
            AlgorithmId::Merge => sorts::merge::sort,
            AlgorithmId::Quick => sorts::quick::sort,
            AlgorithmId::Heap => sorts::heap::sort,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SortError::UnknownAlgorithm { id: s.to_string() })
    }
}

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub algorithm: AlgorithmId,
    pub trace: Arc<Trace>,
    pub metrics: RunMetrics,
    pub sorted: Vec<Element>,
}

/// Run `algorithm` over a copy of `input`
///
/// The caller's array is never modified. Invalid input fails before any work
/// is done; an inconsistent trace fails closed with
/// [`SortError::InternalTrace`].
pub fn run(algorithm: AlgorithmId, input: &[Element]) -> Result<RunOutput, SortError> {
    input::validate(input)?;

    let started = Instant::now();
    let mut ws = Workspace::new(input);
    (algorithm.sort_fn())(&mut ws);
    ws.mark_all_sorted();
    let elapsed = started.elapsed();

    let (trace, tally, sorted) = ws.finish().inspect_err(|e| {
        warn!(%algorithm, error = %e, "discarding inconsistent trace");
    })?;

    debug!(
        %algorithm,
        len = input.len(),
        steps = trace.len(),
        comparisons = tally.comparisons,
        swaps = tally.swaps,
        "run finished"
    );

    Ok(RunOutput {
        algorithm,
        trace: Arc::new(trace),
        metrics: RunMetrics {
            comparisons: tally.comparisons,
            swaps: tally.swaps,
            elapsed,
        },
        sorted,
    })
}

/// Run an algorithm given by its string id
pub fn run_named(id: &str, input: &[Element]) -> Result<RunOutput, SortError> {
    run(id.parse()?, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;

    #[test]
    fn test_parse_ids() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>().unwrap(), id);
        }
        assert_eq!(
            "bogo".parse::<AlgorithmId>(),
            Err(SortError::UnknownAlgorithm {
                id: "bogo".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_algorithm_does_no_work() {
        let err = run_named("shell", &[0]).unwrap_err();
        // The id is rejected before the (invalid) input is even looked at
        assert!(matches!(err, SortError::UnknownAlgorithm { .. }));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![9, 4, 7];
        let out = run(AlgorithmId::Heap, &input).unwrap();
        assert_eq!(input, vec![9, 4, 7]);
        assert_eq!(out.sorted, vec![4, 7, 9]);
        assert_eq!(out.trace.initial(), &[9, 4, 7]);
    }

    #[test]
    fn test_terminal_step_marks_everything() {
        for id in AlgorithmId::ALL {
            let out = run(id, &[3, 1, 2]).unwrap();
            let last = out.trace.steps().last().unwrap();
            assert_eq!(last.kind, StepKind::MarkSorted, "{id}");
            assert_eq!(last.indices, vec![0, 1, 2], "{id}");
        }
    }

    #[test]
    fn test_empty_input_is_malformed() {
        assert!(matches!(
            run(AlgorithmId::Bubble, &[]),
            Err(SortError::MalformedInput { .. })
        ));
    }
}
