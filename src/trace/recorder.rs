// Passive event sink that turns algorithm events into a sealed trace

use super::{Element, Step, StepKind, Trace};
use crate::engine::errors::SortError;

/// Comparison and move counters accumulated by a [`Recorder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub comparisons: usize,
    pub swaps: usize,
}

/// Collects steps for one algorithm run
///
/// The buffer is unbounded; input arrays are capped at
/// [`MAX_LEN`](crate::engine::constants::MAX_LEN) elements, which keeps
/// traces small in practice. Dropping a recorder without calling
/// [`finish`](Recorder::finish) discards everything recorded so far.
#[derive(Debug)]
pub struct Recorder {
    initial: Vec<Element>,
    steps: Vec<Step>,
    tally: Tally,
}

impl Recorder {
    pub fn new(initial: &[Element]) -> Self {
        Recorder {
            initial: initial.to_vec(),
            steps: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// Append a step. `snapshot` is the array state after the event.
    pub fn record(
        &mut self,
        kind: StepKind,
        indices: &[usize],
        snapshot: &[Element],
        message: impl Into<String>,
    ) {
        let values: Vec<Element> = indices
            .iter()
            .filter_map(|&i| snapshot.get(i).copied())
            .collect();
        self.record_with_values(kind, indices, values, snapshot, message);
    }

    /// Append a step whose values are not the ones found at `indices`, such
    /// as a comparison against a value lifted out of the array
    pub fn record_with_values(
        &mut self,
        kind: StepKind,
        indices: &[usize],
        values: Vec<Element>,
        snapshot: &[Element],
        message: impl Into<String>,
    ) {
        match kind {
            StepKind::Compare => self.tally.comparisons += 1,
            StepKind::Swap | StepKind::Overwrite => self.tally.swaps += 1,
            StepKind::PivotSelect | StepKind::MarkSorted => {}
        }

        self.steps.push(Step {
            kind,
            indices: indices.to_vec(),
            values,
            snapshot: snapshot.to_vec(),
            message: message.into(),
        });
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seal the trace after checking it is internally consistent
    ///
    /// A trace that fails any check is discarded and reported as
    /// [`SortError::InternalTrace`]; no partial trace ever escapes.
    pub fn finish(self) -> Result<(Trace, Tally), SortError> {
        self.verify()?;
        Ok((
            Trace {
                initial: self.initial,
                steps: self.steps,
            },
            self.tally,
        ))
    }

    fn verify(&self) -> Result<(), SortError> {
        let len = self.initial.len();
        let last = self
            .steps
            .last()
            .ok_or_else(|| SortError::internal("trace has no steps"))?;

        if last.kind != StepKind::MarkSorted || !last.indices.iter().copied().eq(0..len) {
            return Err(SortError::internal(
                "trace does not end with a mark-sorted step over every position",
            ));
        }

        let mut before = self.initial.as_slice();
        for (n, step) in self.steps.iter().enumerate() {
            if step.snapshot.len() != len {
                return Err(SortError::internal(format!(
                    "step {} has {} elements, expected {}",
                    n,
                    step.snapshot.len(),
                    len
                )));
            }
            if let Some(&bad) = step.indices.iter().find(|&&i| i >= len) {
                return Err(SortError::internal(format!(
                    "step {} references index {} past the end of the array",
                    n, bad
                )));
            }

            let changed = step.changed_positions(before);
            let allowed = step.kind.moves_elements();
            if changed.iter().any(|i| !allowed || !step.indices.contains(i)) {
                return Err(SortError::internal(format!(
                    "step {} ({}) changed positions {:?} outside {:?}",
                    n, step.kind, changed, step.indices
                )));
            }
            before = step.snapshot.as_slice();
        }

        if before.windows(2).any(|w| w[0] > w[1]) {
            return Err(SortError::internal("final snapshot is not sorted"));
        }
        let mut expected = self.initial.clone();
        expected.sort_unstable();
        if expected != before {
            return Err(SortError::internal(
                "final snapshot is not a permutation of the input",
            ));
        }

        Ok(())
    }
}
