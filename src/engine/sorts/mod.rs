//! Instrumented sorting algorithms
//!
//! Each algorithm sorts a [`Workspace`] in place. The workspace owns the
//! working copy of the array and reports every comparison, exchange and
//! write to its [`Recorder`], so the algorithms only describe *what* they do.
//!
//! | Module | Emits |
//! |---|---|
//! | [`bubble`] | compare, swap, mark-sorted per pass |
//! | [`insertion`] | compare, overwrite (shifts and placement) |
//! | [`selection`] | compare, one swap per outer iteration |
//! | [`merge`] | compare, overwrite |
//! | [`quick`] | pivot-select, compare, swap |
//! | [`heap`] | compare, swap |
//!
//! The trailing mark-sorted step over all positions is added by
//! [`crate::engine::run`], not by the algorithms.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use crate::engine::errors::SortError;
use crate::trace::recorder::{Recorder, Tally};
use crate::trace::{Element, StepKind, Trace};
use std::cmp::Ordering;

/// Working array plus the recorder observing it
pub struct Workspace {
    data: Vec<Element>,
    recorder: Recorder,
}

impl Workspace {
    pub fn new(input: &[Element]) -> Self {
        Workspace {
            data: input.to_vec(),
            recorder: Recorder::new(input),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Element {
        self.data[index]
    }

    pub fn values(&self) -> &[Element] {
        &self.data
    }

    /// Compare the elements at two positions
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let (a, b) = (self.data[i], self.data[j]);
        self.compare_values(&[i, j], a, b)
    }

    /// Compare two values that are not necessarily in the array at the
    /// reported positions (a lifted insertion key, a merge run element)
    ///
    /// The step carries `[lhs, rhs]` as its values, whatever the snapshot
    /// holds at `indices`.
    pub fn compare_values(&mut self, indices: &[usize], lhs: Element, rhs: Element) -> Ordering {
        self.recorder.record_with_values(
            StepKind::Compare,
            indices,
            vec![lhs, rhs],
            &self.data,
            format!("Comparing {} and {}", lhs, rhs),
        );
        lhs.cmp(&rhs)
    }

    /// Exchange two positions; a self-swap is still recorded
    pub fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        let message = if i == j {
            format!("{} stays at index {}", self.data[i], i)
        } else {
            format!(
                "Swapped {} (index {}) and {} (index {})",
                self.data[i], i, self.data[j], j
            )
        };
        self.recorder
            .record(StepKind::Swap, &[i, j], &self.data, message);
    }

    /// Write a value into one position
    pub fn overwrite(&mut self, index: usize, value: Element) {
        self.data[index] = value;
        self.recorder.record(
            StepKind::Overwrite,
            &[index],
            &self.data,
            format!("Placed {} at index {}", value, index),
        );
    }

    pub fn select_pivot(&mut self, index: usize) {
        self.recorder.record(
            StepKind::PivotSelect,
            &[index],
            &self.data,
            format!("Chosen pivot: {} at index {}", self.data[index], index),
        );
    }

    pub fn mark_sorted(&mut self, indices: &[usize]) {
        let message = match indices {
            [single] => format!("{} is in its final position", self.data[*single]),
            _ => format!("{} elements in their final positions", indices.len()),
        };
        self.recorder
            .record(StepKind::MarkSorted, indices, &self.data, message);
    }

    /// Emit the terminal mark-sorted step over every position
    pub fn mark_all_sorted(&mut self) {
        let all: Vec<usize> = (0..self.data.len()).collect();
        self.recorder
            .record(StepKind::MarkSorted, &all, &self.data, "Array is sorted");
    }

    pub fn tally(&self) -> Tally {
        self.recorder.tally()
    }

    /// Seal the trace and hand back the sorted array
    pub fn finish(self) -> Result<(Trace, Tally, Vec<Element>), SortError> {
        let (trace, tally) = self.recorder.finish()?;
        Ok((trace, tally, self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_swap_is_recorded() {
        let mut ws = Workspace::new(&[4, 9]);
        ws.swap(1, 1);
        ws.mark_all_sorted();
        let (trace, tally, sorted) = ws.finish().unwrap();
        assert_eq!(tally.swaps, 1);
        assert_eq!(trace.steps()[0].kind, StepKind::Swap);
        assert_eq!(sorted, vec![4, 9]);
    }

    #[test]
    fn test_compare_values_records_operands() {
        let mut ws = Workspace::new(&[5, 1]);
        // Operands need not be the values currently at the reported positions
        assert_eq!(ws.compare_values(&[0, 1], 3, 7), Ordering::Less);
        ws.swap(0, 1);
        ws.mark_all_sorted();
        let (trace, _, _) = ws.finish().unwrap();
        let step = &trace.steps()[0];
        assert_eq!(step.values, vec![3, 7]);
        assert_eq!(step.message, "Comparing 3 and 7");
    }

    #[test]
    fn test_compare_does_not_mutate() {
        let mut ws = Workspace::new(&[3, 1]);
        assert_eq!(ws.compare(0, 1), Ordering::Greater);
        assert_eq!(ws.values(), &[3, 1]);
        assert_eq!(ws.tally().comparisons, 1);
    }
}
