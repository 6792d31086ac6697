//! Quick sort with the Lomuto partition scheme
//!
//! The last element of each range is the pivot. Elements not greater than the
//! pivot are swapped to the front of the range (an in-place self exchange is
//! skipped), then the pivot is swapped into its final slot. The left
//! partition is sorted before the right.

use super::Workspace;
use std::cmp::Ordering;

pub fn sort(ws: &mut Workspace) {
    if ws.len() > 1 {
        sort_range(ws, 0, ws.len() - 1);
    }
}

fn sort_range(ws: &mut Workspace, low: usize, high: usize) {
    if low >= high {
        return;
    }
    let p = partition(ws, low, high);
    if p > low {
        sort_range(ws, low, p - 1);
    }
    sort_range(ws, p + 1, high);
}

fn partition(ws: &mut Workspace, low: usize, high: usize) -> usize {
    ws.select_pivot(high);

    let mut store = low;
    for j in low..high {
        // The pivot stays at `high` until the final swap
        if ws.compare(j, high) != Ordering::Greater {
            if store != j {
                ws.swap(store, j);
            }
            store += 1;
        }
    }

    ws.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;

    #[test]
    fn test_reference_input() {
        let mut ws = Workspace::new(&[5, 3, 8, 1]);
        sort(&mut ws);
        ws.mark_all_sorted();
        let (trace, tally, sorted) = ws.finish().unwrap();

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        // Pivot 1 over [0..=3] lands at 0, then pivot 5 over [1..=3] lands at 2
        assert_eq!(trace.count(StepKind::PivotSelect), 2);
        assert_eq!(tally.comparisons, 3 + 2);
        assert_eq!(trace.steps()[0].kind, StepKind::PivotSelect);
        assert_eq!(trace.steps()[0].indices, vec![3]);
    }

    #[test]
    fn test_left_partition_sorted_before_right() {
        let mut ws = Workspace::new(&[2, 1, 9, 8, 5]);
        sort(&mut ws);
        ws.mark_all_sorted();
        let (trace, _, sorted) = ws.finish().unwrap();

        assert_eq!(sorted, vec![1, 2, 5, 8, 9]);
        // Pivot 5 lands at 2, leaving [0..=1] and [3..=4]
        let pivots: Vec<usize> = trace
            .steps()
            .iter()
            .filter(|s| s.kind == StepKind::PivotSelect)
            .map(|s| s.indices[0])
            .collect();
        assert_eq!(pivots, vec![4, 1, 4]);
    }

    #[test]
    fn test_final_pivot_swap_always_emitted() {
        let mut ws = Workspace::new(&[1, 2]);
        sort(&mut ws);
        // 1 <= 2 stays in place (no exchange), pivot swaps with itself
        assert_eq!(ws.tally().swaps, 1);
        assert_eq!(ws.values(), &[1, 2]);
    }
}
