//! Bubble sort with early exit
//!
//! Each pass compares adjacent pairs and swaps them when out of order, which
//! carries the largest remaining element to the end of the unsorted prefix.
//! That element is marked sorted when the pass ends. A pass without any swap
//! proves the prefix is already ordered and stops the sort.

use super::Workspace;
use std::cmp::Ordering;

pub fn sort(ws: &mut Workspace) {
    let n = ws.len();

    for pass in 0..n.saturating_sub(1) {
        let last = n - pass - 1;
        let mut swapped = false;

        for j in 0..last {
            if ws.compare(j, j + 1) == Ordering::Greater {
                ws.swap(j, j + 1);
                swapped = true;
            }
        }

        ws.mark_sorted(&[last]);
        if !swapped {
            break;
        }
    }
}
