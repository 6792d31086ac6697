//! Selection sort
//!
//! Every outer iteration scans the unsorted suffix for its minimum and swaps
//! it into place. The swap is emitted even when the minimum is already at
//! the front, so a run of length `n` always has exactly `n - 1` swaps.

use super::Workspace;
use std::cmp::Ordering;

pub fn sort(ws: &mut Workspace) {
    let n = ws.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if ws.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        ws.swap(i, min);
    }
}
