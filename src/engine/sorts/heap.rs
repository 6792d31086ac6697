//! Heap sort over a max-heap
//!
//! The heap is built bottom-up from the last non-leaf index. Extraction swaps
//! the root with the end of the heap, shrinks the heap by one and sifts the
//! new root down.

use super::Workspace;
use std::cmp::Ordering;

pub fn sort(ws: &mut Workspace) {
    let n = ws.len();

    for root in (0..n / 2).rev() {
        sift_down(ws, n, root);
    }

    for end in (1..n).rev() {
        ws.swap(0, end);
        sift_down(ws, end, 0);
    }
}

/// Restore the heap property below `root` within the first `size` elements
fn sift_down(ws: &mut Workspace, size: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < size && ws.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        if right < size && ws.compare(right, largest) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }

        ws.swap(root, largest);
        root = largest;
    }
}
