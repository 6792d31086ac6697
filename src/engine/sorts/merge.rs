//! Top-down merge sort
//!
//! The range is split at its midpoint; the left half is sorted before the
//! right. Merging copies both runs out of the array and writes the merged
//! sequence back, one overwrite per element, including leftovers.

use super::Workspace;
use crate::trace::Element;
use std::cmp::Ordering;

pub fn sort(ws: &mut Workspace) {
    if ws.len() > 1 {
        sort_range(ws, 0, ws.len() - 1);
    }
}

fn sort_range(ws: &mut Workspace, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(ws, left, mid);
    sort_range(ws, mid + 1, right);
    merge(ws, left, mid, right);
}

fn merge(ws: &mut Workspace, left: usize, mid: usize, right: usize) {
    let left_run: Vec<Element> = ws.values()[left..=mid].to_vec();
    let right_run: Vec<Element> = ws.values()[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_run.len() && j < right_run.len() {
        let (a, b) = (left_run[i], right_run[j]);
        // Destination slot and the head of the right run
        if ws.compare_values(&[k, mid + 1 + j], a, b) != Ordering::Greater {
            ws.overwrite(k, a);
            i += 1;
        } else {
            ws.overwrite(k, b);
            j += 1;
        }
        k += 1;
    }

    for &value in left_run[i..].iter().chain(&right_run[j..]) {
        ws.overwrite(k, value);
        k += 1;
    }
}
