//! Insertion sort, modelled as shifts rather than exchanges
//!
//! The key is lifted out, larger elements are shifted one slot right
//! (an overwrite each) and the key is written into the gap. The placement is
//! recorded even when the key does not move.

use super::Workspace;
use std::cmp::Ordering;

pub fn sort(ws: &mut Workspace) {
    for i in 1..ws.len() {
        let key = ws.get(i);
        let mut j = i;

        while j > 0 {
            let prev = ws.get(j - 1);
            if ws.compare_values(&[j - 1, j], prev, key) != Ordering::Greater {
                break;
            }
            ws.overwrite(j, prev);
            j -= 1;
        }

        ws.overwrite(j, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::StepKind;

    #[test]
    fn test_shifts_and_placements() {
        let mut ws = Workspace::new(&[5, 3, 8, 1]);
        sort(&mut ws);
        ws.mark_all_sorted();
        let (trace, tally, sorted) = ws.finish().unwrap();

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        // 3: cmp 5 (shift) | 8: cmp 5 | 1: cmp 8, 5, 3 (shift x3), hits front
        assert_eq!(tally.comparisons, 5);
        // 4 shifts + 3 placements
        assert_eq!(trace.count(StepKind::Overwrite), 7);
        assert_eq!(trace.count(StepKind::Swap), 0);
    }

    #[test]
    fn test_compare_steps_carry_lifted_key() {
        let mut ws = Workspace::new(&[5, 3, 8, 1]);
        sort(&mut ws);
        ws.mark_all_sorted();
        let (trace, _, _) = ws.finish().unwrap();

        // Key 1 after 8 has been shifted into its slot
        let step = trace
            .steps()
            .iter()
            .find(|s| s.message == "Comparing 5 and 1")
            .unwrap();
        assert_eq!(step.values, vec![5, 1]);
        assert_eq!(step.indices, vec![1, 2]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let mut ws = Workspace::new(&[2, 2, 1]);
        sort(&mut ws);
        assert_eq!(ws.values(), &[1, 2, 2]);
        // Equal neighbours never shift
        assert_eq!(ws.tally().comparisons, 3);
    }
}
