//! Educational metadata for each algorithm
//!
//! Looked up by [`AlgorithmId`] and shown next to the visualization. The
//! engine never reads it.

use crate::engine::AlgorithmId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

/// Reference implementation in one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub language: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub detailed_explanation: &'static str,
    /// Numbered walkthrough, one entry per step
    pub how_it_works: &'static [&'static str],
    pub time_complexity: Complexity,
    pub space_complexity: &'static str,
    pub stable: bool,
    pub adaptive: bool,
    pub applications: &'static [&'static str],
    pub code: &'static [Snippet],
}

impl AlgorithmInfo {
    pub fn snippet(&self, language: &str) -> Option<&'static Snippet> {
        self.code.iter().find(|s| s.language == language)
    }
}

const N_SQUARED: &str = "O(n²)";
const N_LOG_N: &str = "O(n log n)";

static BUBBLE: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    description: "Compares neighbouring elements and swaps them when they are out of \
                  order. The largest elements bubble up to the end with every pass. \
                  Simple to follow, slow on large inputs.",
    detailed_explanation: "Repeatedly steps through the list, comparing each pair of adjacent items \
                           and swapping them when they are in the wrong order. Passes repeat until \
                           one completes without a swap.",
    how_it_works: &[
        "Start at the beginning of the array",
        "Compare the first two elements",
        "If they are in the wrong order, swap them",
        "Move to the next pair and repeat",
        "Continue until you reach the end",
        "Repeat the entire process until no swaps are needed",
    ],
    time_complexity: Complexity {
        best: "O(n)",
        average: N_SQUARED,
        worst: N_SQUARED,
    },
    space_complexity: "O(1)",
    stable: true,
    adaptive: true,
    applications: &[
        "Teaching basic sorting concepts",
        "Small datasets (under 50 elements)",
        "Nearly sorted data where few swaps are needed",
    ],
    code: &[
        Snippet {
            language: "rust",
            source: r#"fn bubble_sort(arr: &mut [u32]) {
    let n = arr.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - 1 - pass {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}"#,
        },
        Snippet {
            language: "python",
            source: r#"def bubble_sort(arr):
    n = len(arr)
    for i in range(n):
        for j in range(0, n - i - 1):
            if arr[j] > arr[j + 1]:
                arr[j], arr[j + 1] = arr[j + 1], arr[j]
    return arr"#,
        },
    ],
};

static INSERTION: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    description: "Builds the sorted prefix one element at a time, shifting larger \
                  elements right to open a gap for the next key, like sorting a hand \
                  of playing cards.",
    detailed_explanation: "Builds the sorted array one item at a time. Each new element is taken out, \
                           the sorted prefix is searched from the right for its place, and it is \
                           inserted there.",
    how_it_works: &[
        "Start with the second element (assume the first is sorted)",
        "Compare it with elements in the sorted portion",
        "Shift larger elements to the right",
        "Insert the current element in its correct position",
        "Move to the next element and repeat",
        "Continue until all elements are processed",
    ],
    time_complexity: Complexity {
        best: "O(n)",
        average: N_SQUARED,
        worst: N_SQUARED,
    },
    space_complexity: "O(1)",
    stable: true,
    adaptive: true,
    applications: &[
        "Small datasets",
        "Nearly sorted data",
        "Online sorting as data arrives",
        "Final stage of hybrid sorts such as introsort",
    ],
    code: &[
        Snippet {
            language: "rust",
            source: r#"fn insertion_sort(arr: &mut [u32]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}"#,
        },
        Snippet {
            language: "python",
            source: r#"def insertion_sort(arr):
    for i in range(1, len(arr)):
        key = arr[i]
        j = i - 1
        while j >= 0 and arr[j] > key:
            arr[j + 1] = arr[j]
            j -= 1
        arr[j + 1] = key
    return arr"#,
        },
    ],
};

static SELECTION: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    description: "Splits the array into a sorted and an unsorted region and repeatedly \
                  moves the minimum of the unsorted region to its front.",
    detailed_explanation: "Keeps a sorted prefix and an unsorted suffix. Each iteration scans the \
                           suffix for its minimum and swaps it to the front of the suffix, growing \
                           the prefix by one.",
    how_it_works: &[
        "Treat the whole array as unsorted",
        "Scan the unsorted part for its smallest element",
        "Swap it with the first unsorted element",
        "The sorted part grows by one",
        "Repeat until one element is left",
    ],
    time_complexity: Complexity {
        best: N_SQUARED,
        average: N_SQUARED,
        worst: N_SQUARED,
    },
    space_complexity: "O(1)",
    stable: false,
    adaptive: false,
    applications: &[
        "Small datasets",
        "Memory-limited environments",
        "When the number of writes must be minimal",
    ],
    code: &[
        Snippet {
            language: "rust",
            source: r#"fn selection_sort(arr: &mut [u32]) {
    for i in 0..arr.len() {
        let mut min = i;
        for j in i + 1..arr.len() {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        arr.swap(i, min);
    }
}"#,
        },
        Snippet {
            language: "python",
            source: r#"def selection_sort(arr):
    for i in range(len(arr)):
        min_idx = i
        for j in range(i + 1, len(arr)):
            if arr[j] < arr[min_idx]:
                min_idx = j
        arr[i], arr[min_idx] = arr[min_idx], arr[i]
    return arr"#,
        },
    ],
};

static MERGE: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    description: "Divide and conquer: split the array in half until single elements \
                  remain, then merge the sorted halves back together.",
    detailed_explanation: "Divides the unsorted list into sublists of one element, then repeatedly \
                           merges sublists into larger sorted sublists until a single sorted list \
                           remains.",
    how_it_works: &[
        "Divide the array into two halves",
        "Recursively sort both halves",
        "Continue dividing until each piece has one element",
        "Merge the two sorted halves back together",
        "Result is a completely sorted array",
    ],
    time_complexity: Complexity {
        best: N_LOG_N,
        average: N_LOG_N,
        worst: N_LOG_N,
    },
    space_complexity: "O(n)",
    stable: true,
    adaptive: false,
    applications: &[
        "Large datasets needing predictable performance",
        "External sorting",
        "When stability is required",
    ],
    code: &[
        Snippet {
            language: "rust",
            source: r#"fn merge_sort(arr: &mut [u32]) {
    if arr.len() <= 1 {
        return;
    }
    let mid = arr.len() / 2;
    merge_sort(&mut arr[..mid]);
    merge_sort(&mut arr[mid..]);

    let (left, right) = (arr[..mid].to_vec(), arr[mid..].to_vec());
    let (mut i, mut j) = (0, 0);
    for slot in arr.iter_mut() {
        if j >= right.len() || (i < left.len() && left[i] <= right[j]) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}"#,
        },
        Snippet {
            language: "python",
            source: r#"def merge_sort(arr):
    if len(arr) <= 1:
        return arr

    mid = len(arr) // 2
    left = merge_sort(arr[:mid])
    right = merge_sort(arr[mid:])

    return merge(left, right)

def merge(left, right):
    result = []
    i = j = 0

    while i < len(left) and j < len(right):
        if left[i] <= right[j]:
            result.append(left[i])
            i += 1
        else:
            result.append(right[j])
            j += 1

    result.extend(left[i:])
    result.extend(right[j:])
    return result"#,
        },
    ],
};

static QUICK: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    description: "Picks a pivot, moves smaller elements before it and larger ones \
                  after it, then sorts both sides the same way. Fast on average and \
                  in place.",
    detailed_explanation: "Selects a pivot and partitions the other elements into those not greater \
                           than the pivot and those greater, then sorts both partitions the same way.",
    how_it_works: &[
        "Choose the last element as the pivot",
        "Move elements not greater than the pivot to the front",
        "Swap the pivot in after them",
        "Recursively sort the left part, then the right part",
        "No merging step is needed",
    ],
    time_complexity: Complexity {
        best: N_LOG_N,
        average: N_LOG_N,
        worst: N_SQUARED,
    },
    space_complexity: "O(log n)",
    stable: false,
    adaptive: false,
    applications: &[
        "General-purpose sorting",
        "In-place sorting when memory is limited",
        "Standard library sort implementations",
    ],
    code: &[
        Snippet {
            language: "rust",
            source: r#"fn quick_sort(arr: &mut [u32]) {
    if arr.len() <= 1 {
        return;
    }
    let high = arr.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if arr[j] <= arr[high] {
            arr.swap(store, j);
            store += 1;
        }
    }
    arr.swap(store, high);

    let (left, right) = arr.split_at_mut(store);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}"#,
        },
        Snippet {
            language: "python",
            source: r#"def quick_sort(arr, low=0, high=None):
    if high is None:
        high = len(arr) - 1

    if low < high:
        pi = partition(arr, low, high)
        quick_sort(arr, low, pi - 1)
        quick_sort(arr, pi + 1, high)

    return arr

def partition(arr, low, high):
    pivot = arr[high]
    i = low - 1

    for j in range(low, high):
        if arr[j] <= pivot:
            i += 1
            arr[i], arr[j] = arr[j], arr[i]

    arr[i + 1], arr[high] = arr[high], arr[i + 1]
    return i + 1"#,
        },
    ],
};

static HEAP: AlgorithmInfo = AlgorithmInfo {
    name: "Heap Sort",
    description: "Builds a max-heap from the array and repeatedly moves the root to \
                  the end of the shrinking heap.",
    detailed_explanation: "Arranges the array as a binary max-heap, then repeatedly swaps the root, \
                           the largest remaining element, to the end and restores the heap over what \
                           is left.",
    how_it_works: &[
        "Build a max-heap, starting from the last parent node",
        "Swap the root with the last element of the heap",
        "Shrink the heap by one",
        "Sift the new root down to restore the heap",
        "Repeat until the heap has one element",
    ],
    time_complexity: Complexity {
        best: N_LOG_N,
        average: N_LOG_N,
        worst: N_LOG_N,
    },
    space_complexity: "O(1)",
    stable: false,
    adaptive: false,
    applications: &[
        "Priority queues",
        "Guaranteed O(n log n) without extra memory",
    ],
    code: &[
        Snippet {
            language: "rust",
            source: r#"fn heap_sort(arr: &mut [u32]) {
    let n = arr.len();
    for root in (0..n / 2).rev() {
        sift_down(arr, n, root);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

fn sift_down(arr: &mut [u32], size: usize, mut root: usize) {
    loop {
        let mut largest = root;
        for child in [2 * root + 1, 2 * root + 2] {
            if child < size && arr[child] > arr[largest] {
                largest = child;
            }
        }
        if largest == root {
            return;
        }
        arr.swap(root, largest);
        root = largest;
    }
}"#,
        },
        Snippet {
            language: "python",
            source: r#"def heap_sort(arr):
    n = len(arr)

    for i in range(n // 2 - 1, -1, -1):
        heapify(arr, n, i)

    for i in range(n - 1, 0, -1):
        arr[0], arr[i] = arr[i], arr[0]
        heapify(arr, i, 0)

    return arr

def heapify(arr, n, i):
    largest = i
    left = 2 * i + 1
    right = 2 * i + 2

    if left < n and arr[left] > arr[largest]:
        largest = left

    if right < n and arr[right] > arr[largest]:
        largest = right

    if largest != i:
        arr[i], arr[largest] = arr[largest], arr[i]
        heapify(arr, n, largest)"#,
        },
    ],
};

pub fn info(id: AlgorithmId) -> &'static AlgorithmInfo {
    match id {
        AlgorithmId::Bubble => &BUBBLE,
        AlgorithmId::Insertion => &INSERTION,
        AlgorithmId::Selection => &SELECTION,
        AlgorithmId::Merge => &MERGE,
        AlgorithmId::Quick => &QUICK,
        AlgorithmId::Heap => &HEAP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_algorithm_has_info() {
        for id in AlgorithmId::ALL {
            let info = info(id);
            assert!(info.name.ends_with("Sort"));
            assert!(!info.applications.is_empty());
            assert!(!info.how_it_works.is_empty());
            assert!(!info.detailed_explanation.is_empty());
            let rust = info.snippet("rust").unwrap();
            assert!(rust.source.starts_with("fn "));
            assert!(info.snippet("python").unwrap().source.starts_with("def "));
        }
        assert!(info(AlgorithmId::Merge).stable);
        assert_eq!(info(AlgorithmId::Heap).how_it_works.len(), 5);
        assert_eq!(info(AlgorithmId::Quick).time_complexity.worst, "O(n²)");
        assert!(info(AlgorithmId::Bubble).snippet("cobol").is_none());
    }
}
