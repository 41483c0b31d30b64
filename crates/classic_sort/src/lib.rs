//! Classical comparison sorts over generic random-access sequences.
//!
//! Ranges are given as a [`Sequence`] plus a half-open pair of [`Cursor`]s.
//! Wrapping the cursors in a [`SkipCursor`] runs any of the algorithms over a
//! strided view of the same storage; Shell sort is built that way on top of
//! insertion sort.

mod algorithms;
mod cursor;
mod skip_cursor;

pub use algorithms::bogosort::{bogosort, bogosort_by, shuffle};
pub use algorithms::common::{is_sorted, is_sorted_by};
pub use algorithms::gaps::sedgewick_gaps;
pub use algorithms::insertion_sort::{insertion_sort, insertion_sort_by};
pub use algorithms::merge_sort::{merge_sort, merge_sort_by};
pub use algorithms::merge_sort_array::merge_sort_array;
pub use algorithms::shell_sort::{shell_sort, shell_sort_by};
pub use cursor::{Cursor, Sequence, range_len};
pub use skip_cursor::SkipCursor;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    ShellSortSedgewick,
    MergeSort,
    MergeSortArray,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 4] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::ShellSortSedgewick,
    SortAlgorithm::MergeSort,
    SortAlgorithm::MergeSortArray,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::ShellSortSedgewick => "shell_sort_sedgewick",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::MergeSortArray => "merge_sort_array",
    }
}

/// Whether equal elements keep their relative order.
///
/// `MergeSortArray` takes the right element on ties, so it is reported as
/// unstable even though the difference cannot be seen in an `i32` array.
pub fn is_stable(algo: SortAlgorithm) -> bool {
    !matches!(
        algo,
        SortAlgorithm::ShellSortSedgewick | SortAlgorithm::MergeSortArray
    )
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Merge sort hands runs of at most this many elements to insertion sort.
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 5,
};

pub fn sort_i32(algo: SortAlgorithm, data: &mut [i32]) {
    let len = data.len();
    match algo {
        SortAlgorithm::InsertionSort => insertion_sort(data, 0, len),
        SortAlgorithm::ShellSortSedgewick => shell_sort(data, 0, len),
        SortAlgorithm::MergeSort => merge_sort(data, 0, len),
        SortAlgorithm::MergeSortArray => merge_sort_array(data),
    }
}
