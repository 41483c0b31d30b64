pub mod bogosort;
pub mod common;
pub mod gaps;
pub mod insertion_sort;
pub mod merge_sort;
pub mod merge_sort_array;
pub mod shell_sort;
