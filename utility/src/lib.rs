mod heap_sort;

pub use heap_sort::{adjust_heap, build_max_heap, is_max_heap, left_of, parent_of, right_of};
