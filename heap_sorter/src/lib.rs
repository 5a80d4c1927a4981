mod checked;
mod error;
mod sorter;

pub use checked::{sort_checked, try_adjust_heap};
pub use error::SortError;
pub use sorter::{HeapSorter, Sorter, heap_sort};
