use num::PrimInt;
use tracing::{instrument, trace};
use utility::{adjust_heap, build_max_heap, is_max_heap};

/// Sorts a sequence in place and hands the same sequence back.
pub trait Sorter<ValueT> {
    fn sort<'a>(&self, array: &'a mut [ValueT]) -> &'a mut [ValueT];
}

/// In-place heap sort. Not stable; O(n log n) regardless of the input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapSorter;

impl<ValueT> Sorter<ValueT> for HeapSorter
where
    ValueT: PrimInt,
{
    #[instrument(level = "trace", skip_all, fields(len = array.len()))]
    fn sort<'a>(&self, array: &'a mut [ValueT]) -> &'a mut [ValueT] {
        build_max_heap(array);
        debug_assert!(is_max_heap(array));
        trace!("max-heap built");

        // array[last..] holds the largest values in order
        for last in (1..array.len()).rev() {
            array.swap(0, last);
            adjust_heap(array, 0, last - 1);
        }
        debug_assert!(array.is_sorted());
        return array;
    }
}

#[inline(always)]
pub fn heap_sort<ValueT>(array: &mut [ValueT]) -> &mut [ValueT]
where
    ValueT: PrimInt,
{
    HeapSorter.sort(array)
}
