use num::PrimInt;

#[inline(always)]
pub fn parent_of(position: usize) -> usize {
    debug_assert!(position != 0);
    return (position - 1) / 2;
}

#[inline(always)]
pub fn left_of(position: usize) -> usize {
    return 2 * position + 1;
}

#[inline(always)]
pub fn right_of(position: usize) -> usize {
    2 * position + 2
}

/// Sifts `array[begin]` down so that `array[begin..=end]`, seen as a binary tree rooted at
/// `begin`, becomes a max-heap. Both subtrees of `begin` must already be max-heaps.
///
/// The root value is held aside while larger children move up into the hole, and is written
/// once at its final position. On equal children the left one is followed.
pub fn adjust_heap<ValueT>(array: &mut [ValueT], begin: usize, end: usize)
where
    ValueT: PrimInt,
{
    debug_assert!(begin <= end);
    debug_assert!(end < array.len());
    let value = array[begin];
    let mut hole = begin;
    let mut child = left_of(hole);
    while child <= end {
        if child + 1 <= end && array[child] < array[child + 1] {
            child += 1;
        }
        if value >= array[child] {
            break;
        }
        array[hole] = array[child];
        hole = child;
        child = left_of(child);
    }
    array[hole] = value;
}

/// Turns the whole slice into a max-heap, starting from the last non-leaf position.
pub fn build_max_heap<ValueT>(array: &mut [ValueT])
where
    ValueT: PrimInt,
{
    let len = array.len();
    for position in (0..len / 2).rev() {
        adjust_heap(array, position, len - 1);
    }
}

pub fn is_max_heap<ValueT>(array: &[ValueT]) -> bool
where
    ValueT: PrimInt,
{
    return (1..array.len()).all(|position| array[parent_of(position)] >= array[position]);
}
