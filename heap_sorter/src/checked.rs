use num::PrimInt;
use tracing::debug;

use super::{HeapSorter, SortError, Sorter};

/// Sorts `array` in place, rejecting an absent sequence instead of treating it as empty.
pub fn sort_checked<ValueT>(array: Option<&mut [ValueT]>) -> Result<&mut [ValueT], SortError>
where
    ValueT: PrimInt,
{
    match array {
        Some(array) => Ok(HeapSorter.sort(array)),
        None => {
            debug!("rejected absent sequence");
            Err(SortError::MissingSequence)
        }
    }
}

/// Range-checked [`utility::adjust_heap`]. `begin..=end` must lie inside `array`.
pub fn try_adjust_heap<ValueT>(
    array: &mut [ValueT],
    begin: usize,
    end: usize,
) -> Result<(), SortError>
where
    ValueT: PrimInt,
{
    let len = array.len();
    if begin > end || end >= len {
        debug!(begin, end, len, "rejected heap range");
        return Err(SortError::RangeOutOfBounds { begin, end, len });
    }
    utility::adjust_heap(array, begin, end);
    return Ok(());
}

#[cfg(test)]
mod test {

    use super::{SortError, sort_checked, try_adjust_heap};

    #[test]
    fn test_sort_checked() {
        assert_eq!(sort_checked::<i32>(None), Err(SortError::MissingSequence));

        let mut empty: Vec<i32> = vec![];
        assert_eq!(sort_checked(Some(empty.as_mut_slice())).map(|a| a.len()), Ok(0));

        let mut array = vec![-1, -5, 3, 0];
        let sorted = sort_checked(Some(array.as_mut_slice())).map(|a| a.to_vec());
        assert_eq!(sorted, Ok(vec![-5, -1, 0, 3]));
        assert_eq!(array, [-5, -1, 0, 3]);
    }

    #[test]
    fn test_try_adjust_heap() {
        let mut array = [1, 4, 5, 9];
        assert_eq!(try_adjust_heap(&mut array, 0, 2), Ok(()));
        assert_eq!(array, [5, 4, 1, 9]);

        assert_eq!(
            try_adjust_heap(&mut array, 0, 4),
            Err(SortError::RangeOutOfBounds {
                begin: 0,
                end: 4,
                len: 4
            })
        );
        assert_eq!(
            try_adjust_heap(&mut array, 3, 2),
            Err(SortError::RangeOutOfBounds {
                begin: 3,
                end: 2,
                len: 4
            })
        );
        assert_eq!(array, [5, 4, 1, 9]);

        let mut empty: [u8; 0] = [];
        assert!(try_adjust_heap(&mut empty, 0, 0).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SortError::MissingSequence.to_string(),
            "missing sequence to sort"
        );
        assert_eq!(
            SortError::RangeOutOfBounds {
                begin: 3,
                end: 2,
                len: 4
            }
            .to_string(),
            "heap range [3, 2] is invalid for a sequence of length 4"
        );
    }
}
