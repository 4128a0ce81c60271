#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bubble_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quicksort;

/// Sort a slice that may be absent.
///
/// All sorts in this crate share the same contract: they take a mutable
/// slice and reorder it in place. Callers holding an optional slice go
/// through here instead: an absent slice counts as already sorted and the
/// call is a no-op.
///
/// ```
/// use sorts::{quicksort::quicksort, sort_in_place};
///
/// let mut arr = vec![3, 1, 2];
/// sort_in_place(Some(arr.as_mut_slice()), quicksort);
/// assert_eq!(arr, [1, 2, 3]);
///
/// sort_in_place(None::<&mut [i32]>, quicksort);
/// ```
pub fn sort_in_place<T, F>(slice: Option<&mut [T]>, sort: F)
where
    T: Ord,
    F: FnOnce(&mut [T]),
{
    if let Some(slice) = slice {
        sort(slice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_slice_is_a_noop() {
        sort_in_place(None::<&mut [i32]>, bubble_sort::bubble_sort);
        sort_in_place(None::<&mut [i32]>, bubble_sort::bubble_sort2);
        sort_in_place(None::<&mut [i32]>, insertion_sort::insertion_sort);
        sort_in_place(None::<&mut [i32]>, insertion_sort::insertion_sort2);
        sort_in_place(None::<&mut [i32]>, merge_sort::merge_sort);
        sort_in_place(None::<&mut [i32]>, quicksort::quicksort);
        sort_in_place(None::<&mut [i32]>, heap_sort::heap_sort);
    }

    #[test]
    fn present_slice_is_sorted() {
        let mut arr = vec![5, 4, 3, 2, 1];
        sort_in_place(Some(arr.as_mut_slice()), merge_sort::merge_sort);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }
}
