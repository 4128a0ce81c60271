use core::mem;

/// Recursive quicksort using Lomuto partitioning with the last item as the
/// pivot.
///
/// Not stable. Last-item pivot selection degrades to O(n²) on already
/// sorted input; that is a property of the scheme, kept as is.
pub fn quicksort<T: Ord>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let (l, r) = partition(slice);
    quicksort(l);
    quicksort(r);
}

/// Partition the slice around the value of its last item in-place using
/// Lomuto's scheme.
///
/// Returns the subranges on either side of the pivot's final position:
/// first the items `<=` pivot, then the items `>` pivot. The pivot itself
/// is excluded from both and already sits in its sorted position.
///
/// # Panics
///
/// * if `slice` is empty
fn partition<T: Ord>(slice: &mut [T]) -> (&mut [T], &mut [T]) {
    let (pivot, rest) = slice.split_last_mut().unwrap();

    // boundary of the items known to be <= pivot
    let mut smaller = 0;
    for i in 0..rest.len() {
        if rest[i] <= *pivot {
            if i != smaller {
                rest.swap(smaller, i);
            }
            smaller += 1;
        }
    }

    if smaller != rest.len() {
        mem::swap(pivot, &mut rest[smaller]);
    } else {
        // pivot was the largest item, it's already at the correct location
    }

    let (a, b) = slice.split_at_mut(smaller);
    // exclude the pivot from the returned slices
    (a, &mut b[1..])
}
