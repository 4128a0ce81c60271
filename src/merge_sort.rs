/// Recursive top-down merge sort.
///
/// Splits the slice at its midpoint, sorts each half, then merges them.
/// Stable: ties during the merge always take from the left half.
pub fn merge_sort<T: Ord + Copy>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    let mid = slice.len() / 2;
    merge_sort(&mut slice[..mid]);
    merge_sort(&mut slice[mid..]);
    merge(slice, mid);
}

/// Merge the two sorted halves `slice[..mid]` and `slice[mid..]` back into
/// `slice`.
///
/// Each half is copied into its own exactly-sized buffer first; the buffers
/// are dropped when the merge step finishes.
fn merge<T: Ord + Copy>(slice: &mut [T], mid: usize) {
    let left = slice[..mid].to_vec();
    let right = slice[mid..].to_vec();
    debug_assert_eq!(left.len() + right.len(), slice.len());

    let mut l = 0;
    let mut r = 0;
    for it in slice.iter_mut() {
        // left wins ties, which keeps the sort stable
        if l < left.len() && (r >= right.len() || left[l] <= right[r]) {
            *it = left[l];
            l += 1;
        } else {
            *it = right[r];
            r += 1;
        }
    }
}
