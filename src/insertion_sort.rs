/// Grows a sorted prefix one item at a time by walking each new item left
/// with adjacent swaps until its predecessor is no larger.
///
/// Stable: only strictly greater predecessors are crossed, so equal items
/// keep their relative order.
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = i;
        while j > 0 && slice[j - 1] > slice[j] {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Shift-based variant: extracts the current item as the key, shifts all
/// strictly greater predecessors one slot right, then writes the key into
/// the vacated slot. One write per moved item instead of a swap.
///
/// Stable for the same reason as [`insertion_sort`].
pub fn insertion_sort2<T: Ord + Copy>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let key = slice[i];
        let mut j = i;
        while j > 0 && slice[j - 1] > key {
            slice[j] = slice[j - 1];
            j -= 1;
        }
        slice[j] = key;
    }
}
