/// Repeatedly scans adjacent pairs and swaps any pair out of order.
///
/// The scan boundary shrinks every pass since the largest remaining item
/// bubbles to the end, and a pass without swaps ends the sort early.
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    for pass in 0..slice.len() - 1 {
        let mut swapped = false;
        for i in 0..slice.len() - 1 - pass {
            if slice[i] > slice[i + 1] {
                slice.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Variant that tracks where the last swap happened and reslices the
/// working range down to it. Everything past the last swap of a pass is
/// already in final position, which can skip more than one item per pass.
pub fn bubble_sort2<T: Ord>(mut slice: &mut [T]) {
    while slice.len() > 1 {
        let mut last_swap = 0;
        for i in 0..slice.len() - 1 {
            if slice[i] > slice[i + 1] {
                slice.swap(i, i + 1);
                last_swap = i + 1;
            }
        }
        slice = &mut slice[..last_swap];
    }
}
