// Binary heap laid out in the slice itself:
// left child of i is at 2*i + 1, right child at 2*i + 2.

/// Builds a max-heap in place, then repeatedly swaps the root (largest
/// item) with the last unsorted item and sifts the new root back down over
/// the shrunk heap.
///
/// Not stable.
pub fn heap_sort<T: Ord>(slice: &mut [T]) {
    if slice.len() < 2 {
        return;
    }

    // Sift down every parent node starting from the last one. The leaves
    // are one-item heaps already.
    for parent in (0..slice.len() / 2).rev() {
        sift_down(slice, parent);
    }

    for end in (1..slice.len()).rev() {
        // slice[..=end] is a max-heap, slice[end + 1..] is sorted
        slice.swap(0, end);
        sift_down(&mut slice[..end], 0);
    }
}

/// Moves the item at `root` down the heap until both its children are no
/// larger, restoring the max-heap property.
///
/// Assumes both subtrees of `root` are valid max-heaps.
fn sift_down<T: Ord>(heap: &mut [T], mut root: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= heap.len() {
            // no children left
            return;
        }

        let mut largest = root;
        if heap[left] > heap[largest] {
            largest = left;
        }
        let right = left + 1;
        if right < heap.len() && heap[right] > heap[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}
