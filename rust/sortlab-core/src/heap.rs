//! Heap sort over an in-place binary max-heap.

use std::cmp::Ordering;

/// Sort `arr` ascending with an in-place binary max-heap. Not stable.
pub fn heap_sort(arr: &mut [i32]) {
    heap_sort_by(arr, |a, b| a.cmp(&b));
}

/// Heap sort driven by `compare`.
///
/// ```
/// let mut xs = vec![2, 9, -1];
/// sortlab_core::heap_sort_by(&mut xs, |a, b| b.cmp(&a));
/// assert_eq!(xs, vec![9, 2, -1]);
/// ```
pub fn heap_sort_by<F>(arr: &mut [i32], mut compare: F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    let len = arr.len();
    for i in (0..len / 2).rev() {
        heapify(arr, len, i, &mut compare);
    }
    for i in (1..len).rev() {
        arr.swap(0, i);
        heapify(arr, i, 0, &mut compare);
    }
}

/// Sift `arr[i]` down within the heap `arr[..n]`.
fn heapify<F>(arr: &mut [i32], n: usize, i: usize, compare: &mut F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    let mut largest = i;
    let l = 2 * i + 1;
    let r = 2 * i + 2;

    if l < n && compare(arr[l], arr[largest]) == Ordering::Greater {
        largest = l;
    }
    if r < n && compare(arr[r], arr[largest]) == Ordering::Greater {
        largest = r;
    }
    if largest != i {
        arr.swap(i, largest);
        heapify(arr, n, largest, compare);
    }
}
