//! Quicksort over the Hoare partition scheme.
//!
//! The pivot is the value at the lower middle of the range, copied out before
//! any swap happens. After partitioning, the recursion covers `[start, split]`
//! and `[split + 1, end]`: the split point stays in the left half, which is
//! what Hoare's scheme requires (the `split - 1` form used with Lomuto
//! partitions would drop elements here).

use std::cmp::Ordering;

/// Sort `arr` ascending in place. Not stable.
pub fn quick_sort(arr: &mut [i32]) {
    quick_sort_by(arr, |a, b| a.cmp(&b));
}

/// Quicksort driven by `compare`.
pub fn quick_sort_by<F>(arr: &mut [i32], mut compare: F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    quick_sort_helper(arr, &mut compare);
}

fn quick_sort_helper<F>(arr: &mut [i32], compare: &mut F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let split = partition(arr, compare);
    let (left, right) = arr.split_at_mut(split + 1);
    quick_sort_helper(left, compare);
    quick_sort_helper(right, compare);
}

/// Partition `arr` around the value at index `(len - 1) / 2` and return the
/// split point.
///
/// On return every element of `arr[..=split]` compares no greater than the
/// pivot and every element of `arr[split + 1..]` no less. For `len >= 2` the
/// split is always below `len - 1`, so both halves shrink.
///
/// Both scans are bounded without explicit checks: the first pass stops at
/// the pivot itself, and after each swap the swapped elements stop the next
/// pass on either side.
pub fn partition<F>(arr: &mut [i32], compare: &mut F) -> usize
where
    F: FnMut(i32, i32) -> Ordering,
{
    debug_assert!(!arr.is_empty(), "partition of an empty slice");
    let pivot = arr[(arr.len() - 1) / 2];
    let mut left = 0;
    let mut right = arr.len() - 1;
    loop {
        while compare(arr[left], pivot) == Ordering::Less {
            left += 1;
        }
        while compare(arr[right], pivot) == Ordering::Greater {
            right -= 1;
        }
        if left >= right {
            return right;
        }
        swap(arr, left, right);
        left += 1;
        right -= 1;
    }
}

#[inline]
fn swap(arr: &mut [i32], left: usize, right: usize) {
    arr.swap(left, right);
}
