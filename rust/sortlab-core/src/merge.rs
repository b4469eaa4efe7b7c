//! Top-down merge sort with a single scratch buffer.
//!
//! One buffer of `arr.len()` elements is allocated per call and split
//! alongside the array at every level of recursion, so each sub-slice of
//! `arr` always has a scratch slice of the same length and offset.

use std::cmp::Ordering;

/// Sort `arr` ascending. Stable, O(n log n), O(n) extra space.
pub fn merge_sort(arr: &mut [i32]) {
    merge_sort_by(arr, |a, b| a.cmp(&b));
}

/// Merge sort driven by `compare`.
pub fn merge_sort_by<F>(arr: &mut [i32], mut compare: F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let mut temp = vec![0; arr.len()];
    merge_sort_helper(arr, &mut temp, &mut compare);
}

fn merge_sort_helper<F>(arr: &mut [i32], temp: &mut [i32], compare: &mut F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    if arr.len() <= 1 {
        return;
    }
    let middle = (arr.len() - 1) / 2;
    {
        let (left, right) = arr.split_at_mut(middle + 1);
        let (left_temp, right_temp) = temp.split_at_mut(middle + 1);
        merge_sort_helper(left, left_temp, compare);
        merge_sort_helper(right, right_temp, compare);
    }
    merge(arr, temp, middle, compare);
}

/// Merge the sorted runs `arr[..=middle]` and `arr[middle + 1..]`.
///
/// The runs are merged into `temp`, then copied back into `arr`. On a tie
/// the left element is taken first, which keeps the sort stable.
///
/// # Panics
///
/// Panics if `temp` and `arr` differ in length or `middle` is out of bounds.
pub fn merge<F>(arr: &mut [i32], temp: &mut [i32], middle: usize, compare: &mut F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    assert_eq!(arr.len(), temp.len(), "scratch buffer length mismatch");
    assert!(middle < arr.len(), "merge midpoint out of bounds");

    let end = arr.len();
    let mut left = 0;
    let mut right = middle + 1;
    let mut out = 0;

    while left <= middle && right < end {
        if compare(arr[left], arr[right]) != Ordering::Greater {
            temp[out] = arr[left];
            left += 1;
        } else {
            temp[out] = arr[right];
            right += 1;
        }
        out += 1;
    }

    // one run is exhausted; the other is already in order
    if left <= middle {
        temp[out..].copy_from_slice(&arr[left..=middle]);
    } else {
        temp[out..].copy_from_slice(&arr[right..]);
    }

    arr.copy_from_slice(temp);
}
