//! Selection sort: O(n²) comparisons, at most n - 1 swaps.

use std::cmp::Ordering;

/// Sort `arr` ascending by repeatedly selecting the minimum. Not stable.
pub fn selection_sort(arr: &mut [i32]) {
    selection_sort_by(arr, |a, b| a.cmp(&b));
}

/// Selection sort driven by `compare`.
///
/// ```
/// let mut xs = vec![2, 9, -1];
/// sortlab_core::selection_sort_by(&mut xs, |a, b| b.cmp(&a));
/// assert_eq!(xs, vec![9, 2, -1]);
/// ```
pub fn selection_sort_by<F>(arr: &mut [i32], mut compare: F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    let len = arr.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            // strict comparison keeps the first occurrence of the minimum
            if compare(arr[j], arr[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_values() {
        let mut xs = vec![64, 25, 12, 22, 11, -1, 25];
        selection_sort(&mut xs);
        assert_eq!(xs, vec![-1, 11, 12, 22, 25, 25, 64]);
    }

    #[test]
    fn is_not_stable() {
        // key in the tens digit, tag in the ones digit
        let mut xs = vec![21, 22, 10];
        selection_sort_by(&mut xs, |a, b| (a / 10).cmp(&(b / 10)));
        assert_eq!(xs, vec![10, 22, 21]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<i32> = vec![];
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![5];
        selection_sort(&mut one);
        assert_eq!(one, vec![5]);
    }
}
