//! Insertion sort: stable, in place, O(n²) worst case and O(n) on sorted input.

use std::cmp::Ordering;

/// Sort `arr` ascending by shifting larger elements right.
pub fn insertion_sort(arr: &mut [i32]) {
    insertion_sort_by(arr, |a, b| a.cmp(&b));
}

/// Insertion sort driven by `compare`.
///
/// An element only moves past a predecessor that compares `Greater`, so
/// equal elements keep their input order.
pub fn insertion_sort_by<F>(arr: &mut [i32], mut compare: F)
where
    F: FnMut(i32, i32) -> Ordering,
{
    for i in 1..arr.len() {
        let val = arr[i];
        let mut j = i;
        while j > 0 && compare(arr[j - 1], val) == Ordering::Greater {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_mixed_values() {
        let mut xs = vec![7, 31, 54, 0, 2, 4, 5, 1, 2, 10, 8];
        insertion_sort(&mut xs);
        assert_eq!(xs, vec![0, 1, 2, 2, 4, 5, 7, 8, 10, 31, 54]);
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: Vec<i32> = vec![];
        insertion_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        insertion_sort(&mut one);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn reverse_input() {
        let mut xs: Vec<i32> = (0..50).rev().collect();
        insertion_sort(&mut xs);
        assert_eq!(xs, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn sort_by_descending() {
        let mut xs = vec![1, 3, 2];
        insertion_sort_by(&mut xs, |a, b| b.cmp(&a));
        assert_eq!(xs, vec![3, 2, 1]);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        // key in the tens digit, tag in the ones digit
        let mut xs = vec![31, 32, 10, 20, 33];
        insertion_sort_by(&mut xs, |a, b| (a / 10).cmp(&(b / 10)));
        assert_eq!(xs, vec![10, 20, 31, 32, 33]);
    }
}
