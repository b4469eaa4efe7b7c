//! Checks that a sort produced an ordered permutation of its input.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("output has {actual} elements, input had {expected}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("out of order at index {index}: {prev} > {next}")]
    OutOfOrder { index: usize, prev: i32, next: i32 },
    #[error("output is not a permutation of the input")]
    NotAPermutation,
}

/// True if `arr` is non-decreasing.
pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// True if `a` and `b` hold the same multiset of values.
pub fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<i32, isize> = HashMap::new();
    for &x in a {
        *counts.entry(x).or_insert(0) += 1;
    }
    for &x in b {
        *counts.entry(x).or_insert(0) -= 1;
    }
    counts.values().all(|&c| c == 0)
}

/// Verify that `sorted` is an ordered permutation of `original`.
pub fn check_sorted(original: &[i32], sorted: &[i32]) -> Result<(), Violation> {
    if original.len() != sorted.len() {
        return Err(Violation::LengthMismatch {
            expected: original.len(),
            actual: sorted.len(),
        });
    }
    if let Some(index) = sorted.windows(2).position(|w| w[0] > w[1]) {
        return Err(Violation::OutOfOrder {
            index,
            prev: sorted[index],
            next: sorted[index + 1],
        });
    }
    if !is_permutation(original, sorted) {
        return Err(Violation::NotAPermutation);
    }
    Ok(())
}
