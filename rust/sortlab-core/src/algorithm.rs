//! Registry of the sorting algorithms, used for dispatch by name.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{heap, insertion, merge, quick, selection};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    Insertion,
    Quick,
    Merge,
    Heap,
    Selection,
}

impl Algorithm {
    /// Sort `arr` ascending with this algorithm.
    pub fn sort(self, arr: &mut [i32]) {
        tracing::trace!(algorithm = %self, len = arr.len(), "sort");
        match self {
            Algorithm::Insertion => insertion::insertion_sort(arr),
            Algorithm::Quick => quick::quick_sort(arr),
            Algorithm::Merge => merge::merge_sort(arr),
            Algorithm::Heap => heap::heap_sort(arr),
            Algorithm::Selection => selection::selection_sort(arr),
        }
    }

    /// Sort `arr` with this algorithm, ordering elements by `compare`.
    pub fn sort_by<F>(self, arr: &mut [i32], compare: F)
    where
        F: FnMut(i32, i32) -> Ordering,
    {
        match self {
            Algorithm::Insertion => insertion::insertion_sort_by(arr, compare),
            Algorithm::Quick => quick::quick_sort_by(arr, compare),
            Algorithm::Merge => merge::merge_sort_by(arr, compare),
            Algorithm::Heap => heap::heap_sort_by(arr, compare),
            Algorithm::Selection => selection::selection_sort_by(arr, compare),
        }
    }

    /// Whether equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Merge)
    }

    /// Whether the average case is O(n²).
    pub fn is_quadratic(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Selection)
    }

    /// Average and worst case time complexity.
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Insertion => "O(n^2) average, O(n^2) worst, O(n) best",
            Algorithm::Quick => "O(n log n) average, O(n^2) worst",
            Algorithm::Merge => "O(n log n) average, O(n log n) worst",
            Algorithm::Heap => "O(n log n) average, O(n log n) worst",
            Algorithm::Selection => "O(n^2) average, O(n^2) worst",
        }
    }

    /// Display name used in reports, e.g. `Quick Sort`.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Heap => "Heap Sort",
            Algorithm::Selection => "Selection Sort",
        }
    }
}
