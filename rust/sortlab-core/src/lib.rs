//! Sortlab Core
//!
//! In-place sorting algorithms over `i32` slices, a seedable random-array
//! generator for benchmark inputs, and helpers for verifying sort output.
//!
//! ```
//! use sortlab_core::{merge_sort, quick_sort};
//!
//! let mut xs = vec![5, 1, -6, 1, 56];
//! quick_sort(&mut xs);
//! assert_eq!(xs, vec![-6, 1, 1, 5, 56]);
//!
//! let mut ys = vec![3, 2, 1];
//! merge_sort(&mut ys);
//! assert_eq!(ys, vec![1, 2, 3]);
//! ```

pub mod algorithm;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod random;
pub mod selection;
pub mod verify;

pub use algorithm::Algorithm;
pub use error::SortError;
pub use heap::{heap_sort, heap_sort_by};
pub use insertion::{insertion_sort, insertion_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by};
pub use random::{random_array, RandomArrayGenerator};
pub use selection::{selection_sort, selection_sort_by};
pub use verify::{check_sorted, is_permutation, is_sorted, Violation};
