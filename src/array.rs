//! In-place array processing: shuffling, sorting, searching and grid indexing.
//!
//! Mutating functions take `&mut [T]` and hand the same slice back, so callers
//! can either keep using their own binding or chain on the return value:
//!
//! ```
//! use u_gamemath::array::{linear_search, sort_ascending};
//! let mut scores = vec![30.0, 10.0, 20.0];
//! let first = sort_ascending(&mut scores)[0];
//! assert_eq!(first, 10.0);
//! assert_eq!(linear_search(&20.0, &scores), Some(1));
//! ```
//!
//! # Algorithms
//!
//! - **Shuffle**: Durstenfeld's in-place Fisher-Yates.
//!   Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
//! - **Sort**: the standard library's O(n log n) comparison sort, ordered by
//!   IEEE-754 `totalOrder`, so NaN has a defined place (after +∞).
//! - **Companion sort**: stable argsort of the primary keys, decomposed into
//!   transpositions that are replayed on every companion slice.

use rand::Rng;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error type for array operations with cross-slice preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// A companion slice is not the same length as the primary slice.
    #[error("companion {companion} has length {actual}, expected {expected} to match the primary")]
    CompanionLengthMismatch {
        /// Position of the offending companion in the companion list.
        companion: usize,
        /// Length of the primary slice.
        expected: usize,
        /// Length of the offending companion.
        actual: usize,
    },
}

/// Row-major coordinate of a cell in a flat grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridIndex {
    /// Row number, `index / row_length`.
    pub row: usize,
    /// Column within the row, `index % row_length`.
    pub col: usize,
}

// ============================================================================
// Shuffle
// ============================================================================

/// Shuffles `slice` in place using the thread-local generator.
///
/// See [`shuffle_with`] for the algorithm and a reproducible variant.
pub fn shuffle<T>(slice: &mut [T]) -> &mut [T] {
    shuffle_with(slice, &mut rand::rng())
}

/// Fisher-Yates (Durstenfeld) in-place shuffle driven by `rng`.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely. Iterates backwards, swapping each element with a
/// uniformly chosen earlier (or same) position.
///
/// Calling it twice reshuffles; only the distribution is fixed.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_gamemath::array::shuffle_with;
/// use u_gamemath::random::create_rng;
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle_with(&mut v, &mut rng).sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<'a, T, R: Rng>(slice: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    let n = slice.len();
    tracing::trace!(len = n, "shuffling slice");
    if n <= 1 {
        return slice;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
    slice
}

// ============================================================================
// Sorting
// ============================================================================

/// Sorts `values` ascending in place.
///
/// Uses `f64::total_cmp`, so the order is total even with NaN or signed
/// zeros in the input (`-0.0` sorts before `0.0`). Equal values may be
/// reordered; plain numbers carry no identity to preserve.
///
/// # Complexity
/// Time: O(n log n)
///
/// # Examples
/// ```
/// use u_gamemath::array::sort_ascending;
/// let mut v = [3.0, 1.0, 2.0];
/// assert_eq!(sort_ascending(&mut v), &[1.0, 2.0, 3.0]);
/// ```
pub fn sort_ascending(values: &mut [f64]) -> &mut [f64] {
    tracing::trace!(len = values.len(), "sorting slice");
    values.sort_unstable_by(f64::total_cmp);
    values
}

/// Sorts `primary` ascending and reorders every companion in lockstep.
///
/// Whenever two primary elements are transposed, the elements at the same
/// two indices of each companion are transposed too, so index-wise pairing
/// survives the sort. Equal primary keys keep their relative order.
///
/// All companions passed in one call share a single element type `T`.
/// Companions of different types can be reordered by sorting once per type
/// with a copy of the original keys, since the stable order is the same each
/// time, or by wrapping the elements in a common enum.
///
/// # Errors
/// Returns [`ArrayError::CompanionLengthMismatch`] if any companion differs
/// in length from `primary`. Nothing is reordered in that case.
///
/// # Complexity
/// Time: O(n log n + n·k) for k companions, Space: O(n)
///
/// # Examples
/// ```
/// use u_gamemath::array::sort_with_companions;
/// let mut keys = [3.0, 1.0, 2.0];
/// let mut names = ["c", "a", "b"];
/// let mut ids = [30, 10, 20];
/// // A second companion type gets its own call on the original keys.
/// sort_with_companions(&mut keys, &mut [&mut names[..]]).unwrap();
/// assert_eq!(keys, [1.0, 2.0, 3.0]);
/// assert_eq!(names, ["a", "b", "c"]);
///
/// let mut keys = [3.0, 1.0, 2.0];
/// sort_with_companions(&mut keys, &mut [&mut ids[..]]).unwrap();
/// assert_eq!(ids, [10, 20, 30]);
/// ```
#[allow(clippy::type_complexity)]
pub fn sort_with_companions<'p, 'c, 's, T>(
    primary: &'p mut [f64],
    companions: &'c mut [&'s mut [T]],
) -> Result<(&'p mut [f64], &'c mut [&'s mut [T]]), ArrayError> {
    let n = primary.len();
    if let Some((companion, actual)) = companions
        .iter()
        .map(|c| c.len())
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        tracing::debug!(
            companion,
            expected = n,
            actual,
            "rejecting companion sort with mismatched lengths"
        );
        return Err(ArrayError::CompanionLengthMismatch {
            companion,
            expected: n,
            actual,
        });
    }
    tracing::trace!(len = n, companions = companions.len(), "sorting with companions");

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| primary[a].total_cmp(&primary[b]));

    let swaps = transpositions(&order);
    for &(a, b) in &swaps {
        primary.swap(a, b);
        for companion in companions.iter_mut() {
            companion.swap(a, b);
        }
    }
    Ok((primary, companions))
}

/// Decomposes a gather permutation into swaps.
///
/// `order[i]` names the source index whose element must end up at `i`.
/// Replaying the returned swaps in sequence on any slice of length
/// `order.len()` yields `result[i] = original[order[i]]`.
fn transpositions(order: &[usize]) -> Vec<(usize, usize)> {
    let mut placed = vec![false; order.len()];
    let mut swaps = Vec::with_capacity(order.len());
    for start in 0..order.len() {
        if placed[start] {
            continue;
        }
        placed[start] = true;
        let mut current = start;
        loop {
            let next = order[current];
            if next == start {
                break;
            }
            swaps.push((current, next));
            placed[next] = true;
            current = next;
        }
    }
    swaps
}

// ============================================================================
// Searching and indexing
// ============================================================================

/// Returns the index of the first element equal to `value`, scanning from 0.
///
/// No ordering is assumed. `None` means the value does not occur.
///
/// # Complexity
/// Time: O(n)
///
/// # Examples
/// ```
/// use u_gamemath::array::linear_search;
/// assert_eq!(linear_search(&2, &[5, 2, 9]), Some(1));
/// assert_eq!(linear_search(&7, &[5, 2, 9]), None);
/// ```
pub fn linear_search<T: PartialEq>(value: &T, items: &[T]) -> Option<usize> {
    items.iter().position(|item| item == value)
}

/// Converts a flat row-major index into a grid coordinate.
///
/// # Returns
/// - `None` if `row_length` is zero.
///
/// # Examples
/// ```
/// use u_gamemath::array::{index_to_2d, GridIndex};
/// assert_eq!(index_to_2d(7, 3), Some(GridIndex { row: 2, col: 1 }));
/// ```
#[must_use]
pub const fn index_to_2d(index: usize, row_length: usize) -> Option<GridIndex> {
    if row_length == 0 {
        return None;
    }
    Some(GridIndex {
        row: index / row_length,
        col: index % row_length,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut v = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut rng = create_rng(123);
        shuffle_with(&mut v, &mut rng);
        v.sort_unstable();
        assert_eq!(v, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_shuffle_empty() {
        let mut v: Vec<i32> = vec![];
        assert!(shuffle(&mut v).is_empty());
    }

    #[test]
    fn test_shuffle_single() {
        let mut v = vec![42];
        let mut rng = create_rng(0);
        assert_eq!(shuffle_with(&mut v, &mut rng), &[42]);
    }

    #[test]
    fn test_shuffle_actually_shuffles() {
        // With 10 elements, probability of identity permutation is 1/10! ≈ 2.8e-7
        let original = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut v = original.clone();
        let mut rng = create_rng(42);
        shuffle_with(&mut v, &mut rng);
        assert_ne!(v, original, "shuffle should change order (probabilistic)");
    }

    #[test]
    fn test_shuffle_returns_same_slice() {
        let mut v = [1.0, 2.0, 3.0];
        let ptr = v.as_ptr();
        let returned = shuffle(&mut v);
        assert_eq!(returned.as_ptr(), ptr);
    }

    #[test]
    fn test_shuffle_position_distribution() {
        let n_trials = 40_000_u32;
        let mut counts = [[0u32; 4]; 4];
        let mut rng = create_rng(2024);
        for _ in 0..n_trials {
            let mut v = [0_usize, 1, 2, 3];
            shuffle_with(&mut v, &mut rng);
            for (pos, &elem) in v.iter().enumerate() {
                counts[pos][elem] += 1;
            }
        }
        let expected = f64::from(n_trials) / 4.0;
        for (pos, row) in counts.iter().enumerate() {
            for (elem, &c) in row.iter().enumerate() {
                let dev = (f64::from(c) - expected).abs() / expected;
                assert!(
                    dev < 0.06,
                    "element {elem} at position {pos}: count {c}, expected ~{expected}"
                );
            }
        }
    }

    #[test]
    fn test_sort_ascending() {
        let mut v = [3.0, 1.0, 2.0];
        sort_ascending(&mut v);
        assert_eq!(v, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_ascending_with_ties_and_negatives() {
        let mut v = [0.5, -2.0, 0.5, 7.0, -2.0];
        assert_eq!(sort_ascending(&mut v), &[-2.0, -2.0, 0.5, 0.5, 7.0]);
    }

    #[test]
    fn test_sort_ascending_places_nan_last() {
        let mut v = [f64::NAN, 1.0, f64::INFINITY, -1.0];
        sort_ascending(&mut v);
        assert_eq!(&v[..3], &[-1.0, 1.0, f64::INFINITY]);
        assert!(v[3].is_nan());
    }

    #[test]
    fn test_sort_with_companions_example() {
        let mut primary = [3.0, 1.0, 2.0];
        let mut names = ["c", "a", "b"];
        let mut companions = [&mut names[..]];
        let (sorted, companions) = sort_with_companions(&mut primary, &mut companions).unwrap();
        assert_eq!(sorted, &[1.0, 2.0, 3.0]);
        assert_eq!(companions[0], &["a", "b", "c"]);
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_sort_with_multiple_companions() {
        let mut primary = [4.0, 2.0, 3.0, 1.0];
        let mut xs = [40, 20, 30, 10];
        let mut ys = [400, 200, 300, 100];
        sort_with_companions(&mut primary, &mut [&mut xs[..], &mut ys[..]]).unwrap();
        assert_eq!(primary, [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(xs, [10, 20, 30, 40]);
        assert_eq!(ys, [100, 200, 300, 400]);
    }

    #[test]
    fn test_sort_with_companions_keeps_ties_stable() {
        let mut primary = [1.0, 0.0, 1.0, 0.0];
        let mut tags = ['a', 'b', 'c', 'd'];
        sort_with_companions(&mut primary, &mut [&mut tags[..]]).unwrap();
        assert_eq!(primary, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(tags, ['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_sort_with_no_companions() {
        let mut primary = [2.0, 1.0];
        let mut none: [&mut [u8]; 0] = [];
        sort_with_companions(&mut primary, &mut none).unwrap();
        assert_eq!(primary, [1.0, 2.0]);
    }

    #[test]
    fn test_mixed_companion_types_by_repeated_sort() {
        let keys = [3.0, 1.0, 2.0];
        let mut names = ["c", "a", "b"];
        let mut ids = [30_u32, 10, 20];

        let mut sorted_keys = keys;
        sort_with_companions(&mut sorted_keys, &mut [&mut names[..]]).unwrap();
        let mut again = keys;
        sort_with_companions(&mut again, &mut [&mut ids[..]]).unwrap();

        assert_eq!(sorted_keys, again);
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(ids, [10, 20, 30]);
    }

    #[test]
    fn test_sort_with_companions_rejects_mismatch() {
        let mut primary = [3.0, 1.0, 2.0];
        let mut good = [3, 1, 2];
        let mut short = [3, 1];
        let err = sort_with_companions(&mut primary, &mut [&mut good[..], &mut short[..]])
            .unwrap_err();
        assert_eq!(
            err,
            ArrayError::CompanionLengthMismatch {
                companion: 1,
                expected: 3,
                actual: 2,
            }
        );
        // Nothing moved.
        assert_eq!(primary, [3.0, 1.0, 2.0]);
        assert_eq!(good, [3, 1, 2]);
    }

    #[test]
    fn test_array_error_display() {
        let err = ArrayError::CompanionLengthMismatch {
            companion: 0,
            expected: 4,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "companion 0 has length 1, expected 4 to match the primary"
        );
    }

    #[test]
    fn test_transpositions_identity_is_empty() {
        assert!(transpositions(&[0, 1, 2, 3]).is_empty());
    }

    #[test]
    fn test_transpositions_cycle() {
        let mut v = ['x', 'y', 'z'];
        for (a, b) in transpositions(&[1, 2, 0]) {
            v.swap(a, b);
        }
        assert_eq!(v, ['y', 'z', 'x']);
    }

    #[test]
    fn test_linear_search() {
        assert_eq!(linear_search(&2.0, &[5.0, 2.0, 9.0]), Some(1));
        assert_eq!(linear_search(&7.0, &[5.0, 2.0, 9.0]), None);
        assert_eq!(linear_search(&1, &[]), None);
    }

    #[test]
    fn test_linear_search_returns_first_match() {
        assert_eq!(linear_search(&4, &[1, 4, 4, 4]), Some(1));
    }

    #[test]
    fn test_linear_search_never_finds_nan() {
        assert_eq!(linear_search(&f64::NAN, &[f64::NAN]), None);
    }

    #[test]
    fn test_index_to_2d() {
        assert_eq!(index_to_2d(7, 3), Some(GridIndex { row: 2, col: 1 }));
        assert_eq!(index_to_2d(0, 5), Some(GridIndex { row: 0, col: 0 }));
        assert_eq!(index_to_2d(4, 5), Some(GridIndex { row: 0, col: 4 }));
        assert_eq!(index_to_2d(5, 5), Some(GridIndex { row: 1, col: 0 }));
    }

    #[test]
    fn test_index_to_2d_zero_row_length() {
        assert_eq!(index_to_2d(3, 0), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_grid_index_serde_shape() {
        let json = serde_json::to_string(&GridIndex { row: 2, col: 1 }).unwrap();
        assert_eq!(json, r#"{"row":2,"col":1}"#);
    }
}
