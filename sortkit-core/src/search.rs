//! Binary search over sorted integer sequences
//!
//! Classic interval halving. When the target occurs more than once the
//! returned index is whichever copy the halving reaches first; it is not
//! necessarily the first or last occurrence.

use core::cmp::Ordering;

use crate::validation::validate_length;
use crate::Result;

/// Sentinel returned by [`binary_search`] when the target is absent
pub const NOT_FOUND: isize = -1;

/// Locate `target` in a non-decreasing sequence
///
/// Probes `mid = (left + right) / 2` over the inclusive window
/// `[left, right]`, starting from `[0, len - 1]`. Internally the right bound
/// is held one past the window so the arithmetic stays in `usize`; the
/// probe order is the same. An unsorted input yields an arbitrary result,
/// never a panic.
pub fn find(sequence: &[i32], target: i32) -> Option<usize> {
    let mut left = 0usize;
    let mut right = sequence.len(); // exclusive

    while left < right {
        // Floor of the inclusive midpoint (left + (right - 1)) / 2
        let mid = left + (right - 1 - left) / 2;

        match sequence[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }

    None
}

/// Locate `target`, returning its index or [`NOT_FOUND`]
pub fn binary_search(sequence: &[i32], target: i32) -> isize {
    match find(sequence, target) {
        Some(index) => index as isize,
        None => NOT_FOUND,
    }
}

/// Search the first `length` elements of `sequence`
///
/// The explicit-length form of [`binary_search`]. A `length` larger than
/// the slice is an error rather than an out-of-bounds read.
pub fn binary_search_prefix(sequence: &[i32], length: usize, target: i32) -> Result<isize> {
    let length = validate_length(length, sequence.len())?;
    Ok(binary_search(&sequence[..length], target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortkitError;

    #[test]
    fn test_binary_search_found() {
        let data = [1, 2, 3, 5, 9];
        assert_eq!(binary_search(&data, 3), 2);
        assert_eq!(binary_search(&data, 1), 0);
        assert_eq!(binary_search(&data, 9), 4);
        assert_eq!(binary_search(&data, 5), 3);
    }

    #[test]
    fn test_binary_search_absent() {
        let data = [1, 2, 3, 5, 9];
        assert_eq!(binary_search(&data, 4), NOT_FOUND);
        assert_eq!(binary_search(&data, 0), NOT_FOUND);
        assert_eq!(binary_search(&data, 10), NOT_FOUND);
        assert_eq!(binary_search(&data, i32::MIN), NOT_FOUND);
        assert_eq!(binary_search(&data, i32::MAX), NOT_FOUND);
    }

    #[test]
    fn test_binary_search_empty() {
        assert_eq!(binary_search(&[], 3), NOT_FOUND);
        assert_eq!(find(&[], 3), None);
    }

    #[test]
    fn test_duplicates_return_first_probe_hit() {
        // First probe is mid = 2, which already matches; a first-occurrence
        // search would return 0 instead.
        let data = [7, 7, 7, 7, 7];
        assert_eq!(binary_search(&data, 7), 2);

        // [0, 5] -> mid 2 (value 1 < 2) -> [3, 5] -> mid 4 (hit)
        let data = [1, 1, 1, 2, 2, 2];
        assert_eq!(binary_search(&data, 2), 4);
    }

    #[test]
    fn test_probe_order_matches_floor_midpoint() {
        // Even length: first probe is (0 + 3) / 2 = 1
        let data = [10, 20, 30, 40];
        assert_eq!(find(&data, 20), Some(1));
        assert_eq!(find(&data, 40), Some(3));
        assert_eq!(find(&data, 10), Some(0));
    }

    #[test]
    fn test_unsorted_input_does_not_panic() {
        let data = [5, 2, 9, 1, 3];
        let index = binary_search(&data, 3);
        assert!(index == NOT_FOUND || data[index as usize] == 3);
    }

    #[test]
    fn test_binary_search_prefix() {
        let data = [1, 2, 3, 5, 9];
        assert_eq!(binary_search_prefix(&data, 3, 3), Ok(2));
        assert_eq!(binary_search_prefix(&data, 2, 3), Ok(NOT_FOUND));
        assert_eq!(binary_search_prefix(&data, 0, 1), Ok(NOT_FOUND));
        assert_eq!(
            binary_search_prefix(&data, 6, 3),
            Err(SortkitError::IndexOutOfBounds)
        );
    }
}
