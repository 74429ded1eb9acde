//! Ordering checks for integer sequences

/// Check that a sequence is in non-decreasing order
///
/// Binary search assumes this holds; it is not checked there.
pub fn is_sorted(sequence: &[i32]) -> bool {
    sequence.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[7]));
        assert!(is_sorted(&[1, 2, 3, 5, 9]));
        assert!(is_sorted(&[-3, -3, 0, 0, 4]));

        assert!(!is_sorted(&[5, 2, 9, 1, 3]));
        assert!(!is_sorted(&[1, 2, 1]));
    }
}
