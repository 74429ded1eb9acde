//! In-place ascending sort of integer sequences
//!
//! Bubble sort with a fixed pass count: every call makes exactly
//! `len - 1` passes, each one carrying the largest value of the unsorted
//! prefix to its final slot. There is no early exit on an already sorted
//! input, so the comparison count depends only on the length.

use crate::validation::validate_length;
use crate::Result;

/// Counters collected by [`sort_with_stats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStats {
    /// Outer passes made over the sequence
    pub passes: usize,
    /// Adjacent comparisons made
    pub comparisons: usize,
    /// Adjacent swaps made (equals the number of inversions in the input)
    pub swaps: usize,
}

impl SortStats {
    /// Comparisons any sort of `len` elements makes: `len * (len - 1) / 2`
    pub const fn expected_comparisons(len: usize) -> usize {
        if len < 2 {
            0
        } else {
            len * (len - 1) / 2
        }
    }
}

/// Sort a sequence into non-decreasing order in place
///
/// Only strictly greater neighbours are swapped, so equal values keep
/// their relative positions.
pub fn sort(sequence: &mut [i32]) {
    bubble_passes(sequence, &mut |_: PassEvent| {});
}

/// Sort the first `length` elements of `sequence` in place
///
/// The explicit-length form of [`sort`]. Elements past `length` are left
/// untouched; a `length` larger than the slice is rejected before any
/// element is moved.
pub fn sort_prefix(sequence: &mut [i32], length: usize) -> Result<()> {
    let length = validate_length(length, sequence.len())?;
    sort(&mut sequence[..length]);
    Ok(())
}

/// Sort like [`sort`] and report what the passes did
pub fn sort_with_stats(sequence: &mut [i32]) -> SortStats {
    let mut stats = SortStats::default();
    bubble_passes(sequence, &mut |event: PassEvent| match event {
        PassEvent::PassStart => stats.passes += 1,
        PassEvent::Compare => stats.comparisons += 1,
        PassEvent::Swap => stats.swaps += 1,
    });
    stats
}

enum PassEvent {
    PassStart,
    Compare,
    Swap,
}

fn bubble_passes<F>(sequence: &mut [i32], observe: &mut F)
where
    F: FnMut(PassEvent),
{
    let len = sequence.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        observe(PassEvent::PassStart);

        // The last `pass` slots already hold their final values
        for j in 0..len - 1 - pass {
            observe(PassEvent::Compare);
            if sequence[j] > sequence[j + 1] {
                sequence.swap(j, j + 1);
                observe(PassEvent::Swap);
            }
        }
    }
}
