//! Offset manipulation kernels.
//!
//! These are pure scans over an `offsets` array: walk a flat buffer once,
//! touch no heap besides the output, the same shape as a single-pass
//! normalization helper over `i64` positions instead of `f32` magnitudes.

use crate::error::{Error, Result};

/// Validate that `offsets` is non-decreasing and every entry fits within
/// `content_length`.
pub fn validate_offsets(offsets: &[i64], content_length: i64) -> Result<()> {
    if offsets.is_empty() {
        return Ok(());
    }
    for i in 0..offsets.len() - 1 {
        if offsets[i] > offsets[i + 1] {
            return Err(Error::NonMonotonicOffsets {
                index: i as i64,
                value: offsets[i],
                next: offsets[i + 1],
            });
        }
    }
    let last = *offsets.last().unwrap();
    if last > content_length {
        return Err(Error::OffsetsExceedContent {
            index: (offsets.len() - 1) as i64,
            value: last,
            content_length,
        });
    }
    Ok(())
}

/// `compact_offsets`: rebase `offsets` so `out[0] == 0`.
///
/// Idempotent: `compact_offsets(compact_offsets(x)) == compact_offsets(x)`,
/// since a second call subtracts zero.
pub fn compact_offsets(offsets: &[i64]) -> Vec<i64> {
    let base = offsets.first().copied().unwrap_or(0);
    offsets.iter().map(|&o| o - base).collect()
}

/// `global_startstop`: the `(offsets[0], offsets[N])` pair bounding every
/// sublist's content.
pub fn global_startstop(offsets: &[i64]) -> (i64, i64) {
    let start = offsets.first().copied().unwrap_or(0);
    let stop = offsets.last().copied().unwrap_or(0);
    (start, stop)
}

/// `toRegularArray` size check: verifies every sublist has the same length
/// and returns it, or the index of the first sublist that disagrees.
pub fn to_regular_array_size_check(offsets: &[i64]) -> Result<i64> {
    if offsets.len() < 2 {
        return Ok(0);
    }
    let expected = offsets[1] - offsets[0];
    for i in 1..offsets.len() - 1 {
        let len = offsets[i + 1] - offsets[i];
        if len != expected {
            return Err(Error::RaggedRegularArray {
                expected,
                found: len,
                index: i as i64,
            });
        }
    }
    Ok(expected)
}

/// Per-sublist lengths, `offsets[i+1] - offsets[i]`.
pub fn sublist_lengths(offsets: &[i64]) -> Vec<i64> {
    if offsets.is_empty() {
        return Vec::new();
    }
    offsets.windows(2).map(|w| w[1] - w[0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn compact_offsets_idempotent_literal() {
        let offsets = vec![5, 8, 8, 10, 11];
        let once = compact_offsets(&offsets);
        let twice = compact_offsets(&once);
        assert_eq!(once, twice);
        assert_eq!(once, vec![0, 3, 3, 5, 6]);
    }

    #[test]
    fn global_startstop_literal() {
        assert_eq!(global_startstop(&[0, 3, 3, 5, 6]), (0, 6));
        assert_eq!(global_startstop(&[2, 2, 5]), (2, 5));
    }

    #[test]
    fn to_regular_array_size_check_rejects_ragged() {
        assert_eq!(to_regular_array_size_check(&[0, 2, 4, 6]), Ok(2));
        assert!(to_regular_array_size_check(&[0, 2, 5, 6]).is_err());
    }

    #[test]
    fn validate_offsets_rejects_non_monotonic() {
        assert!(validate_offsets(&[0, 3, 2, 5], 10).is_err());
        assert!(validate_offsets(&[0, 3, 5], 4).is_err());
        assert!(validate_offsets(&[0, 3, 5], 5).is_ok());
    }

    proptest! {
        #[test]
        fn compact_offsets_is_idempotent(offsets in proptest::collection::vec(0i64..1000, 1..50)
            .prop_map(|mut v| { v.sort(); v })) {
            let once = compact_offsets(&offsets);
            let twice = compact_offsets(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn compact_offsets_starts_at_zero(offsets in proptest::collection::vec(0i64..1000, 1..50)
            .prop_map(|mut v| { v.sort(); v })) {
            let out = compact_offsets(&offsets);
            prop_assert_eq!(out[0], 0);
        }
    }
}
