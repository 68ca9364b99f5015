//! Local reduction preparation.
//!
//! Used when the reduction's target axis sits strictly below the current
//! list level: each sublist reduces independently and the outer offsets
//! structure is preserved.

use crate::error::Result;
use crate::offsets::validate_offsets;

/// `local_nextparents`: every element of sublist `i` (spanning
/// `offsets[i]..offsets[i+1]`, compacted to start at zero) receives parent
/// `i`.
pub fn local_nextparents(offsets: &[i64]) -> Vec<i64> {
    if offsets.is_empty() {
        return Vec::new();
    }
    let base = offsets[0];
    let total = (offsets[offsets.len() - 1] - base) as usize;
    let mut nextparents = vec![0i64; total];
    for (i, w) in offsets.windows(2).enumerate() {
        let lo = (w[0] - base) as usize;
        let hi = (w[1] - base) as usize;
        nextparents[lo..hi].fill(i as i64);
    }
    nextparents
}

/// `local_outoffsets`: rebuild an offsets array from a non-decreasing
/// `parents` vector, one sublist boundary per distinct parent in
/// `[0, outlength)`.
pub fn local_outoffsets(parents: &[i64], outlength: i64) -> Result<Vec<i64>> {
    let mut counts = vec![0i64; outlength as usize];
    let mut prev = i64::MIN;
    for &p in parents {
        debug_assert!(p >= prev, "local_outoffsets requires non-decreasing parents");
        prev = p;
        counts[p as usize] += 1;
    }
    let mut outoffsets = vec![0i64; outlength as usize + 1];
    for i in 0..outlength as usize {
        outoffsets[i + 1] = outoffsets[i] + counts[i];
    }
    Ok(outoffsets)
}

/// Build the `starts` vector the local path passes down to the content's
/// `reduce_next` (used only by argmin/argmax to convert in-group relative
/// positions back to a global index).
pub fn make_starts(offsets: &[i64]) -> Vec<i64> {
    if offsets.is_empty() {
        return Vec::new();
    }
    offsets[..offsets.len() - 1].to_vec()
}

/// Validate and prepare everything the local path needs in one call:
/// `(nextparents, starts, outlength)`.
pub fn prepare_local(offsets: &[i64], content_length: i64) -> Result<(Vec<i64>, Vec<i64>, i64)> {
    validate_offsets(offsets, content_length)?;
    let outlength = offsets.len() as i64 - 1;
    let nextparents = local_nextparents(offsets);
    let starts = make_starts(offsets);
    Ok((nextparents, starts, outlength))
}
