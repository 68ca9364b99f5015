//! Non-local reduction preparation.
//!
//! Used when the reduction's target axis sits at or above the current list
//! level: elements that share a *position within their sublist* (not a
//! sublist itself) must be brought together, so the recursion needs a
//! transpose of the jagged structure rather than a straight pass-through.
//!
//! `distincts` is the scratch matrix that makes this transpose concrete:
//! `distincts[j * outlength + g]` holds the flat content index of the
//! `j`-th element of row `g`, or `-1` if row `g` has fewer than `j + 1`
//! elements. When several rows share one ancestor group (`parents[g]` is
//! not injective), the matrix is keyed by `(j, parents[g])` rather than by
//! `(j, g)` directly: `distincts` then records only the last row seen at
//! that combined key (it is a debug/introspection aid, not load-bearing),
//! while `nextcarry`/`nextparents` below still carry every contributing
//! row's elements forward without loss.

use crate::error::{Error, Result};

/// Soft cap on `maxcount * outlength` before `distincts` is allocated.
/// This crate applies an i128 overflow precheck against `i64::MAX` plus a
/// fixed soft cap so a pathological `maxcount` can't silently request
/// terabytes of scratch.
pub const DISTINCTS_SOFT_CAP: i64 = 1 << 32;

/// `maxcount_and_offsetscopy`: scan `offsets` for the widest sublist and
/// return a mutable per-group cursor array (one cursor per group, seeded at
/// that group's own `start`).
pub fn maxcount_and_offsetscopy(offsets: &[i64]) -> (i64, Vec<i64>) {
    let maxcount = offsets
        .windows(2)
        .map(|w| w[1] - w[0])
        .max()
        .unwrap_or(0);
    let offsetscopy = if offsets.is_empty() {
        Vec::new()
    } else {
        offsets[..offsets.len() - 1].to_vec()
    };
    (maxcount, offsetscopy)
}

/// Reject a `distincts` allocation before it happens.
pub fn check_distincts_size(maxcount: i64, outlength: i64) -> Result<()> {
    let product = (maxcount as i128) * (outlength as i128);
    if product > i64::MAX as i128 || product > DISTINCTS_SOFT_CAP as i128 {
        return Err(Error::ArrayTooLarge {
            maxcount,
            outlength,
            limit: DISTINCTS_SOFT_CAP,
        });
    }
    Ok(())
}

/// `preparenext`: transpose `offsets`' rows by position, grouping the
/// result by each row's own ancestor group (`parents[g]`, length
/// `offsets.len() - 1`, each in `[0, outlength)`) rather than by row index
/// directly.
///
/// A combined key `j * outlength + parents[g]` names "position `j` within
/// ancestor group `parents[g]`". When one ancestor group owns several rows
/// (`parents` is not injective), those rows' `j`-th elements share a key and
/// are carried into the same downstream bucket — this is the intended
/// transpose-within-a-group behavior, not a collision to reject.
///
/// `nextparents` is returned non-decreasing (sorted by combined key, ties
/// broken by row encounter order), so downstream code — in particular
/// `argminmax`'s `starts[g] + relpos` reconstruction — can rely on each
/// key's members being contiguous, the same contract `local`'s
/// `nextparents` already provides.
pub fn preparenext(
    offsets: &[i64],
    parents: &[i64],
    maxcount: i64,
    outlength: i64,
) -> Result<(Vec<i64>, Vec<i64>, Vec<i64>, i64)> {
    if parents.len() + 1 != offsets.len() {
        return Err(Error::ParentsLengthMismatch {
            parents_len: parents.len() as i64,
            expected: offsets.len() as i64 - 1,
        });
    }
    check_distincts_size(maxcount, outlength)?;

    let outlen = outlength as usize;
    let maxc = maxcount as usize;
    let mut distincts = vec![-1i64; maxc * outlen];
    let mut keyed: Vec<(i64, i64)> = Vec::new();

    for (g, w) in offsets.windows(2).enumerate() {
        let group = parents[g] as usize;
        let row_len = (w[1] - w[0]) as usize;
        for j in 0..row_len {
            let flat = w[0] + j as i64;
            distincts[j * outlen + group] = flat;
            keyed.push(((j * outlen + group) as i64, flat));
        }
    }
    keyed.sort_by_key(|&(key, _)| key);

    let mut nextcarry = Vec::with_capacity(keyed.len());
    let mut nextparents = Vec::with_capacity(keyed.len());
    let mut maxnextparents = 0i64;
    for (key, flat) in keyed {
        nextcarry.push(flat);
        nextparents.push(key);
        if key + 1 > maxnextparents {
            maxnextparents = key + 1;
        }
    }

    Ok((nextcarry, nextparents, distincts, maxnextparents))
}

/// First occurrence of each slot `0..maxnextparents` in `nextparents`.
/// `-1` for a slot that never occurs (can't happen for `preparenext`'s own
/// output, since `maxnextparents` is defined as the highest occupied slot
/// plus one, but the function is kept general for hand-built inputs).
pub fn nextstarts(nextparents: &[i64], maxnextparents: i64) -> Vec<i64> {
    let mut starts = vec![-1i64; maxnextparents as usize];
    for (i, &p) in nextparents.iter().enumerate() {
        let slot = p as usize;
        if starts[slot] == -1 {
            starts[slot] = i as i64;
        }
    }
    starts
}

/// `findgaps`: which of the `outlength` groups never appear in `parents`.
/// Entry `g` is `1` if group `g` is a gap (no elements reduced into it, so
/// it needs the reducer's identity/missing fill), else `0`.
pub fn findgaps(parents: &[i64], outlength: i64) -> Vec<i64> {
    let mut present = vec![false; outlength as usize];
    for &p in parents {
        present[p as usize] = true;
    }
    present.iter().map(|&b| if b { 0 } else { 1 }).collect()
}

/// `outstartsstops`: contiguous `(starts, stops)` spans for `outlength`
/// groups from a non-decreasing `parents` array. A gap group (see
/// `findgaps`) gets a zero-length span at the position its elements would
/// have occupied, so callers can fill it with the reducer's identity
/// without shifting any other group's span.
pub fn outstartsstops(parents: &[i64], outlength: i64) -> (Vec<i64>, Vec<i64>) {
    let outlen = outlength as usize;
    let mut counts = vec![0i64; outlen];
    for &p in parents {
        counts[p as usize] += 1;
    }
    let mut starts = vec![0i64; outlen];
    let mut stops = vec![0i64; outlen];
    let mut cursor = 0i64;
    for g in 0..outlen {
        starts[g] = cursor;
        cursor += counts[g];
        stops[g] = cursor;
    }
    (starts, stops)
}
