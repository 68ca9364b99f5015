//! `combinations`: per sublist, every `n`-element combination of its own
//! entries (optionally with repetition), returned as `n` parallel
//! carry-index lists wrapped in one outer list.

use crate::content::Content;
use crate::error::{Error, Result};
use crate::index::TypedIndex;
use crate::list::List;

/// All `k`-subsets of `0..len`, as index tuples into that sublist
/// (`replacement = false`), or all non-decreasing `k`-tuples
/// (`replacement = true`, i.e. combinations with repetition).
fn sublist_combinations(len: i64, n: usize, replacement: bool) -> Vec<Vec<i64>> {
    let mut combos = Vec::new();
    let mut current = vec![0i64; n];
    if n == 0 || len == 0 {
        return combos;
    }
    fn recurse(
        start: i64,
        len: i64,
        n: usize,
        replacement: bool,
        current: &mut Vec<i64>,
        depth: usize,
        combos: &mut Vec<Vec<i64>>,
    ) {
        if depth == n {
            combos.push(current.clone());
            return;
        }
        let remaining = n - depth;
        let hi = if replacement {
            len
        } else {
            len - (remaining as i64 - 1)
        };
        let mut i = start;
        while i < hi {
            current[depth] = i;
            let next_start = if replacement { i } else { i + 1 };
            recurse(next_start, len, n, replacement, current, depth + 1, combos);
            i += 1;
        }
    }
    recurse(0, len, n, replacement, &mut current, 0, &mut combos);
    combos
}

/// Produce `n` parallel carry-index arrays (one per combination "slot")
/// plus the offsets grouping them back into per-sublist combination
/// counts. `n < 1` is rejected as argument misuse.
pub fn combinations_next(list: &List, n: i64, replacement: bool) -> Result<(TypedIndex, Vec<Content>)> {
    if n < 1 {
        return Err(Error::InvalidCombinationDegree { n });
    }
    let n = n as usize;
    let offsets64 = list.offsets().to_i64_vec();
    let lengths = crate::offsets::sublist_lengths(&offsets64);

    let mut slots: Vec<Vec<i64>> = vec![Vec::new(); n];
    let mut outoffsets = vec![0i64; lengths.len() + 1];

    for (g, &len) in lengths.iter().enumerate() {
        let start = offsets64[g];
        let combos = sublist_combinations(len, n, replacement);
        outoffsets[g + 1] = outoffsets[g] + combos.len() as i64;
        for combo in combos {
            for (slot, &local_idx) in combo.iter().enumerate() {
                slots[slot].push(start + local_idx);
            }
        }
    }

    let carried_fields: Result<Vec<Content>> = slots
        .into_iter()
        .map(|carry| list.content().carry(&carry))
        .collect();

    Ok((TypedIndex::from_i64_vec(outoffsets), carried_fields?))
}
