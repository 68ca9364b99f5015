//! `rpad`/`rpad_and_clip`: pad (and optionally clip) every
//! sublist to a common target length, using `-1` as the missing-value
//! sentinel the same way `prepare::nonlocal`'s `distincts` does.

use crate::content::Content;
use crate::error::Result;
use crate::index::TypedIndex;
use crate::list::List;

/// Build the `outindex` carry array for `rpad`: sublists shorter than
/// `target` get trailing `-1` entries; sublists already at or past
/// `target` are passed through unclipped.
pub fn rpad(list: &List, target: i64) -> Result<Content> {
    build(list, target, false)
}

/// Same as `rpad`, but sublists longer than `target` are clipped to it.
pub fn rpad_and_clip(list: &List, target: i64) -> Result<Content> {
    build(list, target, true)
}

fn build(list: &List, target: i64, clip: bool) -> Result<Content> {
    let offsets64 = list.offsets().to_i64_vec();
    let lengths = crate::offsets::sublist_lengths(&offsets64);

    let mut outindex = Vec::new();
    let mut outoffsets = vec![0i64; lengths.len() + 1];

    for (g, &len) in lengths.iter().enumerate() {
        let start = offsets64[g];
        let take = if clip { len.min(target) } else { len };
        for i in 0..take {
            outindex.push(start + i);
        }
        let row_len = if clip { target } else { len.max(target) };
        for _ in take..row_len {
            outindex.push(-1);
        }
        outoffsets[g + 1] = outoffsets[g] + row_len;
    }

    let carried = list.content().carry_with_missing(&outindex)?;
    Ok(Content::List(List::new(
        TypedIndex::from_i64_vec(outoffsets),
        carried,
    )?))
}
