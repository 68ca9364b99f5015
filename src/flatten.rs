//! `flatten`: merge one list level into its parent, rejecting axis 0 since
//! there's no outer list for a top-level array to merge into.

use crate::content::Content;
use crate::error::{Error, Result};
use crate::index::TypedIndex;
use crate::list::List;

/// Merge the innermost list level into its parent: a list of lists of
/// numbers becomes a list of numbers, with each outer sublist absorbing
/// everything its own inner sublists held (`[[1,2],[3]]` flattened is
/// `[1,2,3]`, one level shallower but still one list, not a bare buffer).
/// `axis` must be `-1`; `axis == 0` is rejected since there's no enclosing
/// list for the top level to merge into.
pub fn flatten(list: &List, axis: i64) -> Result<Content> {
    if axis == 0 {
        return Err(Error::FlattenAxisZero);
    }
    if axis != -1 {
        // Flattening a level other than the innermost would need to
        // recurse through intermediate list levels first; out of scope
        // for this engine (see sort.rs's same depth-one restriction).
        return Err(Error::AxisExceedsDepth {
            axis,
            depth: list.content().purelist_depth() + 1,
        });
    }
    match list.content() {
        // Already as flat as this engine's `List` can express: nothing to
        // merge below the sole list level.
        Content::Numpy(_) => Ok(list.content().clone()),
        Content::List(inner) => {
            let offsets64 = list.offsets().to_i64_vec();
            let inner_offsets64 = inner.offsets().to_i64_vec();
            let new_offsets: Vec<i64> = offsets64
                .iter()
                .map(|&o| inner_offsets64[o as usize])
                .collect();
            Ok(Content::List(List::new(
                TypedIndex::from_i64_vec(new_offsets),
                inner.content().clone(),
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::TypedBuffer;

    fn nested() -> List {
        // outer: [[[1, 2], [3]], [[4, 5]]]
        let numbers = Content::Numpy(TypedBuffer::I32(vec![1, 2, 3, 4, 5]));
        let inner = List::new(TypedIndex::from_i64_vec(vec![0, 2, 3, 5]), numbers).unwrap();
        // outer groups its 3 inner sublists into 2 rows: row0 -> inner[0..2], row1 -> inner[2..3]
        List::new(TypedIndex::from_i64_vec(vec![0, 2, 3]), Content::List(inner)).unwrap()
    }

    #[test]
    fn flatten_merges_innermost_level() {
        let list = nested();
        let flattened = flatten(&list, -1).unwrap();
        match flattened {
            Content::List(l) => {
                assert_eq!(l.offsets().to_i64_vec(), vec![0, 3, 5]);
                assert_eq!(
                    l.content(),
                    &Content::Numpy(TypedBuffer::I32(vec![1, 2, 3, 4, 5]))
                );
            }
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[test]
    fn flatten_rejects_axis_zero() {
        let content = Content::Numpy(TypedBuffer::I32(vec![1, 2, 3]));
        let offsets = TypedIndex::from_i64_vec(vec![0, 1, 3]);
        let list = List::new(offsets, content).unwrap();
        assert!(matches!(flatten(&list, 0), Err(Error::FlattenAxisZero)));
    }
}
