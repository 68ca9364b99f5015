//! `sort`/`argsort`: per-sublist sorting with `ascending`/`stable` flags.
//!
//! Both share the same per-sublist permutation machinery: compute, for
//! each sublist independently, the permutation of its own elements that
//! puts them in order, then either carry the content by that permutation
//! (`sort`) or hand back the permutation itself shifted to a global index
//! (`argsort`).

use crate::content::Content;
use crate::error::Result;
use crate::list::List;
use crate::primitive::{BufferView, Primitive, PrimitiveType, TypedBuffer};

/// Build each sublist's own sorting permutation (local indices, not yet
/// shifted by the sublist's start) as one flat `Vec<i64>` aligned with the
/// content order, plus the offsets unchanged from the input.
fn local_argsort_indices(
    view: &BufferView,
    offsets: &[i64],
    ascending: bool,
    stable: bool,
) -> Vec<i64> {
    macro_rules! sort_slice {
        ($ty:ty) => {{
            let values = view.as_slice::<$ty>().expect("tag matches view");
            let mut out = Vec::with_capacity(values.len());
            for w in offsets.windows(2) {
                let lo = w[0] as usize;
                let hi = w[1] as usize;
                let mut idx: Vec<i64> = (lo as i64..hi as i64).collect();
                let key = |&i: &i64| values[i as usize];
                let cmp = |a: &i64, b: &i64| {
                    let (x, y) = (key(a), key(b));
                    let ord = x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal);
                    if ascending {
                        ord
                    } else {
                        ord.reverse()
                    }
                };
                if stable {
                    idx.sort_by(cmp);
                } else {
                    idx.sort_unstable_by(cmp);
                }
                out.extend(idx);
            }
            out
        }};
    }

    match view.primitive_type() {
        PrimitiveType::Bool => sort_slice!(bool),
        PrimitiveType::I8 => sort_slice!(i8),
        PrimitiveType::U8 => sort_slice!(u8),
        PrimitiveType::I16 => sort_slice!(i16),
        PrimitiveType::U16 => sort_slice!(u16),
        PrimitiveType::I32 => sort_slice!(i32),
        PrimitiveType::U32 => sort_slice!(u32),
        PrimitiveType::I64 => sort_slice!(i64),
        PrimitiveType::U64 => sort_slice!(u64),
        PrimitiveType::F32 => sort_slice!(f32),
        PrimitiveType::F64 => sort_slice!(f64),
    }
}

/// `argsort`: per-sublist permutation, expressed as global content indices
/// (so it can drive a subsequent `carry` directly).
pub fn argsort_next(list: &List, ascending: bool, stable: bool) -> Result<Content> {
    let offsets64 = list.offsets().to_i64_vec();
    let content_buf = match list.content() {
        Content::Numpy(buf) => buf,
        Content::List(_) => {
            // Sorting a list-of-lists sorts each innermost sublist; deeper
            // nesting is out of scope for this engine.
            return Err(crate::error::Error::AxisExceedsDepth {
                axis: -1,
                depth: list.content().purelist_depth() + 1,
            });
        }
    };
    let view = BufferView::whole(content_buf);
    let indices = local_argsort_indices(&view, &offsets64, ascending, stable);
    Ok(Content::List(List::new(
        crate::index::TypedIndex::from_i64_vec(offsets64),
        Content::Numpy(TypedBuffer::I64(indices)),
    )?))
}

/// `sort`: same permutation, applied directly to carry the content instead
/// of returning the index array.
pub fn sort_next(list: &List, ascending: bool, stable: bool) -> Result<Content> {
    let offsets64 = list.offsets().to_i64_vec();
    let content_buf = match list.content() {
        Content::Numpy(buf) => buf,
        Content::List(_) => {
            return Err(crate::error::Error::AxisExceedsDepth {
                axis: -1,
                depth: list.content().purelist_depth() + 1,
            });
        }
    };
    let view = BufferView::whole(content_buf);
    let indices = local_argsort_indices(&view, &offsets64, ascending, stable);
    let carried = list.content().carry(&indices)?;
    Ok(Content::List(List::new(
        crate::index::TypedIndex::from_i64_vec(offsets64),
        carried,
    )?))
}
