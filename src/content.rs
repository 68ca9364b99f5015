//! The recursive content hierarchy: a jagged array is either a flat typed
//! buffer (a leaf) or a list layer wrapping another content. Reductions,
//! carries, and range slices all recurse through this hierarchy the same
//! way a bucketed index recurses through its own nesting levels.

use crate::error::Result;
use crate::index::TypedIndex;
use crate::list::List;
use crate::primitive::{BufferView, TypedBuffer, TypedScalar};
use crate::reduce::{self, ReduceKind, ReduceOutput};

/// One node of the content tree: a flat value buffer, or another nesting
/// level on top of a child content.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Numpy(TypedBuffer),
    List(List),
}

impl Content {
    pub fn length(&self) -> i64 {
        match self {
            Content::Numpy(buf) => buf.len() as i64,
            Content::List(l) => l.length(),
        }
    }

    /// Number of list levels above the innermost leaf, inclusive of this
    /// one. A bare buffer has depth 1; each wrapping list adds one.
    pub fn purelist_depth(&self) -> i64 {
        match self {
            Content::Numpy(_) => 1,
            Content::List(l) => 1 + l.content().purelist_depth(),
        }
    }

    /// `(branches, depth)`: whether this content's depth varies by record
    /// (a union/indexed-option node could disagree with itself about how
    /// deep it goes), plus the depth itself. This engine has no branching
    /// content variant, so `branches` is always `false` and `depth` is
    /// exactly `purelist_depth`.
    pub fn branch_depth(&self) -> (bool, i64) {
        (false, self.purelist_depth())
    }

    /// Reindex this content's own top-level rows by `carry`:
    /// `out[i] = self[carry[i]]`.
    pub fn carry(&self, carry: &[i64]) -> Result<Content> {
        match self {
            Content::Numpy(buf) => Ok(Content::Numpy(carry_buffer(buf, carry))),
            Content::List(l) => l.carry(carry),
        }
    }

    /// Reindex this content's own top-level rows by `carry`, where `-1`
    /// means "no row" (the `rpad` sentinel). This engine has no
    /// validity bitmap, so a missing slot is filled with that type's
    /// default value (`0`, `false`, `0.0`) rather than a true null — a
    /// documented scope simplification, not full option-type support.
    pub fn carry_with_missing(&self, carry: &[i64]) -> Result<Content> {
        match self {
            Content::Numpy(buf) => Ok(Content::Numpy(carry_buffer_with_missing(buf, carry))),
            Content::List(l) => l.carry_with_missing(carry),
        }
    }

    /// A contiguous sub-range of this content's own top-level rows.
    pub fn getitem_range_nowrap(&self, start: i64, stop: i64) -> Result<Content> {
        match self {
            Content::Numpy(buf) => Ok(Content::Numpy(carry_buffer(
                buf,
                &(start..stop).collect::<Vec<_>>(),
            ))),
            Content::List(l) => l.getitem_range_nowrap(start, stop),
        }
    }

    /// Reduce this content's own top-level rows, grouped by `parents[i]`
    /// into `outlength` output buckets (`len(parents) == self.length()`).
    ///
    /// `negaxis` is the target axis counted up from the innermost level
    /// (as `crate::list::resolve_negaxis` produces). At each `List` node
    /// this computes `(branches, depth)` for its own child via
    /// `branch_depth` and compares `negaxis` against `1 + depth` (this
    /// node's own depth): if they're equal, the axis targets this node's
    /// own rows directly and the reduction is non-local (a transpose,
    /// `reduce_nonlocal`); otherwise the axis is strictly below this node
    /// and the reduction recurses locally into the child with the same
    /// `negaxis` (`reduce_local`), regrouping by the incoming `parents`
    /// afterward either way.
    ///
    /// `mask`, honored only at the `Numpy` leaf, requests that a group with
    /// no contributing elements report the reducer's "missing" fill
    /// instead of its ordinary identity (see `reduce::reduce`).
    pub fn reduce_next(
        &self,
        kind: ReduceKind,
        negaxis: i64,
        starts: &[i64],
        parents: &[i64],
        outlength: i64,
        mask: bool,
        identity: Option<TypedScalar>,
    ) -> Result<Content> {
        match self {
            Content::Numpy(buf) => {
                let view = BufferView::whole(buf);
                match reduce::reduce(kind, &view, parents, outlength, starts, mask, identity) {
                    ReduceOutput::Values(values) => Ok(Content::Numpy(values)),
                    ReduceOutput::Indices(idx) => Ok(Content::Numpy(TypedBuffer::I64(idx))),
                }
            }
            Content::List(l) => {
                let (_, child_depth) = l.content().branch_depth();
                let this_depth = 1 + child_depth;
                if negaxis == this_depth {
                    l.reduce_nonlocal(kind, parents, outlength, mask, identity)
                } else {
                    l.reduce_local(kind, negaxis, parents, outlength, mask, identity)
                }
            }
        }
    }
}

fn carry_buffer_with_missing(buf: &TypedBuffer, carry: &[i64]) -> TypedBuffer {
    macro_rules! carry_variant {
        ($variant:ident, $values:expr, $default:expr) => {
            TypedBuffer::$variant(
                carry
                    .iter()
                    .map(|&i| if i < 0 { $default } else { $values[i as usize] })
                    .collect(),
            )
        };
    }
    match buf {
        TypedBuffer::Bool(v) => carry_variant!(Bool, v, false),
        TypedBuffer::I8(v) => carry_variant!(I8, v, 0),
        TypedBuffer::U8(v) => carry_variant!(U8, v, 0),
        TypedBuffer::I16(v) => carry_variant!(I16, v, 0),
        TypedBuffer::U16(v) => carry_variant!(U16, v, 0),
        TypedBuffer::I32(v) => carry_variant!(I32, v, 0),
        TypedBuffer::U32(v) => carry_variant!(U32, v, 0),
        TypedBuffer::I64(v) => carry_variant!(I64, v, 0),
        TypedBuffer::U64(v) => carry_variant!(U64, v, 0),
        TypedBuffer::F32(v) => carry_variant!(F32, v, 0.0),
        TypedBuffer::F64(v) => carry_variant!(F64, v, 0.0),
    }
}

fn carry_buffer(buf: &TypedBuffer, carry: &[i64]) -> TypedBuffer {
    macro_rules! carry_variant {
        ($variant:ident, $values:expr) => {
            TypedBuffer::$variant(carry.iter().map(|&i| $values[i as usize]).collect())
        };
    }
    match buf {
        TypedBuffer::Bool(v) => carry_variant!(Bool, v),
        TypedBuffer::I8(v) => carry_variant!(I8, v),
        TypedBuffer::U8(v) => carry_variant!(U8, v),
        TypedBuffer::I16(v) => carry_variant!(I16, v),
        TypedBuffer::U16(v) => carry_variant!(U16, v),
        TypedBuffer::I32(v) => carry_variant!(I32, v),
        TypedBuffer::U32(v) => carry_variant!(U32, v),
        TypedBuffer::I64(v) => carry_variant!(I64, v),
        TypedBuffer::U64(v) => carry_variant!(U64, v),
        TypedBuffer::F32(v) => carry_variant!(F32, v),
        TypedBuffer::F64(v) => carry_variant!(F64, v),
    }
}

/// Build a flat buffer's offsets-equivalent identity view, used by callers
/// that need a `TypedIndex` wrapper around an already-owned `Vec<i64>`.
pub fn identity_index(values: Vec<i64>) -> TypedIndex {
    TypedIndex::from_i64_vec(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numpy_carry_reindexes() {
        let buf = TypedBuffer::I32(vec![10, 20, 30, 40]);
        let content = Content::Numpy(buf);
        let carried = content.carry(&[3, 1, 1]).unwrap();
        assert_eq!(carried, Content::Numpy(TypedBuffer::I32(vec![40, 20, 20])));
    }

    #[test]
    fn numpy_purelist_depth_is_one() {
        let content = Content::Numpy(TypedBuffer::I32(vec![1, 2, 3]));
        assert_eq!(content.purelist_depth(), 1);
    }

    #[test]
    fn branch_depth_never_branches() {
        let content = Content::Numpy(TypedBuffer::I32(vec![1, 2, 3]));
        assert_eq!(content.branch_depth(), (false, 1));
    }
}
