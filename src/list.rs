//! The list layer and the recursive reduction orchestrator.
//!
//! A `List` is an offsets array plus a child `Content`. Reducing it walks
//! down through however many list levels sit between the array's top and
//! the target axis, instrumented with `tracing` (`#[tracing::instrument]`
//! plus `trace!` at each recursive step) the way an instruction dispatch
//! loop traces each step it executes.

use tracing::{instrument, trace};

use crate::content::Content;
use crate::error::{Error, Result};
use crate::index::TypedIndex;
use crate::offsets::validate_offsets;
use crate::prepare::local::{local_outoffsets, prepare_local};
use crate::prepare::nonlocal::{maxcount_and_offsetscopy, nextstarts, outstartsstops, preparenext};
use crate::primitive::TypedScalar;
use crate::reduce::ReduceKind;

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    offsets: TypedIndex,
    content: Box<Content>,
}

impl List {
    /// Construct a list layer, checking the offsets are monotonic and fit
    /// within the child's length.
    pub fn new(offsets: TypedIndex, content: Content) -> Result<Self> {
        let offsets64 = offsets.to_i64_vec();
        validate_offsets(&offsets64, content.length())?;
        Ok(Self {
            offsets,
            content: Box::new(content),
        })
    }

    pub fn length(&self) -> i64 {
        self.offsets.len() as i64 - 1
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn offsets(&self) -> &TypedIndex {
        &self.offsets
    }

    /// `out[i] = self[carry[i]]`: reindex whole sublists.
    pub fn carry(&self, carry: &[i64]) -> Result<Content> {
        let offsets64 = self.offsets.to_i64_vec();
        let mut new_offsets = Vec::with_capacity(carry.len() + 1);
        let mut flat_carry = Vec::new();
        new_offsets.push(0i64);
        for &row in carry {
            let lo = offsets64[row as usize];
            let hi = offsets64[row as usize + 1];
            flat_carry.extend(lo..hi);
            new_offsets.push(new_offsets.last().copied().unwrap() + (hi - lo));
        }
        let carried_content = self.content.carry(&flat_carry)?;
        Ok(Content::List(List::new(
            TypedIndex::from_i64_vec(new_offsets),
            carried_content,
        )?))
    }

    pub fn getitem_range_nowrap(&self, start: i64, stop: i64) -> Result<Content> {
        let rows: Vec<i64> = (start..stop).collect();
        self.carry(&rows)
    }

    /// `rpad`'s per-element (not per-sublist) carry: `carry` already names
    /// flat content positions directly, with `-1` for a padded slot.
    pub fn carry_with_missing(&self, carry: &[i64]) -> Result<Content> {
        self.content.carry_with_missing(carry)
    }

    /// Reduce this list's own sublists (the target axis sits below this
    /// level), then regroup the one-row-per-sublist result by the
    /// caller-supplied `parents`/`outlength` — which, for a list nested
    /// inside another being reduced, is itself that ancestor's own
    /// per-sublist grouping, composing correctly through arbitrary
    /// nesting depth.
    #[instrument(level = "trace", skip(self, parents, identity))]
    pub fn reduce_local(
        &self,
        kind: ReduceKind,
        negaxis: i64,
        parents: &[i64],
        outlength: i64,
        mask: bool,
        identity: Option<TypedScalar>,
    ) -> Result<Content> {
        if parents.len() as i64 != self.length() {
            return Err(Error::ParentsLengthMismatch {
                parents_len: parents.len() as i64,
                expected: self.length(),
            });
        }
        let offsets64 = self.offsets.to_i64_vec();
        validate_offsets(&offsets64, self.content.length())?;

        let (own_nextparents, own_starts, this_outlength) =
            prepare_local(&offsets64, self.content.length())?;
        trace!(this_outlength, "reducing own sublists before regrouping");
        let reduced = self.content.reduce_next(
            kind,
            negaxis,
            &own_starts,
            &own_nextparents,
            this_outlength,
            mask,
            identity,
        )?;

        let outoffsets = local_outoffsets(parents, outlength)?;
        Ok(Content::List(List::new(
            TypedIndex::from_i64_vec(outoffsets),
            reduced,
        )?))
    }

    /// Reduce this list by transposing its own rows (the target axis sits
    /// at this level): `preparenext` regroups every row's elements by
    /// `(position, ancestor group)` via `parents`, the combined buckets are
    /// reduced elementwise, and the result is then carried back into one
    /// row per ancestor group — the longest of that group's own rows sets
    /// the row's width, via `outstartsstops`' per-group span.
    #[instrument(level = "trace", skip(self, parents, identity))]
    pub fn reduce_nonlocal(
        &self,
        kind: ReduceKind,
        parents: &[i64],
        outlength: i64,
        mask: bool,
        identity: Option<TypedScalar>,
    ) -> Result<Content> {
        if parents.len() as i64 != self.length() {
            return Err(Error::ParentsLengthMismatch {
                parents_len: parents.len() as i64,
                expected: self.length(),
            });
        }
        let offsets64 = self.offsets.to_i64_vec();
        validate_offsets(&offsets64, self.content.length())?;

        let (maxcount, _) = maxcount_and_offsetscopy(&offsets64);
        let (nextcarry, nextparents, _distincts, maxnextparents) =
            preparenext(&offsets64, parents, maxcount, outlength)?;
        trace!(maxnextparents, "transposed rows into combined-key buckets");
        let carried = self.content.carry(&nextcarry)?;
        let next_starts = nextstarts(&nextparents, maxnextparents);
        let reduced = carried.reduce_next(
            kind,
            1,
            &next_starts,
            &nextparents,
            maxnextparents,
            mask,
            identity,
        )?;

        let (row_starts, row_stops) = outstartsstops(parents, outlength);
        let outlen = outlength as usize;
        let mut glen = vec![0i64; outlen];
        for g in 0..outlen {
            let lo = row_starts[g] as usize;
            let hi = row_stops[g] as usize;
            glen[g] = offsets64[lo..=hi]
                .windows(2)
                .map(|w| w[1] - w[0])
                .max()
                .unwrap_or(0);
        }
        let mut carry_back = Vec::new();
        let mut final_offsets = vec![0i64; outlen + 1];
        for g in 0..outlen {
            for j in 0..glen[g] {
                carry_back.push(j * outlength + g as i64);
            }
            final_offsets[g + 1] = final_offsets[g] + glen[g];
        }
        let regrouped = reduced.carry(&carry_back)?;
        Ok(Content::List(List::new(
            TypedIndex::from_i64_vec(final_offsets),
            regrouped,
        )?))
    }
}

/// Strip exactly one outer list level — the size-1 axis `reduce_axis`
/// leaves behind when `keepdims` is false.
fn drop_kept_dim(content: Content) -> Content {
    match content {
        Content::List(l) => *l.content,
        other => other,
    }
}

/// Resolve a (possibly negative) `axis` against `depth` into a `negaxis`
/// counted up from the innermost level (`negaxis == 1` means "reduce this
/// array's own innermost sublists").
fn resolve_negaxis(axis: i64, depth: i64) -> Result<i64> {
    let negaxis = if axis < 0 { -axis } else { depth - axis };
    if negaxis < 1 {
        return Err(Error::AxisOutOfRange { negaxis, depth });
    }
    if negaxis > depth {
        return Err(Error::AxisExceedsDepth { axis, depth });
    }
    Ok(negaxis)
}

/// The public reduction entry point: reduce `content` along `axis`,
/// producing one output row per element of whichever level `axis` names.
///
/// Dispatch recurses through as many list levels as separate the top from
/// the target axis (`Content::reduce_next`'s `branch_depth`-driven local
/// vs. non-local choice), so nesting depth is not bounded to a single
/// level. The one case with no real enclosing ancestor is the top call
/// itself when the axis targets the outermost level directly (`negaxis ==
/// depth`): there every top-level row collapses into a single group rather
/// than keeping one group per row, since there is no ancestor above to
/// preserve.
///
/// `mask` requests that an empty group report the reducer's "missing" fill
/// instead of its ordinary identity value; see `reduce::reduce`.
#[instrument(level = "trace", skip(content, identity))]
pub fn reduce_axis(
    content: &Content,
    kind: ReduceKind,
    axis: i64,
    keepdims: bool,
    mask: bool,
    identity: Option<TypedScalar>,
) -> Result<Content> {
    let depth = content.purelist_depth();
    let negaxis = resolve_negaxis(axis, depth)?;
    let top_length = content.length();

    let (starts, parents, outlength) = if negaxis == depth {
        trace!(negaxis, depth, "axis targets the outermost level directly");
        (vec![0i64], vec![0i64; top_length as usize], 1)
    } else {
        let identity_parents: Vec<i64> = (0..top_length).collect();
        (identity_parents.clone(), identity_parents, top_length)
    };

    let reduced = content.reduce_next(kind, negaxis, &starts, &parents, outlength, mask, identity)?;

    if keepdims {
        Ok(reduced)
    } else {
        Ok(drop_kept_dim(reduced))
    }
}
