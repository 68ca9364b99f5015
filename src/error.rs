//! Structured error taxonomy for the reduction engine.
//!
//! A reduction kernel library has many fallible boundaries — structural
//! invariant violations, argument misuse, out-of-range indices — each
//! needing the offending index attached, so this crate follows
//! `fuel-types`/`fuel-merkle`'s `thiserror`-based `Error` enum shape.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A three-tier error taxonomy, flattened into one enum. Variant doc
/// comments note which tier they belong to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Tier 1: structural invariant violation.
    #[error("offsets non-monotonic at index {index}: offsets[{index}]={value} > offsets[{index}+1]={next}")]
    NonMonotonicOffsets { index: i64, value: i64, next: i64 },

    /// Tier 1: structural invariant violation.
    #[error("offsets[{index}]={value} exceeds content length {content_length}")]
    OffsetsExceedContent {
        index: i64,
        value: i64,
        content_length: i64,
    },

    /// Tier 1: structural invariant violation.
    #[error("parents.length ({parents_len}) != offsets.length - 1 ({expected}) in non-local reduction")]
    ParentsLengthMismatch { parents_len: i64, expected: i64 },

    /// Tier 1: structural invariant violation.
    #[error("parents[{index}]={value} out of range for outlength {outlength}")]
    ParentOutOfRange {
        index: i64,
        value: i64,
        outlength: i64,
    },

    /// Tier 2: argument misuse.
    #[error("offsets must start at zero here, found offsets[0]={value}")]
    OffsetNotZeroBased { value: i64 },

    /// Tier 2: argument misuse.
    #[error("combinations requires n >= 1, got {n}")]
    InvalidCombinationDegree { n: i64 },

    /// Tier 2: argument misuse.
    #[error("flatten is not defined at axis 0")]
    FlattenAxisZero,

    /// Tier 2: argument misuse.
    #[error("sublists have unequal length: expected {expected}, found {found} at sublist {index}")]
    RaggedRegularArray { expected: i64, found: i64, index: i64 },

    /// Tier 3: out-of-range slice/index, caught at the list-layer surface.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds { index: i64, length: i64 },

    /// A pre-check rejecting a `distincts` scratch allocation before it
    /// would be made, rather than letting it overflow or exhaust memory.
    #[error("distincts array too large: maxcount ({maxcount}) * outlength ({outlength}) exceeds limit {limit}")]
    ArrayTooLarge {
        maxcount: i64,
        outlength: i64,
        limit: i64,
    },

    /// Tier 2: argument misuse.
    #[error("axis resolves to non-positive negaxis {negaxis} (depth {depth})")]
    AxisOutOfRange { negaxis: i64, depth: i64 },

    /// Tier 2: argument misuse.
    #[error("axis {axis} exceeds array depth {depth}")]
    AxisExceedsDepth { axis: i64, depth: i64 },
}
