//! Integer index buffers and the three offset widths this engine allows.
//!
//! Offsets, parents, carries, and every other "vector of positions" in this
//! crate are backed by `TypedIndex`. The orchestrator canonicalizes any
//! non-`i64` offsets array to `i64` before recursing, so every kernel below
//! the `List` boundary works purely in `i64` and the width tag only
//! matters at that one conversion point.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
    I32,
    U32,
    I64,
}

/// A contiguous, owned index array in one of the three widths.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedIndex {
    I32(Vec<i32>),
    U32(Vec<u32>),
    I64(Vec<i64>),
}

impl TypedIndex {
    pub fn index_type(&self) -> IndexType {
        match self {
            TypedIndex::I32(_) => IndexType::I32,
            TypedIndex::U32(_) => IndexType::U32,
            TypedIndex::I64(_) => IndexType::I64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TypedIndex::I32(v) => v.len(),
            TypedIndex::U32(v) => v.len(),
            TypedIndex::I64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widen this index to a plain `Vec<i64>`. Always succeeds: `i32`/`u32`
    /// both fit losslessly in `i64`.
    pub fn to_i64_vec(&self) -> Vec<i64> {
        match self {
            TypedIndex::I32(v) => v.iter().map(|&x| x as i64).collect(),
            TypedIndex::U32(v) => v.iter().map(|&x| x as i64).collect(),
            TypedIndex::I64(v) => v.clone(),
        }
    }

    pub fn from_i64_vec(values: Vec<i64>) -> TypedIndex {
        TypedIndex::I64(values)
    }
}

impl From<Vec<i32>> for TypedIndex {
    fn from(v: Vec<i32>) -> Self {
        TypedIndex::I32(v)
    }
}

impl From<Vec<u32>> for TypedIndex {
    fn from(v: Vec<u32>) -> Self {
        TypedIndex::U32(v)
    }
}

impl From<Vec<i64>> for TypedIndex {
    fn from(v: Vec<i64>) -> Self {
        TypedIndex::I64(v)
    }
}

/// A borrowed `(buffer, offset, length)` window into a `TypedIndex`.
#[derive(Debug, Clone, Copy)]
pub struct IndexView<'a> {
    index: &'a TypedIndex,
    offset: i64,
    length: i64,
}

impl<'a> IndexView<'a> {
    pub fn new(index: &'a TypedIndex, offset: i64, length: i64) -> Result<Self> {
        let total = index.len() as i64;
        if offset < 0 || length < 0 || offset + length > total {
            return Err(Error::IndexOutOfBounds {
                index: offset + length,
                length: total,
            });
        }
        Ok(Self {
            index,
            offset,
            length,
        })
    }

    pub fn whole(index: &'a TypedIndex) -> Self {
        Self {
            index,
            offset: 0,
            length: index.len() as i64,
        }
    }

    pub fn index_type(&self) -> IndexType {
        self.index.index_type()
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn len(&self) -> i64 {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Materialize this window as an owned `Vec<i64>`.
    pub fn to_i64_vec(&self) -> Vec<i64> {
        let lo = self.offset as usize;
        let hi = (self.offset + self.length) as usize;
        match self.index {
            TypedIndex::I32(v) => v[lo..hi].iter().map(|&x| x as i64).collect(),
            TypedIndex::U32(v) => v[lo..hi].iter().map(|&x| x as i64).collect(),
            TypedIndex::I64(v) => v[lo..hi].to_vec(),
        }
    }
}
