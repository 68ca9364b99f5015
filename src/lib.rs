//! Segmented reductions over offset-encoded jagged arrays.
//!
//! A jagged array is a flat content buffer plus an `offsets` array
//! delimiting variable-length sublists (`offsets[i]..offsets[i+1]` is
//! sublist `i`). This crate computes per-group reductions (`sum`,
//! `product`, `count`, `count_nonzero`, `min`, `max`, `argmin`, `argmax`)
//! over that structure, along with the `sort`, `argsort`, `combinations`,
//! `rpad`, and `flatten` operations that share its offset/carry machinery.
//!
//! [`list::reduce_axis`] is the main entry point for reductions;
//! [`content::Content`] is the recursive array representation everything
//! else operates on.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod combinations;
pub mod content;
pub mod error;
pub mod flatten;
pub mod index;
pub mod list;
pub mod offsets;
pub mod prepare;
pub mod primitive;
pub mod reduce;
pub mod rpad;
pub mod sort;

pub use content::Content;
pub use error::{Error, Result};
pub use index::{IndexType, IndexView, TypedIndex};
pub use list::{reduce_axis, List};
pub use primitive::{BufferView, Primitive, PrimitiveType, TypedBuffer, TypedScalar};
pub use reduce::{ReduceKind, ReduceOutput};
