//! `count` and `count_nonzero`: the only two reducers whose
//! output doesn't depend on the input element type beyond telling zero from
//! non-zero, so there's no per-type accumulator to widen into — the output
//! is always `i64`.

use crate::primitive::{BufferView, PrimitiveType};

/// Number of elements per group. Doesn't even look at the values.
pub fn count_reduce(parents: &[i64], outlength: i64) -> Vec<i64> {
    let mut counts = vec![0i64; outlength as usize];
    for &p in parents {
        counts[p as usize] += 1;
    }
    counts
}

/// Number of non-zero elements per group. `NaN` counts as non-zero (it is
/// not bit-for-bit equal to zero); `false` is the only zero `bool`.
pub fn count_nonzero_reduce(view: &BufferView, parents: &[i64], outlength: i64) -> Vec<i64> {
    let mut counts = vec![0i64; outlength as usize];
    macro_rules! tally {
        ($ty:ty, $zero:expr) => {{
            let values = view.as_slice::<$ty>().expect("primitive_type tag matches view");
            for (i, &p) in parents.iter().enumerate() {
                if values[i] != $zero {
                    counts[p as usize] += 1;
                }
            }
        }};
    }
    match view.primitive_type() {
        PrimitiveType::Bool => tally!(bool, false),
        PrimitiveType::I8 => tally!(i8, 0),
        PrimitiveType::U8 => tally!(u8, 0),
        PrimitiveType::I16 => tally!(i16, 0),
        PrimitiveType::U16 => tally!(u16, 0),
        PrimitiveType::I32 => tally!(i32, 0),
        PrimitiveType::U32 => tally!(u32, 0),
        PrimitiveType::I64 => tally!(i64, 0),
        PrimitiveType::U64 => tally!(u64, 0),
        PrimitiveType::F32 => tally!(f32, 0.0),
        PrimitiveType::F64 => tally!(f64, 0.0),
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::TypedBuffer;

    #[test]
    fn count_reduce_literal() {
        let parents = [0, 0, 0, 2, 2, 3];
        assert_eq!(count_reduce(&parents, 4), vec![3, 0, 2, 1]);
    }

    #[test]
    fn count_nonzero_reduce_literal() {
        let buf = TypedBuffer::I32(vec![0, 1, 0, 5, 0, -3]);
        let view = BufferView::whole(&buf);
        let parents = [0, 0, 0, 1, 1, 1];
        assert_eq!(count_nonzero_reduce(&view, &parents, 2), vec![1, 2]);
    }

    #[test]
    fn count_nonzero_reduce_nan_counts_as_nonzero() {
        let buf = TypedBuffer::F64(vec![f64::NAN, 0.0]);
        let view = BufferView::whole(&buf);
        let parents = [0, 0];
        assert_eq!(count_nonzero_reduce(&view, &parents, 1), vec![1]);
    }
}
