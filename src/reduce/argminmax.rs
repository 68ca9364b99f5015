//! `argmin`/`argmax`: output is always an `i64` index into
//! the original content buffer, earliest occurrence wins a tie, and a
//! group with no elements reports `-1` (the "missing" sentinel).
//!
//! The scan tracks each element's position *within its own group* and adds
//! `starts[g]` to recover the flat content index — the conversion
//! `local::make_starts`'s doc comment describes.

use super::minmax::MinMaxWiden;
use crate::primitive::{BufferView, PrimitiveType};

fn argminmax_generic<T: MinMaxWiden>(
    values: &[T],
    parents: &[i64],
    outlength: i64,
    starts: &[i64],
    want_min: bool,
) -> Vec<i64> {
    let mut best_val: Vec<Option<T>> = vec![None; outlength as usize];
    let mut best_idx = vec![-1i64; outlength as usize];
    let mut pos_in_group = vec![0i64; outlength as usize];

    for (i, &p) in parents.iter().enumerate() {
        let g = p as usize;
        let relpos = pos_in_group[g];
        pos_in_group[g] += 1;

        let x = values[i];
        if x.is_nan() {
            continue;
        }
        let replace = match best_val[g] {
            None => true,
            Some(cur) => {
                if want_min {
                    x < cur
                } else {
                    x > cur
                }
            }
        };
        if replace {
            best_val[g] = Some(x);
            best_idx[g] = starts[g] + relpos;
        }
    }
    best_idx
}

macro_rules! dispatch_argminmax {
    ($view:expr, $parents:expr, $outlength:expr, $starts:expr, $want_min:expr) => {
        match $view.primitive_type() {
            PrimitiveType::Bool => argminmax_generic(
                $view.as_slice::<bool>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::I8 => argminmax_generic(
                $view.as_slice::<i8>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::U8 => argminmax_generic(
                $view.as_slice::<u8>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::I16 => argminmax_generic(
                $view.as_slice::<i16>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::U16 => argminmax_generic(
                $view.as_slice::<u16>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::I32 => argminmax_generic(
                $view.as_slice::<i32>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::U32 => argminmax_generic(
                $view.as_slice::<u32>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::I64 => argminmax_generic(
                $view.as_slice::<i64>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::U64 => argminmax_generic(
                $view.as_slice::<u64>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::F32 => argminmax_generic(
                $view.as_slice::<f32>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
            PrimitiveType::F64 => argminmax_generic(
                $view.as_slice::<f64>().unwrap(),
                $parents,
                $outlength,
                $starts,
                $want_min,
            ),
        }
    };
}

pub fn argmin_reduce(view: &BufferView, parents: &[i64], outlength: i64, starts: &[i64]) -> Vec<i64> {
    dispatch_argminmax!(view, parents, outlength, starts, true)
}

pub fn argmax_reduce(view: &BufferView, parents: &[i64], outlength: i64, starts: &[i64]) -> Vec<i64> {
    dispatch_argminmax!(view, parents, outlength, starts, false)
}
