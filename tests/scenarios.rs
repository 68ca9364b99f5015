//! Literal end-to-end scenarios: concrete offsets/content fed straight
//! through `reduce_axis` (or a manual two-step composition where that's
//! what the operation actually describes) and checked against hand-traced
//! expected output.

use jagged_reduce::content::Content;
use jagged_reduce::index::TypedIndex;
use jagged_reduce::list::{reduce_axis, List};
use jagged_reduce::primitive::{TypedBuffer, TypedScalar};
use jagged_reduce::reduce::ReduceKind;

fn list_of(offsets: Vec<i64>, content: Content) -> List {
    List::new(TypedIndex::from_i64_vec(offsets), content).unwrap()
}

#[test]
fn sum_axis_minus_one_i64() {
    // offsets [0,3,3,5,6] over content [1,2,3,4,5,6]: rows [1,2,3], [],
    // [4,5], [6].
    let content = Content::Numpy(TypedBuffer::I64(vec![1, 2, 3, 4, 5, 6]));
    let list = Content::List(list_of(vec![0, 3, 3, 5, 6], content));

    let reduced = reduce_axis(&list, ReduceKind::Sum, -1, false, false, None).unwrap();
    match reduced {
        Content::Numpy(TypedBuffer::I64(v)) => assert_eq!(v, vec![6, 0, 9, 6]),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn argmax_axis_minus_one_f64_with_nan_and_empty_group() {
    // offsets [0,4,4,6] over [0.1, 0.5, 0.2, NaN, 3.0, 3.0]: rows
    // [0.1,0.5,0.2,NaN], [], [3.0,3.0].
    let content = Content::Numpy(TypedBuffer::F64(vec![0.1, 0.5, 0.2, f64::NAN, 3.0, 3.0]));
    let list = Content::List(list_of(vec![0, 4, 4, 6], content));

    let reduced = reduce_axis(&list, ReduceKind::ArgMax, -1, false, false, None).unwrap();
    match reduced {
        // NaN never wins (row 0 -> index 1), the empty row yields the
        // -1 sentinel (row 1), and a tie breaks to the earliest index
        // (row 2 -> index 4, not 5).
        Content::Numpy(TypedBuffer::I64(v)) => assert_eq!(v, vec![1, -1, 4]),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn nonlocal_sum_over_nested_layer() {
    // Inner: offsets [0,2,3,3,5] over [1,2,3,4,5] -> rows [1,2],[3],[],[4,5].
    // Reducing the inner list's own axis=-1 first gives one sum per row:
    // [3, 3, 0, 9]. Grouping those four row-sums into two outer groups of
    // two rows each ([0,2] and [2,4]) reproduces the flat per-outer-group
    // sums: group 0 = 1+2+3 = 6, group 1 = 4+5 = 9.
    let inner_content = Content::Numpy(TypedBuffer::I64(vec![1, 2, 3, 4, 5]));
    let inner = Content::List(list_of(vec![0, 2, 3, 3, 5], inner_content));
    let inner_reduced = reduce_axis(&inner, ReduceKind::Sum, -1, false, false, None).unwrap();

    let outer = Content::List(list_of(vec![0, 2, 4], inner_reduced));
    let outer_reduced = reduce_axis(&outer, ReduceKind::Sum, -1, false, false, None).unwrap();

    match outer_reduced {
        Content::Numpy(TypedBuffer::I64(v)) => assert_eq!(v, vec![6, 9]),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn nonlocal_sum_with_gaps() {
    // offsets [0,0,2] over [7,8]: group 0 is an empty row (a gap, no
    // contributing elements at any position), group 1 owns both entries.
    // A non-local (axis=-2) sum transposes by position: position 0 sees
    // only group 1's first entry (7), position 1 only group 1's second
    // entry (8) -- group 0 contributes nothing at either position, so the
    // transposed output is exactly [7, 8].
    let content = Content::Numpy(TypedBuffer::I64(vec![7, 8]));
    let list = Content::List(list_of(vec![0, 0, 2], content));

    let reduced = reduce_axis(&list, ReduceKind::Sum, -2, false, false, None).unwrap();
    match reduced {
        Content::Numpy(TypedBuffer::I64(v)) => assert_eq!(v, vec![7, 8]),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn prod_over_bool_is_logical_and() {
    // offsets [0,1,3] over [true, false, true]: rows [true], [false, true].
    let content = Content::Numpy(TypedBuffer::Bool(vec![true, false, true]));
    let list = Content::List(list_of(vec![0, 1, 3], content));

    let reduced = reduce_axis(&list, ReduceKind::Prod, -1, false, false, None).unwrap();
    match reduced {
        Content::Numpy(TypedBuffer::Bool(v)) => assert_eq!(v, vec![true, false]),
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn min_with_caller_supplied_identity() {
    // offsets [0,2,2,4] over [5,3,9,2]: rows [5,3], [], [9,2]. The empty
    // row falls back to the caller's identity instead of a zero default.
    let content = Content::Numpy(TypedBuffer::I32(vec![5, 3, 9, 2]));
    let list = Content::List(list_of(vec![0, 2, 2, 4], content));

    let reduced = reduce_axis(
        &list,
        ReduceKind::Min,
        -1,
        false,
        false,
        Some(TypedScalar::I32(i32::MAX)),
    )
    .unwrap();
    match reduced {
        Content::Numpy(TypedBuffer::I32(v)) => assert_eq!(v, vec![3, i32::MAX, 2]),
        other => panic!("unexpected shape: {other:?}"),
    }
}
