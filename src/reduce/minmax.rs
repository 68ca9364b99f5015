//! `min`/`max`: output stays the input's own type — no
//! widening. Floats never let a `NaN` win a comparison; a caller-supplied
//! identity overrides the per-type default used for empty groups.

use crate::primitive::{BufferView, Primitive, PrimitiveType, TypedBuffer, TypedScalar};

/// Per-type ordering and the identity values `min`/`max` fall back to when
/// no caller-supplied identity is given and a group has no elements.
pub(crate) trait MinMaxWiden: Primitive + PartialOrd {
    fn min_identity() -> Self;
    fn max_identity() -> Self;
    fn is_nan(&self) -> bool {
        false
    }
    fn from_scalar(scalar: TypedScalar) -> Option<Self>;
}

macro_rules! impl_minmax {
    ($ty:ty, $min_id:expr, $max_id:expr, $variant:ident) => {
        impl MinMaxWiden for $ty {
            fn min_identity() -> Self {
                $min_id
            }
            fn max_identity() -> Self {
                $max_id
            }
            fn from_scalar(scalar: TypedScalar) -> Option<Self> {
                match scalar {
                    TypedScalar::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

impl_minmax!(bool, true, false, Bool);
impl_minmax!(i8, i8::MAX, i8::MIN, I8);
impl_minmax!(u8, u8::MAX, u8::MIN, U8);
impl_minmax!(i16, i16::MAX, i16::MIN, I16);
impl_minmax!(u16, u16::MAX, u16::MIN, U16);
impl_minmax!(i32, i32::MAX, i32::MIN, I32);
impl_minmax!(u32, u32::MAX, u32::MIN, U32);
impl_minmax!(i64, i64::MAX, i64::MIN, I64);
impl_minmax!(u64, u64::MAX, u64::MIN, U64);

impl MinMaxWiden for f32 {
    fn min_identity() -> Self {
        f32::INFINITY
    }
    fn max_identity() -> Self {
        f32::NEG_INFINITY
    }
    fn is_nan(&self) -> bool {
        f32::is_nan(*self)
    }
    fn from_scalar(scalar: TypedScalar) -> Option<Self> {
        match scalar {
            TypedScalar::F32(v) => Some(v),
            _ => None,
        }
    }
}

impl MinMaxWiden for f64 {
    fn min_identity() -> Self {
        f64::INFINITY
    }
    fn max_identity() -> Self {
        f64::NEG_INFINITY
    }
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }
    fn from_scalar(scalar: TypedScalar) -> Option<Self> {
        match scalar {
            TypedScalar::F64(v) => Some(v),
            _ => None,
        }
    }
}

fn minmax_generic<T: MinMaxWiden>(
    values: &[T],
    parents: &[i64],
    outlength: i64,
    identity: Option<T>,
    want_min: bool,
) -> Vec<T> {
    let id = identity.unwrap_or_else(|| {
        if want_min {
            T::min_identity()
        } else {
            T::max_identity()
        }
    });
    let mut acc = vec![id; outlength as usize];
    for (i, &p) in parents.iter().enumerate() {
        let x = values[i];
        if x.is_nan() {
            continue;
        }
        let g = p as usize;
        let better = if want_min { x < acc[g] } else { x > acc[g] };
        if better {
            acc[g] = x;
        }
    }
    acc
}

macro_rules! dispatch_minmax {
    ($view:expr, $parents:expr, $outlength:expr, $identity:expr, $want_min:expr) => {{
        let identity = $identity;
        match $view.primitive_type() {
            PrimitiveType::Bool => TypedBuffer::Bool(minmax_generic(
                $view.as_slice::<bool>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(bool::from_scalar),
                $want_min,
            )),
            PrimitiveType::I8 => TypedBuffer::I8(minmax_generic(
                $view.as_slice::<i8>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(i8::from_scalar),
                $want_min,
            )),
            PrimitiveType::U8 => TypedBuffer::U8(minmax_generic(
                $view.as_slice::<u8>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(u8::from_scalar),
                $want_min,
            )),
            PrimitiveType::I16 => TypedBuffer::I16(minmax_generic(
                $view.as_slice::<i16>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(i16::from_scalar),
                $want_min,
            )),
            PrimitiveType::U16 => TypedBuffer::U16(minmax_generic(
                $view.as_slice::<u16>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(u16::from_scalar),
                $want_min,
            )),
            PrimitiveType::I32 => TypedBuffer::I32(minmax_generic(
                $view.as_slice::<i32>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(i32::from_scalar),
                $want_min,
            )),
            PrimitiveType::U32 => TypedBuffer::U32(minmax_generic(
                $view.as_slice::<u32>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(u32::from_scalar),
                $want_min,
            )),
            PrimitiveType::I64 => TypedBuffer::I64(minmax_generic(
                $view.as_slice::<i64>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(i64::from_scalar),
                $want_min,
            )),
            PrimitiveType::U64 => TypedBuffer::U64(minmax_generic(
                $view.as_slice::<u64>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(u64::from_scalar),
                $want_min,
            )),
            PrimitiveType::F32 => TypedBuffer::F32(minmax_generic(
                $view.as_slice::<f32>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(f32::from_scalar),
                $want_min,
            )),
            PrimitiveType::F64 => TypedBuffer::F64(minmax_generic(
                $view.as_slice::<f64>().unwrap(),
                $parents,
                $outlength,
                identity.and_then(f64::from_scalar),
                $want_min,
            )),
        }
    }};
}

pub fn min_reduce(
    view: &BufferView,
    parents: &[i64],
    outlength: i64,
    identity: Option<TypedScalar>,
) -> TypedBuffer {
    dispatch_minmax!(view, parents, outlength, identity, true)
}

pub fn max_reduce(
    view: &BufferView,
    parents: &[i64],
    outlength: i64,
    identity: Option<TypedScalar>,
) -> TypedBuffer {
    dispatch_minmax!(view, parents, outlength, identity, false)
}
