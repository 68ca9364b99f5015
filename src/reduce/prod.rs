//! `product`: same widening table as `sum`, multiplicative
//! identity instead of additive, `bool` folds to logical AND.

use crate::primitive::{BufferView, Primitive, PrimitiveType, TypedBuffer};

trait ProdWiden: Primitive {
    type Acc: Copy;
    fn one() -> Self::Acc;
    fn mul(acc: Self::Acc, x: Self) -> Self::Acc;
    fn wrap(values: Vec<Self::Acc>) -> TypedBuffer;
}

macro_rules! impl_prod_widen {
    ($ty:ty, $acc:ty, $wrap:ident) => {
        impl ProdWiden for $ty {
            type Acc = $acc;
            fn one() -> $acc {
                1 as $acc
            }
            fn mul(acc: $acc, x: $ty) -> $acc {
                acc.wrapping_mul(x as $acc)
            }
            fn wrap(values: Vec<$acc>) -> TypedBuffer {
                TypedBuffer::$wrap(values)
            }
        }
    };
    (float $ty:ty, $wrap:ident) => {
        impl ProdWiden for $ty {
            type Acc = $ty;
            fn one() -> $ty {
                1.0
            }
            fn mul(acc: $ty, x: $ty) -> $ty {
                acc * x
            }
            fn wrap(values: Vec<$ty>) -> TypedBuffer {
                TypedBuffer::$wrap(values)
            }
        }
    };
}

impl_prod_widen!(i8, i64, I64);
impl_prod_widen!(i16, i64, I64);
impl_prod_widen!(i32, i64, I64);
impl_prod_widen!(i64, i64, I64);
impl_prod_widen!(u8, u64, U64);
impl_prod_widen!(u16, u64, U64);
impl_prod_widen!(u32, u64, U64);
impl_prod_widen!(u64, u64, U64);
impl_prod_widen!(float f32, F32);
impl_prod_widen!(float f64, F64);

fn prod_generic<T: ProdWiden>(values: &[T], parents: &[i64], outlength: i64) -> TypedBuffer {
    let mut acc = vec![T::one(); outlength as usize];
    for (i, &p) in parents.iter().enumerate() {
        let g = p as usize;
        acc[g] = T::mul(acc[g], values[i]);
    }
    T::wrap(acc)
}

pub fn prod_reduce(view: &BufferView, parents: &[i64], outlength: i64) -> TypedBuffer {
    match view.primitive_type() {
        PrimitiveType::Bool => {
            let values = view.as_slice::<bool>().expect("tag matches view");
            let mut acc = vec![true; outlength as usize];
            for (i, &p) in parents.iter().enumerate() {
                acc[p as usize] &= values[i];
            }
            TypedBuffer::Bool(acc)
        }
        PrimitiveType::I8 => prod_generic(view.as_slice::<i8>().unwrap(), parents, outlength),
        PrimitiveType::U8 => prod_generic(view.as_slice::<u8>().unwrap(), parents, outlength),
        PrimitiveType::I16 => prod_generic(view.as_slice::<i16>().unwrap(), parents, outlength),
        PrimitiveType::U16 => prod_generic(view.as_slice::<u16>().unwrap(), parents, outlength),
        PrimitiveType::I32 => prod_generic(view.as_slice::<i32>().unwrap(), parents, outlength),
        PrimitiveType::U32 => prod_generic(view.as_slice::<u32>().unwrap(), parents, outlength),
        PrimitiveType::I64 => prod_generic(view.as_slice::<i64>().unwrap(), parents, outlength),
        PrimitiveType::U64 => prod_generic(view.as_slice::<u64>().unwrap(), parents, outlength),
        PrimitiveType::F32 => prod_generic(view.as_slice::<f32>().unwrap(), parents, outlength),
        PrimitiveType::F64 => prod_generic(view.as_slice::<f64>().unwrap(), parents, outlength),
    }
}
