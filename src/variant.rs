/*
    Definition of the `Variant` sum type
*/

mod arithmetic;
mod convert;

use crate::pool::Slot;
use crate::{Kind, Native};

/// A raw numeric value in one of four representations.
///
/// Binary operations are staged in double precision: both operands
/// are widened, the operation is computed on `f64`, and the result is
/// handed to a [`Context`](crate::Context) which picks the
/// representation of the new variant.
#[derive(Debug, Clone)]
pub enum Variant {
    /// 16-bit signed integer.
    Short(Slot<i16>),
    /// 32-bit signed integer.
    Int(Slot<i32>),
    /// Single-precision float.
    Float(Slot<f32>),
    /// Double-precision float.
    Double(Slot<f64>),
}

impl Variant {
    /// Creates an unpooled variant holding `value`.
    pub fn unpooled<T: Native>(value: T) -> Self {
        T::into_variant(Slot::unpooled(value))
    }

    /// Returns the kind tag of this variant.
    pub fn kind(&self) -> Kind {
        match self {
            Variant::Short(_) => Kind::Short,
            Variant::Int(_) => Kind::Int,
            Variant::Float(_) => Kind::Float,
            Variant::Double(_) => Kind::Double,
        }
    }

    /// Returns the storage size of the raw value in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.kind().size_in_bytes()
    }

    /// Returns the raw value widened to double precision.
    pub fn to_f64(&self) -> f64 {
        match self {
            Variant::Short(s) => s.get().widen(),
            Variant::Int(s) => s.get().widen(),
            Variant::Float(s) => s.get().widen(),
            Variant::Double(s) => s.get().widen(),
        }
    }

    /// Returns true if the storage goes back to a pool when dropped.
    pub fn is_pooled(&self) -> bool {
        match self {
            Variant::Short(s) => s.is_pooled(),
            Variant::Int(s) => s.is_pooled(),
            Variant::Float(s) => s.is_pooled(),
            Variant::Double(s) => s.is_pooled(),
        }
    }
}
