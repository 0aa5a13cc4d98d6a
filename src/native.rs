/*
    Raw native values
*/

use std::fmt::{Debug, Display};
use std::str::FromStr;

use num_traits::{AsPrimitive, Bounded};

use crate::pool::{FreeList, Pool, Slot};
use crate::variant::Variant;
use crate::{Error, Kind, Result};

/// A raw value type that a [`Variant`] can hold.
///
/// Implemented for exactly `i16`, `i32`, `f32` and `f64`.
/// Every conversion to and from double precision goes through
/// `as` casts: widening is exact, narrowing truncates integers and
/// rounds floats to the nearest representable value.
pub trait Native:
    Copy + PartialEq + Bounded + AsPrimitive<f64> + FromStr + Display + Debug + Send + Sync + 'static
{
    /// The kind tag of this representation.
    const KIND: Kind;

    /// Wraps a slot of this type in the matching variant case.
    fn into_variant(slot: Slot<Self>) -> Variant;

    /// Returns the free list for this type inside `pool`.
    fn free_list(pool: &Pool) -> &FreeList<Self>;

    /// Converts to double precision.
    #[inline]
    fn widen(self) -> f64 {
        self.as_()
    }

    /// Converts from double precision, possibly losing information.
    fn narrow(value: f64) -> Self;

    /// Smallest value of this type as a double.
    #[inline]
    fn lowest() -> f64 {
        Self::min_value().widen()
    }

    /// Largest value of this type as a double.
    #[inline]
    fn highest() -> f64 {
        Self::max_value().widen()
    }

    /// Returns true if `value` lies within `[lowest, highest]`.
    /// Only magnitude is checked, not precision.
    #[inline]
    fn in_range(value: f64) -> bool {
        value >= Self::lowest() && value <= Self::highest()
    }

    /// Renders the value with the type's default decimal formatting.
    fn render(self) -> String {
        self.to_string()
    }

    /// Parses the native numeral format of this type.
    /// Non-finite results are rejected.
    fn parse(text: &str) -> Result<Self> {
        text.parse::<Self>()
            .ok()
            .filter(|v| v.widen().is_finite())
            .ok_or_else(|| Error::Parse {
                kind: Self::KIND,
                text: text.to_owned(),
            })
    }
}

macro_rules! impl_native {
    ($t:ty, $kind:ident, $field:ident) => {
        impl Native for $t {
            const KIND: Kind = Kind::$kind;

            #[inline]
            fn narrow(value: f64) -> Self {
                value.as_()
            }

            #[inline]
            fn into_variant(slot: Slot<Self>) -> Variant {
                Variant::$kind(slot)
            }

            #[inline]
            fn free_list(pool: &Pool) -> &FreeList<Self> {
                &pool.$field
            }
        }
    };
}

impl_native!(i16, Short, short);
impl_native!(i32, Int, int);
impl_native!(f32, Float, float);
impl_native!(f64, Double, double);
