/*
    Operators
*/

use std::ops::{Add, Div, Mul, Sub};

use crate::{Number, Result};

// Implements a binary operator for every owned/borrowed combination
// of `Number`, forwarding to the variant-level operation.
macro_rules! impl_binop {
    ($Op:ident, $op:ident) => {
        impl $Op<&Number> for &Number {
            type Output = Result<Number>;

            fn $op(self, rhs: &Number) -> Self::Output {
                let ctx = self.context();
                let variant = self.variant().$op(rhs.variant(), ctx)?;
                Ok(Number::from_variant(variant, ctx))
            }
        }

        impl $Op<Number> for &Number {
            type Output = Result<Number>;

            fn $op(self, rhs: Number) -> Self::Output {
                $Op::$op(self, &rhs)
            }
        }

        impl $Op<&Number> for Number {
            type Output = Result<Number>;

            fn $op(self, rhs: &Number) -> Self::Output {
                $Op::$op(&self, rhs)
            }
        }

        impl $Op<Number> for Number {
            type Output = Result<Number>;

            fn $op(self, rhs: Number) -> Self::Output {
                $Op::$op(&self, &rhs)
            }
        }
    };
}

impl_binop!(Add, add);
impl_binop!(Sub, sub);
impl_binop!(Mul, mul);
impl_binop!(Div, div);
