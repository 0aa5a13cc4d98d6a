/*
    Arithmetic and comparison
*/

use std::cmp::Ordering;

use super::*;
use crate::{Context, Error, Result};

// Arithmetic
impl Variant {
    /// Adds this `Variant` and another, letting `ctx` pick
    /// the representation of the result.
    pub fn add(&self, other: &Variant, ctx: &Context) -> Result<Variant> {
        ctx.select(self.to_f64() + other.to_f64())
    }

    /// Subtracts another `Variant` from this one, letting `ctx` pick
    /// the representation of the result.
    pub fn sub(&self, other: &Variant, ctx: &Context) -> Result<Variant> {
        ctx.select(self.to_f64() - other.to_f64())
    }

    /// Multiplies this `Variant` with another, letting `ctx` pick
    /// the representation of the result.
    pub fn mul(&self, other: &Variant, ctx: &Context) -> Result<Variant> {
        ctx.select(self.to_f64() * other.to_f64())
    }

    /// Divides this `Variant` by another, letting `ctx` pick
    /// the representation of the result.
    ///
    /// Fails with [`Error::DivisionByZero`] when `other` widens to zero,
    /// whatever its kind.
    pub fn div(&self, other: &Variant, ctx: &Context) -> Result<Variant> {
        let denominator = other.to_f64();
        if denominator == 0.0 {
            tracing::debug!(lhs = %self.kind(), rhs = %other.kind(), "division by zero");
            return Err(Error::DivisionByZero);
        }
        ctx.select(self.to_f64() / denominator)
    }
}

// Comparisons are made on the widened values, so variants of
// different kinds compare equal when their doubles match exactly.
impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        self.to_f64() == other.to_f64()
    }
}

impl PartialOrd for Variant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f64().partial_cmp(&other.to_f64())
    }

    fn lt(&self, other: &Self) -> bool {
        self.to_f64() < other.to_f64()
    }
}
