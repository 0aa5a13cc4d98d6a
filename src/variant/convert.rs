/*
    Text encoding of a `Variant`
*/

use super::*;
use crate::{Context, Result};

impl Variant {
    /// Renders the raw value in its own width.
    ///
    /// `f32` values are printed with the shortest text that reads back
    /// as the same `f32`, so they may carry fewer digits than an `f64`
    /// of similar magnitude.
    pub fn serialize(&self) -> String {
        match self {
            Variant::Short(s) => s.get().render(),
            Variant::Int(s) => s.get().render(),
            Variant::Float(s) => s.get().render(),
            Variant::Double(s) => s.get().render(),
        }
    }

    /// Parses `text` as the native numeral format of `kind` and stores
    /// it without promotion, taking storage from `ctx`.
    pub fn parse(kind: Kind, text: &str, ctx: &Context) -> Result<Variant> {
        Ok(match kind {
            Kind::Short => ctx.variant(i16::parse(text)?),
            Kind::Int => ctx.variant(i32::parse(text)?),
            Kind::Float => ctx.variant(f32::parse(text)?),
            Kind::Double => ctx.variant(f64::parse(text)?),
        })
    }
}
