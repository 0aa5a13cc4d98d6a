/*
    Defines a number
*/

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::variant::Variant;
use crate::{Context, Error, Kind, Result};

/// The number type.
///
/// The central type of this library. A `Number` owns exactly one
/// [`Variant`] whose representation was picked by promotion, never by
/// the caller. Numbers are immutable: arithmetic produces a new
/// `Number` in the context of the left operand.
pub struct Number {
    variant: Variant,
    ctx: Context,
}

// Constructors and getters
impl Number {
    /// Promotes `value` using the process-wide context.
    pub fn new(value: impl Into<f64>) -> Result<Self> {
        Self::new_in(value, &Context::global())
    }

    /// Promotes `value` using `ctx`.
    pub fn new_in(value: impl Into<f64>, ctx: &Context) -> Result<Self> {
        let variant = ctx.select(value.into())?;
        Ok(Self::from_variant(variant, ctx))
    }

    pub(crate) fn from_variant(variant: Variant, ctx: &Context) -> Self {
        Self {
            variant,
            ctx: ctx.clone(),
        }
    }

    /// Returns the underlying variant.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Returns the context new values are created in.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Returns the kind of the underlying variant.
    pub fn kind(&self) -> Kind {
        self.variant.kind()
    }

    /// Returns the kind name, one of `short`, `int`, `float` or `double`.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the storage size of the raw value in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.variant.size_in_bytes()
    }

    /// Returns the value widened to double precision.
    pub fn to_f64(&self) -> f64 {
        self.variant.to_f64()
    }

    /// Returns this number's storage to the pool it came from.
    /// Equivalent to dropping it.
    pub fn release(self) {}
}

// Serialization
impl Number {
    /// Encodes this number as `<kind>:<value>`.
    pub fn serialize(&self) -> String {
        format!("{}:{}", self.kind(), self.variant.serialize())
    }

    /// Decodes `<kind>:<value>` using the process-wide context.
    pub fn deserialize(text: &str) -> Result<Self> {
        Self::deserialize_in(text, &Context::global())
    }

    /// Decodes `<kind>:<value>` using `ctx`.
    ///
    /// The value keeps the kind it was encoded with; it is not promoted.
    pub fn deserialize_in(text: &str, ctx: &Context) -> Result<Self> {
        let (name, value) = text
            .split_once(':')
            .ok_or_else(|| Error::InvalidFormat(text.to_owned()))?;
        let kind = name
            .parse::<Kind>()
            .map_err(|_| Error::UnknownType(name.to_owned()))?;
        let variant = Variant::parse(kind, value, ctx)?;
        Ok(Self::from_variant(variant, ctx))
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::deserialize(s)
    }
}

// Conversions
impl From<i16> for Number {
    fn from(value: i16) -> Self {
        let ctx = Context::global();
        Self::from_variant(ctx.variant(value), &ctx)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        let ctx = Context::global();
        Self::from_variant(ctx.integral(value), &ctx)
    }
}

impl TryFrom<f32> for Number {
    type Error = Error;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Number {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl Clone for Number {
    fn clone(&self) -> Self {
        Self {
            variant: self.variant.clone(),
            ctx: self.ctx.clone(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.variant.partial_cmp(&other.variant)
    }

    fn lt(&self, other: &Self) -> bool {
        self.variant < other.variant
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} bytes)",
            self.to_f64(),
            self.kind(),
            self.size_in_bytes()
        )
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Number").field(&self.variant).finish()
    }
}
