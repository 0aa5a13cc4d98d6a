/*
    Errors
*/

use thiserror::Error;

use crate::Kind;

/// Every way an operation on a [`Number`](crate::Number) can fail.
///
/// Errors are raised where they are detected and never recovered
/// inside the crate; an operation either produces a new value or
/// returns one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The right-hand side of a division widened to exactly `0.0`.
    #[error("division by zero")]
    DivisionByZero,

    /// The value fits in none of the four representations.
    /// Only non-finite doubles end up here.
    #[error("value {0} does not fit in any supported representation")]
    Overflow(f64),

    /// Serialized text is missing the `:` between kind and value.
    #[error("invalid format: expected `<kind>:<value>`, found {0:?}")]
    InvalidFormat(String),

    /// Serialized text names a kind other than `short`, `int`, `float` or `double`.
    #[error("unknown type {0:?}")]
    UnknownType(String),

    /// The value portion is not a finite numeral of the named kind.
    #[error("cannot parse {text:?} as {kind}")]
    Parse { kind: Kind, text: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
