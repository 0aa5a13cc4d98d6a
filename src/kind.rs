/*
    Kind tags
*/

use std::mem::size_of;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The representation held by a [`Variant`](crate::variant::Variant).
///
/// Kinds are ordered from the most to the least compact choice the
/// promotion engine considers. The lowercase names double as the
/// prefix of the text encoding.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// 16-bit signed integer.
    Short,
    /// 32-bit signed integer.
    Int,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
}

impl Kind {
    /// Returns every kind, most compact first.
    pub fn all() -> impl Iterator<Item = Kind> {
        Kind::iter()
    }

    /// Returns the name used in the text encoding.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Returns the storage size of a raw value of this kind.
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Kind::Short => size_of::<i16>(),
            Kind::Int => size_of::<i32>(),
            Kind::Float => size_of::<f32>(),
            Kind::Double => size_of::<f64>(),
        }
    }

    /// Returns true for the two integer kinds.
    pub const fn is_integral(self) -> bool {
        matches!(self, Kind::Short | Kind::Int)
    }
}
