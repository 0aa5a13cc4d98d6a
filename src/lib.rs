/*
    Top-level
*/

mod error;
mod kind;
mod native;
mod number;
mod ops;
mod promote;

pub mod pool;
pub mod variant;

pub use error::*;
pub use kind::*;
pub use native::*;
pub use number::*;
pub use promote::*;
