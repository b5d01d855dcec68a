//! Text values for an interpreter runtime.
//!
//! [`Str`] is an immutable sequence of Unicode code points with two
//! interchangeable representations. Its operators are available through the
//! [`SpecialMethod`] table, which answers [`OpResult::NotImplemented`] for
//! operand types it does not support.
pub mod error;
mod ops;
pub mod slice;
pub mod string;
pub mod value;

pub use ops::{OpResult, SpecialMethod};
pub use slice::{Indices, Slice};
pub use string::{CodePoints, Str};
pub use value::Value;
