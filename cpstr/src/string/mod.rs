//! The text value of the interpreter: a sequence of code points in one of
//! two interchangeable representations.
mod code_points;
mod hash;
mod methods;
mod repr;
mod str_core;

pub use code_points::CodePoints;
pub use str_core::Str;
