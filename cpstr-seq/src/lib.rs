//! Equality and ordering over sequences of Unicode code points.
//!
//! Text values in the interpreter come in more than one representation. The
//! functions here compare any two of them through the [`CodePointSequence`]
//! trait, without converting either side.
mod code_point;
mod compare;
mod sequence;

pub use code_point::{
    is_ascii, is_high_surrogate, is_low_surrogate, is_surrogate, to_char, MAX_CODE_POINT,
};
pub use compare::{compare, eq};
pub use sequence::CodePointSequence;
