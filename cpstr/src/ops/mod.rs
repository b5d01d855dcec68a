//! Special methods of strings.
//!
//! Each comparison operator is a type implementing one trait, the other
//! operators are plain functions. [`SpecialMethod`] ties them together into
//! the operator table an interpreter dispatches through.
mod compare;
mod op_add;
mod op_contains;
mod op_eq;
mod op_ge;
mod op_getitem;
mod op_gt;
mod op_le;
mod op_lt;
mod op_multiply;
mod op_ne;
mod special;

pub(crate) use op_eq::OpEq;
pub(crate) use op_ge::OpGe;
pub(crate) use op_gt::OpGt;
pub(crate) use op_le::OpLe;
pub(crate) use op_lt::OpLt;
pub(crate) use op_ne::OpNe;
pub use special::{OpResult, SpecialMethod};
