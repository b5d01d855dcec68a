use strum_macros::Display;

use crate::string::Str;
use crate::value::Value;

use super::special::OpResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub(crate) enum CompareValue {
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">=")]
    Ge,
    #[strum(serialize = "<=")]
    Le,
}

pub(crate) trait StrCompare {
    fn str_compare(a: &Str, b: &Str) -> bool;

    // in specialized cases it's nice to have an enum to compare with
    fn value() -> CompareValue;
}

/// A comparison as a special method: defined when the other operand is a
/// string too.
pub(crate) fn rich_compare<C: StrCompare>(a: &Str, other: &Value) -> OpResult<bool> {
    match other {
        Value::Str(b) => {
            tracing::trace!(op = %C::value(), "comparing strings");
            OpResult::Value(C::str_compare(a, b))
        }
        _ => OpResult::NotImplemented,
    }
}
