use crate::string::Str;
use crate::value::Value;

use super::special::OpResult;

/// `a + other`: concatenation, defined when `other` is a string.
pub(crate) fn op_add(a: &Str, other: &Value) -> OpResult<Str> {
    match other {
        Value::Str(b) => OpResult::Value(a.concat(b)),
        _ => OpResult::NotImplemented,
    }
}
