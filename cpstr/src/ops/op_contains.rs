use crate::error;
use crate::string::Str;
use crate::value::Value;

/// `item in a`: substring test. Only a string can be looked for.
pub(crate) fn op_contains(a: &Str, item: &Value) -> error::Result<bool> {
    match item {
        Value::Str(needle) => Ok(a.contains(needle)),
        _ => Err(error::Error::ContainsRequiresStr),
    }
}
