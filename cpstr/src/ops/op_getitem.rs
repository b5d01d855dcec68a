use crate::error;
use crate::string::Str;
use crate::value::Value;

/// `a[item]`: one character for an integer index, a substring for a slice.
pub(crate) fn op_getitem(a: &Str, item: &Value) -> error::Result<Str> {
    match item {
        Value::Slice(slice) => a.slice(slice),
        _ => match item.as_index() {
            Some(index) => a.item(index),
            None => Err(error::Error::IndicesMustBeIntegers),
        },
    }
}
