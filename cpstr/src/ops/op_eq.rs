use crate::string::Str;

use super::compare::{CompareValue, StrCompare};

pub(crate) struct OpEq;

impl StrCompare for OpEq {
    fn str_compare(a: &Str, b: &Str) -> bool {
        a == b
    }

    fn value() -> CompareValue {
        CompareValue::Eq
    }
}
