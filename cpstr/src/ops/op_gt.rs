use crate::string::Str;

use super::compare::{CompareValue, StrCompare};

pub(crate) struct OpGt;

impl StrCompare for OpGt {
    fn str_compare(a: &Str, b: &Str) -> bool {
        a > b
    }

    fn value() -> CompareValue {
        CompareValue::Gt
    }
}
