use crate::string::Str;

use super::compare::{CompareValue, StrCompare};

pub(crate) struct OpGe;

impl StrCompare for OpGe {
    fn str_compare(a: &Str, b: &Str) -> bool {
        a >= b
    }

    fn value() -> CompareValue {
        CompareValue::Ge
    }
}
