use crate::string::Str;

use super::compare::{CompareValue, StrCompare};

pub(crate) struct OpLe;

impl StrCompare for OpLe {
    fn str_compare(a: &Str, b: &Str) -> bool {
        a <= b
    }

    fn value() -> CompareValue {
        CompareValue::Le
    }
}
