use crate::string::Str;

use super::compare::{CompareValue, StrCompare};
use super::op_eq::OpEq;

pub(crate) struct OpNe;

impl StrCompare for OpNe {
    fn str_compare(a: &Str, b: &Str) -> bool {
        !OpEq::str_compare(a, b)
    }

    fn value() -> CompareValue {
        CompareValue::Ne
    }
}
