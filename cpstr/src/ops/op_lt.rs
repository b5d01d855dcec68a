use crate::string::Str;

use super::compare::{CompareValue, StrCompare};

pub(crate) struct OpLt;

impl StrCompare for OpLt {
    fn str_compare(a: &Str, b: &Str) -> bool {
        a < b
    }

    fn value() -> CompareValue {
        CompareValue::Lt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ops::OpGt;

    #[test]
    fn test_prefix_is_less() {
        let a = Str::from("abc");
        let b = Str::from_text("abc\u{e9}");

        assert!(OpLt::str_compare(&a, &b));
        assert!(OpGt::str_compare(&b, &a));
    }

    #[test]
    fn test_code_point_order() {
        // U+00E9 is greater than any ASCII character
        let a = Str::from_text("\u{e9}");
        let b = Str::from("z");

        assert!(!OpLt::str_compare(&a, &b));
        assert!(OpLt::str_compare(&b, &a));
    }
}
