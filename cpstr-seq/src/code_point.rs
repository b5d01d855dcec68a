/// The largest Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

const MIN_HIGH_SURROGATE: u32 = 0xD800;
const MAX_HIGH_SURROGATE: u32 = 0xDBFF;
const MIN_LOW_SURROGATE: u32 = 0xDC00;
const MAX_LOW_SURROGATE: u32 = 0xDFFF;

pub fn is_ascii(cp: u32) -> bool {
    cp < 0x80
}

pub fn is_high_surrogate(cp: u32) -> bool {
    (MIN_HIGH_SURROGATE..=MAX_HIGH_SURROGATE).contains(&cp)
}

pub fn is_low_surrogate(cp: u32) -> bool {
    (MIN_LOW_SURROGATE..=MAX_LOW_SURROGATE).contains(&cp)
}

pub fn is_surrogate(cp: u32) -> bool {
    (MIN_HIGH_SURROGATE..=MAX_LOW_SURROGATE).contains(&cp)
}

/// The `char` for a code point, if it is a Unicode scalar value.
///
/// Surrogates and values above [`MAX_CODE_POINT`] have no `char`.
pub fn to_char(cp: u32) -> Option<char> {
    char::from_u32(cp)
}
