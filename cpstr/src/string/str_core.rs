use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use cpstr_seq::CodePointSequence;

use crate::error;
use crate::slice::Slice;

use super::code_points::CodePoints;

#[derive(Clone)]
pub(crate) enum Storage {
    /// UTF-8 text, with its length in code points. ASCII text indexes in
    /// constant time.
    Compact {
        text: Rc<str>,
        len: usize,
        ascii: bool,
    },
    /// One element per code point. This may hold lone surrogates.
    Wide(Rc<[u32]>),
}

/// A text value: an immutable sequence of Unicode code points.
///
/// A `Str` is either *compact* (UTF-8) or *wide* (an array of code points).
/// All operations produce the same result whichever representation is used:
/// equal strings compare, order and hash the same.
///
/// Cloning is cheap, the storage is shared.
#[derive(Clone)]
pub struct Str {
    pub(crate) storage: Storage,
    pub(crate) hash: OnceCell<i64>,
}

impl Str {
    fn new(storage: Storage) -> Self {
        Str {
            storage,
            hash: OnceCell::new(),
        }
    }

    pub(crate) fn compact(text: String) -> Self {
        let ascii = text.is_ascii();
        let len = if ascii {
            text.len()
        } else {
            text.chars().count()
        };
        Self::new(Storage::Compact {
            text: text.into(),
            len,
            ascii,
        })
    }

    /// Wide text owning `code_points`, which must all be in range.
    pub(crate) fn wide(code_points: Vec<u32>) -> Self {
        Self::new(Storage::Wide(code_points.into()))
    }

    /// Text holding the same characters as `text`, as a compact `Str` if it
    /// is ASCII and as a wide `Str` otherwise, so that indexing is constant
    /// time either way.
    pub fn from_text(text: &str) -> Self {
        if text.is_ascii() {
            Self::compact(text.to_string())
        } else {
            Self::wide(text.chars().map(u32::from).collect())
        }
    }

    /// Text consisting of the single character with the given code point.
    ///
    /// Scalar values are represented compactly; a surrogate needs a wide
    /// `Str`.
    pub fn from_code_point(cp: u32) -> error::Result<Self> {
        match cpstr_seq::to_char(cp) {
            Some(c) => Ok(Self::compact(c.to_string())),
            None if cp <= cpstr_seq::MAX_CODE_POINT => Ok(Self::wide(vec![cp])),
            None => Err(error::Error::CodePointOutOfRange),
        }
    }

    /// Text from an array of code points, kept as a wide `Str`.
    ///
    /// Lone surrogates are preserved.
    pub fn from_code_points(code_points: Vec<u32>) -> error::Result<Self> {
        if code_points.iter().any(|cp| *cp > cpstr_seq::MAX_CODE_POINT) {
            return Err(error::Error::CodePointOutOfRange);
        }
        Ok(Self::wide(code_points))
    }

    /// The number of code points.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Compact { len, .. } => *len,
            Storage::Wide(code_points) => code_points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this value uses the compact (UTF-8) representation.
    pub fn is_compact(&self) -> bool {
        matches!(self.storage, Storage::Compact { .. })
    }

    /// The text as a `str`, if the representation is compact.
    pub fn as_str(&self) -> Option<&str> {
        match &self.storage {
            Storage::Compact { text, .. } => Some(&**text),
            Storage::Wide(_) => None,
        }
    }

    pub fn code_points(&self) -> CodePoints<'_> {
        match &self.storage {
            Storage::Compact { text, .. } => CodePoints::compact(text),
            Storage::Wide(code_points) => CodePoints::wide(code_points),
        }
    }

    /// The code point at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<u32> {
        match &self.storage {
            Storage::Compact {
                text, ascii: true, ..
            } => text.as_bytes().get(index).map(|b| u32::from(*b)),
            Storage::Compact { text, .. } => text.chars().nth(index).map(u32::from),
            Storage::Wide(code_points) => code_points.get(index).copied(),
        }
    }

    pub(crate) fn to_code_points(&self) -> Vec<u32> {
        match &self.storage {
            Storage::Compact { text, .. } => text.chars().map(u32::from).collect(),
            Storage::Wide(code_points) => code_points.to_vec(),
        }
    }

    /// The one-character string at `index`. A negative index counts from
    /// the end.
    pub fn item(&self, index: i64) -> error::Result<Str> {
        let len = self.len() as i64;
        let i = if index < 0 { index + len } else { index };
        if i < 0 || i >= len {
            return Err(error::Error::IndexOutOfRange);
        }
        match self.get(i as usize) {
            Some(cp) => Self::from_code_point(cp),
            None => Err(error::Error::IndexOutOfRange),
        }
    }

    /// The code points selected by `slice`, resolved against this string.
    pub fn slice(&self, slice: &Slice) -> error::Result<Str> {
        let indices = slice.indices(self.len())?;
        if indices.slice_length == 0 {
            return Ok(Str::default());
        }
        if indices.step == 1 && indices.slice_length == self.len() {
            return Ok(self.clone());
        }
        match &self.storage {
            Storage::Compact {
                text, ascii: true, ..
            } => {
                let bytes = text.as_bytes();
                let selected = indices.positions().map(|i| bytes[i] as char).collect();
                Ok(Self::compact(selected))
            }
            Storage::Compact { .. } => {
                let code_points = self.to_code_points();
                Ok(Self::wide(
                    indices.positions().map(|i| code_points[i]).collect(),
                ))
            }
            Storage::Wide(code_points) => Ok(Self::wide(
                indices.positions().map(|i| code_points[i]).collect(),
            )),
        }
    }

    /// Concatenate two strings.
    ///
    /// Compact operands give a compact result.
    pub fn concat(&self, other: &Str) -> Str {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        match (&self.storage, &other.storage) {
            (Storage::Compact { text: a, .. }, Storage::Compact { text: b, .. }) => {
                let mut text = String::with_capacity(a.len() + b.len());
                text.push_str(a);
                text.push_str(b);
                Self::compact(text)
            }
            _ => {
                let mut code_points = Vec::with_capacity(self.len() + other.len());
                code_points.extend(self.code_points());
                code_points.extend(other.code_points());
                Self::wide(code_points)
            }
        }
    }

    /// The string repeated `n` times.
    pub fn repeat(&self, n: usize) -> error::Result<Str> {
        if n == 0 {
            return Ok(Str::default());
        }
        if n == 1 || self.is_empty() {
            return Ok(self.clone());
        }
        match &self.storage {
            Storage::Compact { text, .. } => {
                checked_size(text.len(), n)?;
                Ok(Self::compact(text.repeat(n)))
            }
            Storage::Wide(code_points) => {
                checked_size(code_points.len() * std::mem::size_of::<u32>(), n)?;
                Ok(Self::wide(code_points.repeat(n)))
            }
        }
    }
}

fn checked_size(unit: usize, n: usize) -> error::Result<usize> {
    unit.checked_mul(n)
        .filter(|size| *size <= isize::MAX as usize)
        .ok_or(error::Error::RepeatOverflow)
}

impl Default for Str {
    fn default() -> Self {
        Self::compact(String::new())
    }
}

impl From<&str> for Str {
    fn from(text: &str) -> Self {
        Self::compact(text.to_string())
    }
}

impl From<String> for Str {
    fn from(text: String) -> Self {
        Self::compact(text)
    }
}

impl FromIterator<char> for Str {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::compact(iter.into_iter().collect())
    }
}

impl CodePointSequence for Str {
    type CodePoints<'a> = CodePoints<'a>;

    fn len(&self) -> usize {
        Str::len(self)
    }

    fn code_points(&self) -> Self::CodePoints<'_> {
        Str::code_points(self)
    }
}

impl PartialEq for Str {
    fn eq(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Storage::Compact { text: a, .. }, Storage::Compact { text: b, .. }) => a == b,
            (Storage::Wide(a), Storage::Wide(b)) => a == b,
            _ => cpstr_seq::eq(self, other),
        }
    }
}

impl Eq for Str {}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        match &self.storage {
            Storage::Compact { text, .. } => &**text == other,
            Storage::Wide(_) => cpstr_seq::eq(self, other),
        }
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialOrd for Str {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Str {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.storage, &other.storage) {
            // UTF-8 byte order is code point order
            (Storage::Compact { text: a, .. }, Storage::Compact { text: b, .. }) => a.cmp(b),
            _ => cpstr_seq::compare(self, other),
        }
    }
}

impl std::hash::Hash for Str {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for cp in self.code_points() {
            state.write_u32(cp);
        }
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.storage {
            Storage::Compact { text, .. } => f.write_str(text),
            Storage::Wide(code_points) => {
                for cp in code_points.iter() {
                    let c = cpstr_seq::to_char(*cp).unwrap_or(char::REPLACEMENT_CHARACTER);
                    fmt::Write::write_char(f, c)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Str {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.storage {
            Storage::Compact { text, .. } => serializer.serialize_str(text),
            Storage::Wide(code_points) => {
                if code_points.iter().all(|cp| cpstr_seq::to_char(*cp).is_some()) {
                    serializer.collect_str(self)
                } else {
                    serializer.collect_seq(code_points.iter())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Str {
        Str::wide(s.chars().map(u32::from).collect())
    }

    #[test]
    fn test_compact_len_counts_code_points() {
        let s = Str::from("h\u{e9}\u{1F600}");
        assert!(s.is_compact());
        assert_eq!(s.len(), 3);
        assert_eq!(s.get(2), Some(0x1F600));
        assert_eq!(s.get(3), None);
    }

    #[test]
    fn test_from_text_picks_representation() {
        assert!(Str::from_text("plain").is_compact());
        assert!(!Str::from_text("caf\u{e9}").is_compact());
    }

    #[test]
    fn test_from_code_point() {
        assert!(Str::from_code_point(0x41).unwrap().is_compact());
        let surrogate = Str::from_code_point(0xD800).unwrap();
        assert!(!surrogate.is_compact());
        assert_eq!(surrogate.len(), 1);
        assert_eq!(
            Str::from_code_point(0x110000),
            Err(error::Error::CodePointOutOfRange)
        );
    }

    #[test]
    fn test_from_code_points_out_of_range() {
        assert_eq!(
            Str::from_code_points(vec![0x41, 0x110000]),
            Err(error::Error::CodePointOutOfRange)
        );
    }

    #[test]
    fn test_eq_across_representations() {
        assert_eq!(Str::from("caf\u{e9}"), wide("caf\u{e9}"));
        assert_ne!(Str::from("caf\u{e9}"), wide("cafe"));
        assert_eq!(wide("x"), "x");
    }

    #[test]
    fn test_ord_across_representations() {
        assert!(Str::from("abc") < wide("abd"));
        assert!(wide("ab") < Str::from("abc"));
        assert_eq!(Str::from("\u{1F600}").cmp(&wide("\u{1F600}")), Ordering::Equal);
    }

    #[test]
    fn test_item() {
        let s = Str::from("h\u{e9}llo");
        assert_eq!(s.item(1).unwrap(), "\u{e9}");
        assert_eq!(s.item(-1).unwrap(), "o");
        assert_eq!(s.item(5), Err(error::Error::IndexOutOfRange));
        assert_eq!(s.item(-6), Err(error::Error::IndexOutOfRange));
    }

    #[test]
    fn test_slice_ascii_stays_compact() {
        let s = Str::from("abcdef");
        let sliced = s.slice(&Slice::new(Some(1), None, Some(2))).unwrap();
        assert!(sliced.is_compact());
        assert_eq!(sliced, "bdf");
    }

    #[test]
    fn test_slice_non_ascii_becomes_wide() {
        let s = Str::from("h\u{e9}llo");
        let sliced = s.slice(&Slice::new(None, None, Some(-1))).unwrap();
        assert!(!sliced.is_compact());
        assert_eq!(sliced, "oll\u{e9}h");
    }

    #[test]
    fn test_slice_resolves_bounds_against_self() {
        let s = Str::from("abc");
        let sliced = s.slice(&Slice::new(Some(-10), Some(10), None)).unwrap();
        assert_eq!(sliced, "abc");
        assert_eq!(
            wide("\u{e9}").slice(&Slice::new(Some(5), Some(1), Some(-1))).unwrap(),
            ""
        );
        assert_eq!(
            s.slice(&Slice::new(None, None, Some(0))),
            Err(error::Error::ZeroSliceStep)
        );
    }

    #[test]
    fn test_concat() {
        let a = Str::from("ab");
        assert!(a.concat(&Str::from("cd")).is_compact());
        let mixed = a.concat(&Str::from_code_point(0xDC00).unwrap());
        assert!(!mixed.is_compact());
        assert_eq!(mixed.len(), 3);
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Str::from("ab").repeat(3).unwrap(), "ababab");
        assert_eq!(wide("\u{e9}").repeat(2).unwrap(), "\u{e9}\u{e9}");
        assert!(Str::from("ab").repeat(0).unwrap().is_empty());
        assert_eq!(
            Str::from("ab").repeat(usize::MAX),
            Err(error::Error::RepeatOverflow)
        );
    }

    #[test]
    fn test_display_replaces_surrogates() {
        let s = Str::from_code_points(vec![0x61, 0xD800]).unwrap();
        assert_eq!(s.to_string(), "a\u{FFFD}");
    }
}
