use crate::error;

use super::str_core::Storage;
use super::Str;

impl Str {
    /// Whether every code point is ASCII. The empty string is ASCII.
    pub fn is_ascii(&self) -> bool {
        match &self.storage {
            Storage::Compact { ascii, .. } => *ascii,
            Storage::Wide(code_points) => code_points.iter().all(|cp| cpstr_seq::is_ascii(*cp)),
        }
    }

    /// Whether `needle` occurs in this string. The empty string occurs in
    /// every string.
    pub fn contains(&self, needle: &Str) -> bool {
        match (self.as_str(), needle.as_str()) {
            (Some(haystack), Some(needle)) => haystack.contains(needle),
            _ => find_code_points(&self.to_code_points(), &needle.to_code_points()).is_some(),
        }
    }

    /// The lowest index at which `sub` is found within `self[start:end]`,
    /// or `-1`.
    pub fn find(&self, sub: &Str, start: Option<i64>, end: Option<i64>) -> i64 {
        let haystack = self.to_code_points();
        let (start, end) = match adjust_bounds(start, end, haystack.len()) {
            Some(bounds) => bounds,
            None => return -1,
        };
        find_code_points(&haystack[start..end], &sub.to_code_points())
            .map_or(-1, |i| (start + i) as i64)
    }

    /// The number of non-overlapping occurrences of `sub` within
    /// `self[start:end]`.
    pub fn count(&self, sub: &Str, start: Option<i64>, end: Option<i64>) -> usize {
        let haystack = self.to_code_points();
        let (start, end) = match adjust_bounds(start, end, haystack.len()) {
            Some(bounds) => bounds,
            None => return 0,
        };
        let needle = sub.to_code_points();
        if needle.is_empty() {
            return end - start + 1;
        }
        let mut haystack = &haystack[start..end];
        let mut count = 0;
        while let Some(i) = find_code_points(haystack, &needle) {
            count += 1;
            haystack = &haystack[i + needle.len()..];
        }
        count
    }

    /// A copy with occurrences of `old` replaced by `new`, at most `count`
    /// of them if given.
    ///
    /// An empty `old` matches before every character and at the end.
    pub fn replace(&self, old: &Str, new: &Str, count: Option<usize>) -> Str {
        if count == Some(0) {
            return self.clone();
        }
        if let (Some(text), Some(old), Some(new)) = (self.as_str(), old.as_str(), new.as_str()) {
            let replaced = match count {
                Some(count) => text.replacen(old, new, count),
                None => text.replace(old, new),
            };
            return Str::compact(replaced);
        }

        let haystack = self.to_code_points();
        let old = old.to_code_points();
        let new = new.to_code_points();
        let limit = count.unwrap_or(usize::MAX);
        let mut result = Vec::with_capacity(haystack.len());
        let mut replaced = 0;
        if old.is_empty() {
            for cp in haystack.iter() {
                if replaced < limit {
                    result.extend_from_slice(&new);
                    replaced += 1;
                }
                result.push(*cp);
            }
            if replaced < limit {
                result.extend_from_slice(&new);
            }
        } else {
            let mut rest = &haystack[..];
            while replaced < limit {
                match find_code_points(rest, &old) {
                    Some(i) => {
                        result.extend_from_slice(&rest[..i]);
                        result.extend_from_slice(&new);
                        rest = &rest[i + old.len()..];
                        replaced += 1;
                    }
                    None => break,
                }
            }
            result.extend_from_slice(rest);
        }
        Str::wide(result)
    }

    /// The string left justified in a string of length `width`, padded on
    /// the right with `fill` (a space by default).
    pub fn ljust(&self, width: i64, fill: Option<&Str>) -> error::Result<Str> {
        let fill = match fill {
            Some(fill) if fill.len() == 1 => fill.code_points().next().unwrap_or(0x20),
            Some(_) => return Err(error::Error::BadFillChar),
            None => 0x20,
        };
        let n = self.len();
        let width = usize::try_from(width).unwrap_or(0);
        if width <= n {
            return Ok(self.clone());
        }
        match (self.as_str(), cpstr_seq::to_char(fill)) {
            (Some(text), Some(c)) => {
                let size = (width - n)
                    .checked_mul(c.len_utf8())
                    .and_then(|size| size.checked_add(text.len()))
                    .ok_or(error::Error::PadOverflow)?;
                let mut padded = String::new();
                padded
                    .try_reserve_exact(size)
                    .map_err(|_| error::Error::PadOverflow)?;
                padded.push_str(text);
                padded.extend(std::iter::repeat(c).take(width - n));
                Ok(Str::compact(padded))
            }
            _ => {
                let mut padded = padding_buffer(width)?;
                padded.extend(self.code_points());
                padded.resize(width, fill);
                Ok(Str::wide(padded))
            }
        }
    }

    /// The string padded on the left with zeros to length `width`. A
    /// leading sign stays in front of the zeros.
    pub fn zfill(&self, width: i64) -> error::Result<Str> {
        let n = self.len();
        let width = usize::try_from(width).unwrap_or(0);
        if width <= n {
            return Ok(self.clone());
        }
        let fill = width - n;
        let mut padded = padding_buffer(width)?;
        let mut code_points = self.code_points().peekable();
        // if self starts with a sign, preserve it at the front
        if let Some(&sign) = code_points.peek() {
            if sign == u32::from('+') || sign == u32::from('-') {
                padded.push(sign);
                code_points.next();
            }
        }
        padded.extend(std::iter::repeat(u32::from('0')).take(fill));
        padded.extend(code_points);
        if self.is_compact() {
            Ok(padded
                .into_iter()
                .filter_map(cpstr_seq::to_char)
                .collect())
        } else {
            Ok(Str::wide(padded))
        }
    }
}

/// An empty code point buffer able to hold `width` code points.
fn padding_buffer(width: usize) -> error::Result<Vec<u32>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(width)
        .map_err(|_| error::Error::PadOverflow)?;
    Ok(buffer)
}

/// Resolve `start` and `end` of a search like slice bounds. `None` if the
/// range is empty because `start` lies beyond `end`.
fn adjust_bounds(start: Option<i64>, end: Option<i64>, len: usize) -> Option<(usize, usize)> {
    let len = len as i64;
    let adjust = |bound: i64| {
        if bound < 0 {
            (bound + len).max(0)
        } else {
            bound
        }
    };
    let end = end.map_or(len, adjust).min(len);
    let start = start.map_or(0, adjust);
    if start > end {
        None
    } else {
        Some((start as usize, end as usize))
    }
}

fn find_code_points(haystack: &[u32], needle: &[u32]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide(s: &str) -> Str {
        Str::wide(s.chars().map(u32::from).collect())
    }

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";

    #[test]
    fn test_is_ascii() {
        assert!(Str::from(FOX).is_ascii());
        assert!(wide("abc").is_ascii());
        assert!(!wide("\u{e9}").is_ascii());
        assert!(Str::default().is_ascii());
    }

    #[test]
    fn test_contains_mixed() {
        let haystack = wide("caf\u{e9} au lait");
        assert!(haystack.contains(&Str::from("\u{e9} a")));
        assert!(!haystack.contains(&Str::from("cafe")));
    }

    #[test]
    fn test_find() {
        let s = Str::from(FOX);
        assert_eq!(s.find(&Str::from("o"), None, None), 12);
        assert_eq!(s.find(&Str::from("o"), Some(13), None), 17);
        assert_eq!(s.find(&Str::from("o"), Some(-4), None), 41);
        assert_eq!(s.find(&Str::from("cat"), None, None), -1);
        assert_eq!(s.find(&Str::from("dog"), None, Some(-2)), -1);
    }

    #[test]
    fn test_find_non_ascii() {
        let s = Str::from("\u{1F40D} \u{1F40D}");
        assert_eq!(s.find(&wide("\u{1F40D}"), Some(1), None), 2);
    }

    #[test]
    fn test_find_empty() {
        let s = Str::from("abc");
        assert_eq!(s.find(&Str::default(), Some(3), None), 3);
        assert_eq!(s.find(&Str::default(), Some(4), None), -1);
    }

    #[test]
    fn test_count() {
        let s = Str::from(FOX);
        assert_eq!(s.count(&Str::from("o"), None, None), 4);
        assert_eq!(s.count(&Str::from("the"), None, None), 1);
        assert_eq!(Str::from("aaaa").count(&Str::from("aa"), None, None), 2);
        assert_eq!(Str::from("abc").count(&Str::default(), None, None), 4);
        assert_eq!(Str::from("abc").count(&Str::default(), Some(4), None), 0);
    }

    #[test]
    fn test_replace() {
        let s = Str::from("a-b-c");
        assert_eq!(s.replace(&Str::from("-"), &Str::from("+"), None), "a+b+c");
        assert_eq!(s.replace(&Str::from("-"), &Str::from(""), Some(1)), "ab-c");
        assert_eq!(s.replace(&Str::from("x"), &Str::from("y"), None), "a-b-c");
    }

    #[test]
    fn test_replace_empty_old() {
        let s = Str::from("ab");
        assert_eq!(s.replace(&Str::default(), &Str::from("-"), None), "-a-b-");
        assert_eq!(wide("ab").replace(&Str::default(), &Str::from("-"), None), "-a-b-");
        assert_eq!(wide("ab").replace(&Str::default(), &Str::from("-"), Some(2)), "-a-b");
    }

    #[test]
    fn test_replace_wide() {
        let s = wide("\u{1F40D}s and \u{1F40D}s");
        let replaced = s.replace(&Str::from("\u{1F40D}"), &Str::from("snake"), None);
        assert_eq!(replaced, "snakes and snakes");
    }

    #[test]
    fn test_ljust() {
        let s = Str::from("ab");
        assert_eq!(s.ljust(5, None).unwrap(), "ab   ");
        assert_eq!(s.ljust(4, Some(&Str::from("\u{e9}"))).unwrap(), "ab\u{e9}\u{e9}");
        assert_eq!(s.ljust(1, None).unwrap(), "ab");
        assert_eq!(s.ljust(-1, None).unwrap(), "ab");
    }

    #[test]
    fn test_ljust_bad_fill() {
        let s = Str::from("ab");
        assert_eq!(
            s.ljust(5, Some(&Str::from("xy"))),
            Err(error::Error::BadFillChar)
        );
        assert_eq!(
            s.ljust(5, Some(&Str::default())),
            Err(error::Error::BadFillChar)
        );
    }

    #[test]
    fn test_ljust_too_wide() {
        let s = Str::from("ab");
        assert_eq!(
            s.ljust(i64::MAX, Some(&Str::from("\u{e9}"))),
            Err(error::Error::PadOverflow)
        );
        assert_eq!(
            wide("ab").ljust(i64::MAX, None),
            Err(error::Error::PadOverflow)
        );
    }

    #[test]
    fn test_ljust_surrogate_fill() {
        let fill = Str::from_code_point(0xD800).unwrap();
        let padded = Str::from("a").ljust(3, Some(&fill)).unwrap();
        assert!(!padded.is_compact());
        assert_eq!(padded.len(), 3);
    }

    #[test]
    fn test_zfill() {
        assert_eq!(Str::from("42").zfill(5).unwrap(), "00042");
        assert_eq!(Str::from("-42").zfill(5).unwrap(), "-0042");
        assert_eq!(Str::from("+").zfill(3).unwrap(), "+00");
        assert_eq!(Str::from("").zfill(2).unwrap(), "00");
        assert_eq!(wide("12345").zfill(3).unwrap(), "12345");
    }

    #[test]
    fn test_zfill_too_wide() {
        assert_eq!(Str::from("42").zfill(i64::MAX), Err(error::Error::PadOverflow));
        assert_eq!(wide("-1").zfill(i64::MAX), Err(error::Error::PadOverflow));
    }
}
