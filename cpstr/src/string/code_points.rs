use std::{slice, str::Chars};

enum Inner<'a> {
    Compact(Chars<'a>),
    Wide(slice::Iter<'a, u32>),
}

/// Iterator over the code points of a [`Str`](super::Str).
pub struct CodePoints<'a> {
    inner: Inner<'a>,
}

impl<'a> CodePoints<'a> {
    pub(crate) fn compact(text: &'a str) -> Self {
        Self {
            inner: Inner::Compact(text.chars()),
        }
    }

    pub(crate) fn wide(code_points: &'a [u32]) -> Self {
        Self {
            inner: Inner::Wide(code_points.iter()),
        }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match &mut self.inner {
            Inner::Compact(chars) => chars.next().map(u32::from),
            Inner::Wide(iter) => iter.next().copied(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Compact(chars) => chars.size_hint(),
            Inner::Wide(iter) => iter.size_hint(),
        }
    }
}

impl DoubleEndedIterator for CodePoints<'_> {
    fn next_back(&mut self) -> Option<u32> {
        match &mut self.inner {
            Inner::Compact(chars) => chars.next_back().map(u32::from),
            Inner::Wide(iter) => iter.next_back().copied(),
        }
    }
}

impl std::iter::FusedIterator for CodePoints<'_> {}
