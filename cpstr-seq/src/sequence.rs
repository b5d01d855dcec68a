/// An ordered, finite sequence of code points.
///
/// Every call to [`code_points`](CodePointSequence::code_points) must start a
/// fresh traversal, independent of any other traversal of the same sequence,
/// and must yield exactly [`len`](CodePointSequence::len) values.
pub trait CodePointSequence {
    type CodePoints<'a>: Iterator<Item = u32>
    where
        Self: 'a;

    /// The number of code points in the sequence.
    fn len(&self) -> usize;

    /// Check whether the sequence is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the code points, in order.
    fn code_points(&self) -> Self::CodePoints<'_>;
}

impl CodePointSequence for [u32] {
    type CodePoints<'a> = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn len(&self) -> usize {
        <[u32]>::len(self)
    }

    fn code_points(&self) -> Self::CodePoints<'_> {
        self.iter().copied()
    }
}

impl CodePointSequence for Vec<u32> {
    type CodePoints<'a> = std::iter::Copied<std::slice::Iter<'a, u32>>;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn code_points(&self) -> Self::CodePoints<'_> {
        self.iter().copied()
    }
}

impl CodePointSequence for [char] {
    type CodePoints<'a> = std::iter::Map<std::slice::Iter<'a, char>, fn(&char) -> u32>;

    fn len(&self) -> usize {
        <[char]>::len(self)
    }

    fn code_points(&self) -> Self::CodePoints<'_> {
        self.iter().map(char_code_point as fn(&char) -> u32)
    }
}

// Length of a str counts characters, so it is linear in the byte length.
impl CodePointSequence for str {
    type CodePoints<'a> = std::iter::Map<std::str::Chars<'a>, fn(char) -> u32>;

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn code_points(&self) -> Self::CodePoints<'_> {
        self.chars().map(u32::from as fn(char) -> u32)
    }
}

impl CodePointSequence for String {
    type CodePoints<'a> = std::iter::Map<std::str::Chars<'a>, fn(char) -> u32>;

    fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }

    fn code_points(&self) -> Self::CodePoints<'_> {
        self.as_str().code_points()
    }
}

fn char_code_point(c: &char) -> u32 {
    u32::from(*c)
}
