use std::cmp::Ordering;

use crate::sequence::CodePointSequence;

/// Compare two code point sequences for equality.
///
/// Sequences of different length are unequal without any code point being
/// read. Otherwise the sequences are scanned in step and the scan stops at
/// the first difference. This is a little simpler than [`compare`].
pub fn eq<A, B>(a: &A, b: &B) -> bool
where
    A: CodePointSequence + ?Sized,
    B: CodePointSequence + ?Sized,
{
    // lengths must be equal
    if a.len() != b.len() {
        return false;
    }
    // scan the code points in a and b
    let mut b_code_points = b.code_points();
    for c in a.code_points() {
        if b_code_points.next() != Some(c) {
            return false;
        }
    }
    true
}

/// Compare two code point sequences lexicographically by code point value.
///
/// A sequence that is a proper prefix of the other orders first.
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: CodePointSequence + ?Sized,
    B: CodePointSequence + ?Sized,
{
    let mut b_code_points = b.code_points();
    for c in a.code_points() {
        match b_code_points.next() {
            Some(d) => {
                // if c != d, then we've found an answer
                let ordering = c.cmp(&d);
                if !ordering.is_eq() {
                    return ordering;
                }
            }
            // a has not run out, but b has
            None => return Ordering::Greater,
        }
    }
    // the sequences matched over the length of a
    if b_code_points.next().is_some() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}
