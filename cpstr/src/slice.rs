use crate::error;

/// A slice object: optional start, stop and step, as written in `s[a:b:c]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Slice {
    pub start: Option<i64>,
    pub stop: Option<i64>,
    pub step: Option<i64>,
}

/// Slice bounds resolved against the length of a particular sequence.
///
/// Every position produced by [`Indices::positions`] is in range for that
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indices {
    pub start: i64,
    pub stop: i64,
    pub step: i64,
    pub slice_length: usize,
}

impl Slice {
    pub fn new(start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Self {
        Slice { start, stop, step }
    }

    /// Resolve the slice against a sequence of length `len`.
    ///
    /// Negative bounds count from the end; out of range bounds are clamped.
    /// Absent bounds select from the start or the end, depending on the
    /// direction of the step.
    pub fn indices(&self, len: usize) -> error::Result<Indices> {
        let len = len as i64;
        let step = match self.step {
            None => 1,
            Some(0) => return Err(error::Error::ZeroSliceStep),
            // so that -step cannot overflow
            Some(step) => step.max(-i64::MAX),
        };
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: i64| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };
        let start = match self.start {
            Some(start) => clamp(start),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(stop) => clamp(stop),
            None if step < 0 => lower,
            None => upper,
        };

        let slice_length = if step < 0 {
            if stop < start {
                (start - stop - 1) / -step + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };
        Ok(Indices {
            start,
            stop,
            step,
            slice_length: slice_length as usize,
        })
    }
}

impl Indices {
    /// The positions selected, in order.
    pub fn positions(&self) -> impl Iterator<Item = usize> {
        let Indices { start, step, .. } = *self;
        (0..self.slice_length as i64).map(move |k| (start + k * step) as usize)
    }
}
