/// A byte range `[start, end)` into the markdown buffer.
///
/// Every emitted block remembers the span of the source lines it was built
/// from, so a progressive renderer can tell which blocks sit inside text that
/// is still growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
    }

    #[test]
    fn cover_spans_both_ranges() {
        let a = Span::new(0, 5);
        let b = Span::new(10, 12);
        assert_eq!(a.cover(b), Span::new(0, 12));
        assert_eq!(b.cover(a), Span::new(0, 12));
    }
}
