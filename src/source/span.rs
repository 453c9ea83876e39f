use std::ops::Range;

/// Type used to index a source string, assumes a single input does not exceed 4GB
pub type SourceIndex = u32;

/// Contiguous span of text referenced by start and end byte position in a source string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    start: SourceIndex,
    end: SourceIndex,
}

impl SourceSpan {
    /// Create a new source span from inclusive lower bound and exclusive upper bound
    pub const fn new(start: SourceIndex, end: SourceIndex) -> Self {
        debug_assert!(start <= end);

        Self {
            start,
            end,
        }
    }

    /// Create an empty span located at the given position
    pub const fn point(at: SourceIndex) -> Self {
        Self::new(at, at)
    }

    pub const fn start(&self) -> SourceIndex {
        self.start
    }

    pub const fn end(&self) -> SourceIndex {
        self.end
    }

    /// Get the byte range of this span, suitable for slicing the source text
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<SourceSpan> for Range<usize> {
    fn from(span: SourceSpan) -> Self {
        span.range()
    }
}
