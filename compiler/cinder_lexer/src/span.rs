//! Source byte spans.
//!
//! A span is a non-owning `(start, len)` reference into a
//! [`SourceBuffer`](crate::SourceBuffer). It never borrows the buffer, so
//! tokens stay `Copy` and can outlive the scanner that produced them; the
//! text is recovered with [`SourceBuffer::slice`](crate::SourceBuffer::slice).

use std::fmt;
use std::ops::Range;

/// Byte range in a source buffer.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from buffer start
/// - len: u32 - number of bytes covered
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub len: u32,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, len: u32) -> Self {
        Span { start, len }
    }

    /// Create a span from a half-open `[start, end)` offset pair.
    #[inline]
    pub const fn between(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span end precedes start");
        Span {
            start,
            len: end - start,
        }
    }

    /// Empty span positioned at `offset`.
    #[inline]
    pub const fn empty_at(offset: u32) -> Self {
        Span {
            start: offset,
            len: 0,
        }
    }

    /// Exclusive end offset.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// The span as a `usize` range for slicing.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end() as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}
