//! Immutable source buffer.
//!
//! The buffer owns the source bytes for the duration of a scan and is never
//! mutated or reallocated afterwards. Bytes are not required to be UTF-8:
//! bytes >= 128 are opaque payload that only literal and comment bodies
//! accept.
//!
//! # Size Limit
//!
//! Spans use `u32` offsets, so a buffer holds at most `u32::MAX` bytes.
//! [`SourceBuffer::from_bytes`] reports larger inputs as
//! [`SourceError::TooLarge`].

use crate::cursor::Cursor;
use crate::error::SourceError;
use crate::span::Span;

/// Owned, immutable source bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    bytes: Box<[u8]>,
}

impl SourceBuffer {
    /// Create a buffer from source text.
    ///
    /// # Panics
    /// Panics if `source` is longer than `u32::MAX` bytes.
    /// Use [`from_bytes`](Self::from_bytes) when handling user input.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes().to_vec()).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a buffer from raw bytes read from storage.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SourceError> {
        if u32::try_from(bytes.len()).is_err() {
            return Err(SourceError::TooLarge { len: bytes.len() });
        }
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// Returns the source bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the source in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "construction rejects buffers longer than u32::MAX"
    )]
    pub fn len(&self) -> u32 {
        self.bytes.len() as u32
    }

    /// Returns `true` if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Create a [`Cursor`] positioned at byte 0, line 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes)
    }

    /// Source bytes covered by `span`.
    ///
    /// Returns an empty slice when the span lies outside the buffer.
    pub fn slice(&self, span: Span) -> &[u8] {
        self.bytes.get(span.range()).unwrap_or_default()
    }

    /// 0-based `(line, column)` of a byte offset.
    ///
    /// Linear in `offset`; meant for rendering diagnostics, not for the scan
    /// loop (the scanner tracks positions incrementally).
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let end = (offset as usize).min(self.bytes.len());
        let mut cursor = self.cursor();
        while (cursor.pos() as usize) < end {
            cursor.advance();
        }
        (cursor.line(), cursor.column())
    }

    /// Span of the line containing `offset`, excluding its newline.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the buffer length"
    )]
    pub fn line_span(&self, offset: u32) -> Span {
        let offset = (offset as usize).min(self.bytes.len());
        let start = self.bytes[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let end = self.bytes[offset..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |i| offset + i);
        Span::between(start as u32, end as u32)
    }
}
