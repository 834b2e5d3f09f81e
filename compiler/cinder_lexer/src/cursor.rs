//! Position-tracking cursor over a source buffer.
//!
//! The cursor advances byte-by-byte and keeps the line count and the offset
//! of the current line's first byte up to date on every newline it consumes.
//! It is [`Copy`], so a saved cursor is a complete snapshot of the scan
//! position: restoring it rewinds the offset *and* the line counters, which
//! is what the scanner's checkpoint rollback relies on.

/// Cursor over the bytes of a [`SourceBuffer`](crate::SourceBuffer).
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `line_start <= pos <= buf.len()`, and `line` equals the number of `\n`
/// bytes in `buf[..pos]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// 0-based line of `pos`.
    line: u32,
    /// Offset of the first byte of the current line.
    line_start: u32,
}

/// Size assertion: Cursor should be <= 32 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), 3 x u32 = 12, + 4 padding => 32 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 32);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf.len()` must fit in `u32`. This is guaranteed by
    /// `SourceBuffer` construction.
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        debug_assert!(u32::try_from(buf.len()).is_ok(), "buffer exceeds u32");
        Self {
            buf,
            pos: 0,
            line: 0,
            line_start: 0,
        }
    }

    /// Returns the byte at the current position, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.buf.get(self.pos as usize).copied()
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos as usize >= self.buf.len()
    }

    /// Consume the current byte.
    ///
    /// Consuming `\n` starts a new line. At end of input this is a no-op.
    #[inline]
    pub fn advance(&mut self) {
        match self.current() {
            Some(b'\n') => {
                self.pos += 1;
                self.line += 1;
                self.line_start = self.pos;
            }
            Some(_) => self.pos += 1,
            None => {}
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// 0-based line of the current position.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 0-based byte column of the current position.
    #[inline]
    pub fn column(&self) -> u32 {
        self.pos - self.line_start
    }

    /// Length of the source in bytes.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Cursor::new requires the buffer to fit in u32"
    )]
    pub fn source_len(&self) -> u32 {
        self.buf.len() as u32
    }
}
