//! Error types for source construction and scanning.
//!
//! Scanning has exactly three failure modes, all fatal for the scan that
//! hit them. Every error carries WHERE (`offset`, plus `token_start` for the
//! construct that was being scanned) and the automaton state it stopped in,
//! so the driver can render a precise diagnostic.

use thiserror::Error;

use crate::state::State;

/// What kind of scan error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScanErrorKind {
    /// A string or character literal was not closed before end of input.
    #[error("unterminated literal")]
    UnterminatedLiteral,
    /// A block comment was not closed before end of input.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// The byte has no transition from the current state and no accepting
    /// checkpoint exists to fall back to.
    #[error("unrecognized byte 0x{byte:02X}")]
    UnrecognizedByte { byte: u8 },
}

/// A fatal scan error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at byte {offset}")]
pub struct ScanError {
    /// WHAT went wrong.
    pub kind: ScanErrorKind,
    /// Byte offset of the failure: the offending byte, or the buffer length
    /// for unterminated constructs.
    pub offset: u32,
    /// Byte offset where the construct being scanned began.
    pub token_start: u32,
    /// Automaton state at the point of failure.
    pub state: State,
}

impl ScanError {
    /// Create an unrecognized-byte error.
    #[cold]
    pub fn unrecognized_byte(byte: u8, offset: u32, token_start: u32, state: State) -> Self {
        Self {
            kind: ScanErrorKind::UnrecognizedByte { byte },
            offset,
            token_start,
            state,
        }
    }

    /// Create an unterminated literal or comment error, depending on `state`.
    ///
    /// Returns `None` when `state` may legitimately end the input.
    #[cold]
    pub fn at_end_of_input(state: State, offset: u32, token_start: u32) -> Option<Self> {
        let kind = if state.is_open_literal() {
            ScanErrorKind::UnterminatedLiteral
        } else if state.is_open_block_comment() {
            ScanErrorKind::UnterminatedComment
        } else {
            return None;
        };
        Some(Self {
            kind,
            offset,
            token_start,
            state,
        })
    }

    /// Byte range of the construct that failed, clamped to `source_len`.
    ///
    /// For unterminated constructs this runs from the opening byte to the end
    /// of input; for an unrecognized byte it covers that byte alone.
    pub fn failing_range(&self, source_len: u32) -> (u32, u32) {
        match self.kind {
            ScanErrorKind::UnrecognizedByte { .. } => {
                (self.offset, (self.offset + 1).min(source_len))
            }
            ScanErrorKind::UnterminatedLiteral | ScanErrorKind::UnterminatedComment => {
                (self.token_start, source_len)
            }
        }
    }

    /// Actionable hint for the diagnostic renderer.
    pub fn help(&self) -> &'static str {
        match self.kind {
            ScanErrorKind::UnterminatedLiteral => match self.state {
                State::Char | State::CharEscape => "add a closing `'`",
                _ => "add a closing `\"`",
            },
            ScanErrorKind::UnterminatedComment => "add a closing `*/`",
            ScanErrorKind::UnrecognizedByte { .. } => {
                "this byte is not part of the language outside literals and comments"
            }
        }
    }
}

/// Error building a [`SourceBuffer`](crate::SourceBuffer).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SourceError {
    /// Source exceeds the `u32` offset range used by spans.
    #[error("source is {len} bytes, which exceeds the {max} byte limit", max = u32::MAX)]
    TooLarge { len: usize },
}
