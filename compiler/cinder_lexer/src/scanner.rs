//! Table-driven maximal-munch scanner.
//!
//! The scanner walks the source through the [`TransitionTable`], one byte per
//! step, and never commits to a token while the automaton can still make
//! progress. Every time it reaches an accepting state it saves a
//! [`Checkpoint`]: the state plus a copy of the cursor just past the accepted
//! byte. When a byte has no transition, the longest accepted prefix is
//! emitted and the cursor is restored from the checkpoint, so the bytes after
//! it are scanned again as the start of the next token.
//!
//! # Cost
//!
//! A byte is revisited only when it lies between a checkpoint and the byte
//! that broke the run. Operator chains accept at every step, so with the
//! Cinder rule set the rewind distance is bounded by a small constant and the
//! scan is O(n).
//!
//! # Positions
//!
//! Line and column come from the [`Cursor`], which counts every newline it
//! consumes. Restoring a checkpoint restores the counters with the offset,
//! so rescanned newlines are never counted twice.

use std::iter::FusedIterator;

use crate::classify::{classify, kind_of_state};
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::source_buffer::SourceBuffer;
use crate::span::Span;
use crate::state::State;
use crate::table::TransitionTable;
use crate::token::{Token, TokenKind};
use crate::token_stream::TokenStream;

/// Last accepting point of the current run.
#[derive(Clone, Copy, Debug)]
struct Checkpoint<'s> {
    state: State,
    kind: TokenKind,
    /// Cursor just past the last accepted byte.
    cursor: Cursor<'s>,
}

/// Lazy scanner producing one token per call.
///
/// As an [`Iterator`] it yields every token including the final
/// [`TokenKind::Eof`], then ends. It also ends right after yielding an error.
pub struct Scanner<'t, 's> {
    table: &'t TransitionTable,
    source: &'s SourceBuffer,
    cursor: Cursor<'s>,
    finished: bool,
}

impl<'t, 's> Scanner<'t, 's> {
    /// Create a scanner at the start of `source`.
    pub fn new(table: &'t TransitionTable, source: &'s SourceBuffer) -> Self {
        Self {
            table,
            source,
            cursor: source.cursor(),
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns an `Eof` token with an empty span at the end of the source.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        let mut state = State::Start;
        let mut token_start = self.cursor;
        let mut checkpoint: Option<Checkpoint<'s>> = None;

        while let Some(byte) = self.cursor.current() {
            let Some(next) = self.table.next(state, byte) else {
                let Some(checkpoint) = checkpoint else {
                    let start = if state.is_neutral() {
                        self.cursor.pos()
                    } else {
                        token_start.pos()
                    };
                    return Err(ScanError::unrecognized_byte(
                        byte,
                        self.cursor.pos(),
                        start,
                        state,
                    ));
                };
                return Ok(self.commit(token_start, checkpoint));
            };

            if state.is_neutral() && !next.is_neutral() {
                token_start = self.cursor;
            }
            if next.is_comment() {
                // The `/` that opened the comment is trivia, not a token.
                checkpoint = None;
            }

            self.cursor.advance();
            state = next;

            if let Some(kind) = kind_of_state(next) {
                checkpoint = Some(Checkpoint {
                    state: next,
                    kind,
                    cursor: self.cursor,
                });
            }
        }

        if let Some(error) =
            ScanError::at_end_of_input(state, self.cursor.pos(), token_start.pos())
        {
            return Err(error);
        }
        if let Some(checkpoint) = checkpoint {
            return Ok(self.commit(token_start, checkpoint));
        }

        Ok(Token::new(
            TokenKind::Eof,
            Span::empty_at(self.cursor.pos()),
            self.cursor.line(),
            self.cursor.column(),
        ))
    }

    /// Emit the token ending at `checkpoint` and rewind to it.
    fn commit(&mut self, start: Cursor<'s>, checkpoint: Checkpoint<'s>) -> Token {
        if checkpoint.cursor.pos() < self.cursor.pos() {
            tracing::trace!(
                from = self.cursor.pos(),
                to = checkpoint.cursor.pos(),
                state = ?checkpoint.state,
                "rewind to checkpoint"
            );
        }
        self.cursor = checkpoint.cursor;

        let span = Span::between(start.pos(), checkpoint.cursor.pos());
        let kind = match checkpoint.kind {
            TokenKind::Ident => classify(self.source.slice(span)),
            kind => kind,
        };
        tracing::trace!(?kind, start = span.start, len = span.len, "token");
        Token::new(kind, span, start.line(), start.column())
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}

impl FusedIterator for Scanner<'_, '_> {}

/// Tokenize `source` with the process-wide transition table.
pub fn tokenize(source: &SourceBuffer) -> Result<TokenStream, ScanError> {
    tokenize_with(TransitionTable::shared(), source)
}

/// Tokenize `source` with an explicit transition table.
pub fn tokenize_with(
    table: &TransitionTable,
    source: &SourceBuffer,
) -> Result<TokenStream, ScanError> {
    let mut stream = TokenStream::with_capacity_for(source.len());
    let mut scanner = Scanner::new(table, source);
    loop {
        let token = match scanner.next_token() {
            Ok(token) => token,
            Err(error) => {
                tracing::debug!(%error, state = ?error.state, "scan failed");
                return Err(error);
            }
        };
        stream.push(token);
        if token.is_eof() {
            break;
        }
    }
    tracing::debug!(bytes = source.len(), tokens = stream.len(), "scan complete");
    Ok(stream)
}

/// Result of a scan that keeps the tokens produced before a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialScan {
    /// Tokens in order. Ends with `Eof` on success, or with an `Invalid`
    /// token covering the failing region on error.
    pub tokens: Vec<Token>,
    /// The fatal error, if the scan failed.
    pub error: Option<ScanError>,
}

impl PartialScan {
    /// Returns `true` if the scan reached end of input.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Tokenize `source`, keeping the tokens produced before a fatal error.
///
/// Meant for diagnostics: the tokens before the failure are exactly those a
/// successful scan of the same prefix would produce.
pub fn tokenize_partial(source: &SourceBuffer) -> PartialScan {
    let mut tokens = Vec::new();
    for result in Scanner::new(TransitionTable::shared(), source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(error) => {
                let (start, end) = error.failing_range(source.len());
                let (line, column) = source.line_col(start);
                tokens.push(Token::new(
                    TokenKind::Invalid,
                    Span::between(start, end),
                    line,
                    column,
                ));
                return PartialScan {
                    tokens,
                    error: Some(error),
                };
            }
        }
    }
    PartialScan {
        tokens,
        error: None,
    }
}

#[cfg(test)]
mod tests;
