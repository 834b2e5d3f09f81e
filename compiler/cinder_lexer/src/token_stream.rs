//! Ordered scanner output.
//!
//! A [`TokenStream`] is built fresh for every scan, appended to
//! monotonically, and always ends with exactly one [`TokenKind::Eof`] token
//! once the scan succeeds.

use std::ops::Index;

use crate::source_buffer::SourceBuffer;
use crate::token::{Token, TokenKind};

/// Expected source bytes per token, used to pre-size the stream.
///
/// Pre-sizing is an optimization only: the stream grows geometrically.
const BYTES_PER_TOKEN_ESTIMATE: usize = 16;

/// EOF-terminated sequence of tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Create an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream sized for a source of `source_len` bytes.
    pub fn with_capacity_for(source_len: u32) -> Self {
        let estimate = (source_len as usize / BYTES_PER_TOKEN_ESTIMATE).max(1);
        Self {
            tokens: Vec::with_capacity(estimate),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        debug_assert!(
            self.tokens.last().map_or(true, |t| !t.is_eof()),
            "no tokens may follow Eof"
        );
        self.tokens.push(token);
    }

    /// Number of tokens, including the EOF token.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the tokens as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// The terminating EOF token, if the stream is complete.
    pub fn eof(&self) -> Option<&Token> {
        self.tokens.last().filter(|t| t.is_eof())
    }

    /// Token kinds in order.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    /// Source text of each token in order.
    pub fn texts<'s>(&self, source: &'s SourceBuffer) -> Vec<&'s [u8]> {
        self.tokens.iter().map(|t| source.slice(t.span)).collect()
    }

    /// Consume the stream, returning the underlying vector.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
