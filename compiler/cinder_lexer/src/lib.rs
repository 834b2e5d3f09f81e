//! Table-driven lexer for the Cinder language.
//!
//! Source bytes are scanned by a deterministic finite automaton whose
//! transitions live in a precomputed `state x byte` table. The scanner uses
//! maximal munch with checkpoint rollback, so `<<=` is one token and `1.x`
//! splits into `1.` and `x`.
//!
//! # Pipeline
//!
//! ```text
//! SourceBuffer ──► Scanner (TransitionTable) ──► TokenStream
//!                        │
//!                        └──► classify (keywords)
//! ```
//!
//! # Example
//!
//! ```
//! use cinder_lexer::{tokenize, SourceBuffer, TokenKind};
//!
//! let source = SourceBuffer::new("if x <<= 2");
//! let tokens = tokenize(&source).map(|s| s.kinds());
//! assert_eq!(
//!     tokens,
//!     Ok(vec![
//!         TokenKind::If,
//!         TokenKind::Ident,
//!         TokenKind::ShiftLeftEqual,
//!         TokenKind::Int,
//!         TokenKind::Eof,
//!     ])
//! );
//! ```
//!
//! Any number of threads may scan concurrently: the shared table is
//! immutable after construction and each scan owns its own state.

pub mod classify;
mod cursor;
mod error;
mod scanner;
mod source_buffer;
mod span;
mod state;
mod table;
mod token;
mod token_stream;

pub use classify::{classify, keyword, kind_of_state};
pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind, SourceError};
pub use scanner::{tokenize, tokenize_partial, tokenize_with, PartialScan, Scanner};
pub use source_buffer::SourceBuffer;
pub use span::Span;
pub use state::State;
pub use table::{TableBuilder, TableConflict, TableError, TransitionTable};
pub use token::{Token, TokenKind};
pub use token_stream::TokenStream;
