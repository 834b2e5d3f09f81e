//! Command handlers for the `cinder` CLI.
//!
//! Each submodule implements one command. Handlers write to the writers they
//! are given and return a [`CommandError`] instead of exiting, so the binary
//! decides the exit code. Shared utilities like `read_source` live here in
//! the module root.

use std::path::Path;

use cinder_lexer::SourceBuffer;

use crate::error::CommandError;

mod bench;
mod classify;
mod lex;

pub use bench::{bench_file, BenchReport};
pub use classify::classify_words;
pub use lex::lex_files;

/// Read a source file as raw bytes.
///
/// Sources need not be UTF-8: only literal and comment bodies may contain
/// non-ASCII bytes, and the lexer reports any other byte itself.
pub fn read_source(path: &Path) -> Result<SourceBuffer, CommandError> {
    let bytes = std::fs::read(path).map_err(|e| CommandError::from_read(path, e))?;
    SourceBuffer::from_bytes(bytes).map_err(|source| CommandError::Source {
        path: path.display().to_string(),
        source,
    })
}
