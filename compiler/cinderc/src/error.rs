//! Errors surfaced by driver commands.

use std::io;
use std::path::Path;

use cinder_lexer::{ScanError, SourceError};
use thiserror::Error;

/// A command failed. The message is shown to the user as `error: <message>`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("'{path}' cannot be lexed: {source}")]
    Source {
        path: String,
        #[source]
        source: SourceError,
    },

    #[error("'{path}' failed to lex: {error}")]
    Scan { path: String, error: ScanError },

    #[error("{count} of {total} files failed to lex")]
    LexFailed { count: usize, total: usize },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    /// Map an I/O error from reading `path` to a user-facing error.
    #[cold]
    pub fn from_read(path: &Path, error: io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound { path },
            io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            _ => CommandError::Read {
                path,
                source: error,
            },
        }
    }
}
