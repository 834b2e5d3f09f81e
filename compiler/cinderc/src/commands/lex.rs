//! `cinder lex`: tokenize files and print their token streams.
//!
//! Files are lexed in parallel against the shared transition table. Output
//! is buffered per file and written in argument order, so the listing does
//! not depend on scheduling.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use cinder_lexer::{tokenize, tokenize_partial, ScanError, SourceBuffer, Token};
use rayon::prelude::*;

use super::read_source;
use crate::diagnostic::ScanDiagnostic;
use crate::error::CommandError;
use crate::options::LexOptions;

/// Buffered result of lexing one file.
struct FileOutput {
    stdout: String,
    stderr: String,
    failed: bool,
}

/// Lex every file in `options`, writing listings to `out` and diagnostics
/// to `err`.
///
/// Returns [`CommandError::LexFailed`] if any file could not be read or
/// failed to scan; the other files are still listed.
pub fn lex_files(
    options: &LexOptions,
    use_colors: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CommandError> {
    let outputs: Vec<FileOutput> = options
        .paths
        .par_iter()
        .map(|path| lex_one(path, options, use_colors))
        .collect();

    let mut failed = 0;
    for output in &outputs {
        out.write_all(output.stdout.as_bytes())?;
        err.write_all(output.stderr.as_bytes())?;
        failed += usize::from(output.failed);
    }
    out.flush()?;
    err.flush()?;

    tracing::debug!(files = outputs.len(), failed, "lex finished");
    if failed > 0 {
        return Err(CommandError::LexFailed {
            count: failed,
            total: outputs.len(),
        });
    }
    Ok(())
}

fn lex_one(path: &Path, options: &LexOptions, use_colors: bool) -> FileOutput {
    let _span = tracing::debug_span!("lex_file", path = %path.display()).entered();

    let source = match read_source(path) {
        Ok(source) => source,
        Err(error) => {
            return FileOutput {
                stdout: String::new(),
                stderr: format!("error: {error}\n"),
                failed: true,
            }
        }
    };

    let (tokens, error) = if options.partial {
        let scan = tokenize_partial(&source);
        (scan.tokens, scan.error)
    } else {
        match tokenize(&source) {
            Ok(stream) => (stream.into_vec(), None),
            Err(error) => (Vec::new(), Some(error)),
        }
    };

    let mut stdout = String::new();
    if error.is_none() || options.partial {
        render_listing(&mut stdout, path, &source, &tokens, options.quiet);
    }
    let stderr = error.as_ref().map_or_else(String::new, |error| {
        render_error(path, &source, error, use_colors)
    });

    FileOutput {
        stdout,
        stderr,
        failed: error.is_some(),
    }
}

fn render_listing(
    out: &mut String,
    path: &Path,
    source: &SourceBuffer,
    tokens: &[Token],
    quiet: bool,
) {
    let _ = writeln!(
        out,
        "Tokens for '{}' ({} tokens){}",
        path.display(),
        tokens.len(),
        if quiet { "" } else { ":" }
    );
    if quiet {
        return;
    }
    for token in tokens {
        let _ = write!(
            out,
            "  {:?} @ {}:{}",
            token.kind,
            token.line_number(),
            token.column_number()
        );
        let text = source.slice(token.span);
        if !text.is_empty() {
            out.push(' ');
            push_printable(out, text);
        }
        out.push('\n');
    }
}

/// Append token text on one line, escaping control characters.
fn push_printable(out: &mut String, text: &[u8]) {
    for c in String::from_utf8_lossy(text).chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
}

fn render_error(path: &Path, source: &SourceBuffer, error: &ScanError, use_colors: bool) -> String {
    ScanDiagnostic::new(path, source, error).render(use_colors)
}
