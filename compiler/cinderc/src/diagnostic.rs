//! Terminal rendering of scan errors.
//!
//! Output follows the familiar compiler layout:
//!
//! ```text
//! error: unterminated literal
//!  --> main.cin:1:5
//!   |
//! 1 | x = "abc
//!   |     ^^^^
//!   = help: add a closing `"`
//! ```

use std::fmt::Write;
use std::path::Path;

use cinder_lexer::{ScanError, ScanErrorKind, SourceBuffer, Span};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when stderr is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// A scan error paired with the source it came from.
pub struct ScanDiagnostic<'a> {
    path: &'a Path,
    source: &'a SourceBuffer,
    error: &'a ScanError,
}

impl<'a> ScanDiagnostic<'a> {
    pub fn new(path: &'a Path, source: &'a SourceBuffer, error: &'a ScanError) -> Self {
        ScanDiagnostic {
            path,
            source,
            error,
        }
    }

    /// Byte range to underline: the failing byte, or the unterminated
    /// construct from its opening byte.
    fn primary(&self) -> Span {
        let (start, end) = self.error.failing_range(self.source.len());
        Span::between(start, end)
    }

    /// 1-based `(line, column)` of the primary location.
    pub fn location(&self) -> (u32, u32) {
        let (line, column) = self.source.line_col(self.primary().start);
        (line + 1, column + 1)
    }

    /// Headline message, without the `error:` prefix.
    pub fn message(&self) -> String {
        match self.error.kind {
            ScanErrorKind::UnrecognizedByte { byte } if byte.is_ascii_graphic() => {
                format!("{} ('{}')", self.error.kind, char::from(byte))
            }
            kind => kind.to_string(),
        }
    }

    /// Render the full diagnostic, ending with a newline.
    pub fn render(&self, use_colors: bool) -> String {
        let paint = |out: &mut String, text: &str, color: &str| {
            if use_colors {
                let _ = write!(out, "{color}{text}{}", colors::RESET);
            } else {
                out.push_str(text);
            }
        };

        let primary = self.primary();
        let (line, column) = self.location();
        let gutter = line.to_string();
        let blank = " ".repeat(gutter.len());

        let line_span = self.source.line_span(primary.start);
        let line_text = String::from_utf8_lossy(self.source.slice(line_span));
        let line_text = line_text.trim_end_matches('\r');

        // Pad with the line's own tabs so the carets line up.
        let prefix = self.source.slice(Span::between(line_span.start, primary.start));
        let pad: String = String::from_utf8_lossy(prefix)
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let underlined = Span::between(primary.start, primary.end().min(line_span.end()));
        let width = String::from_utf8_lossy(self.source.slice(underlined))
            .chars()
            .count()
            .max(1);

        let mut out = String::new();
        paint(&mut out, "error", colors::ERROR);
        paint(&mut out, &format!(": {}", self.message()), colors::BOLD);
        out.push('\n');

        paint(&mut out, &format!("{blank}--> "), colors::SECONDARY);
        let _ = writeln!(out, "{}:{line}:{column}", self.path.display());

        paint(&mut out, &format!("{blank} |"), colors::SECONDARY);
        out.push('\n');

        paint(&mut out, &format!("{gutter} | "), colors::SECONDARY);
        out.push_str(line_text);
        out.push('\n');

        paint(&mut out, &format!("{blank} | "), colors::SECONDARY);
        out.push_str(&pad);
        paint(&mut out, &"^".repeat(width), colors::ERROR);
        out.push('\n');

        paint(&mut out, &format!("{blank} = "), colors::SECONDARY);
        paint(&mut out, "help", colors::HELP);
        let _ = writeln!(out, ": {}", self.error.help());
        out
    }
}
