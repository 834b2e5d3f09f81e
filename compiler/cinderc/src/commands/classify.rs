//! `cinder classify`: show how single words are tokenized.

use std::io::Write;

use cinder_lexer::{tokenize, SourceBuffer, TokenKind};

use crate::error::CommandError;

fn category(kind: TokenKind) -> &'static str {
    if kind == TokenKind::Ident {
        "identifier"
    } else if kind.is_keyword() {
        "keyword"
    } else if kind.is_operator() {
        "operator"
    } else if kind.is_punctuator() {
        "punctuator"
    } else {
        "literal"
    }
}

/// Print the token kind each word scans to, one line per word.
///
/// A word that is not exactly one token is reported as such rather than
/// failing the command.
pub fn classify_words(words: &[String], out: &mut impl Write) -> Result<(), CommandError> {
    for word in words {
        let source = SourceBuffer::new(word);
        match tokenize(&source).map(|stream| stream.into_vec()).as_deref() {
            Ok([token, eof]) if eof.is_eof() => {
                writeln!(out, "{word}: {:?} ({})", token.kind, category(token.kind))?;
            }
            Ok(_) => writeln!(out, "{word}: not a single token")?,
            Err(error) => writeln!(out, "{word}: {}", error.kind)?,
        }
    }
    out.flush()?;
    Ok(())
}
