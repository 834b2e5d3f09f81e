//! Token classification.
//!
//! Two lookups:
//! 1. **State to kind**: every accepting DFA state maps to exactly one
//!    [`TokenKind`]; non-accepting states map to `None`.
//! 2. **Keyword resolution**: identifier-shaped text is reclassified into a
//!    keyword kind by exact match against the reserved-word set.
//!
//! # Reserved Words
//!
//! Keywords are 2-8 bytes long. The lookup uses the length as a first-pass
//! filter, then compares against the keywords of that length only. Matching
//! is exact and case-sensitive: `if` is a keyword, `ifx` and `If` are not.

use crate::state::State;
use crate::token::TokenKind;

/// Map a DFA state to the token kind it accepts.
///
/// Returns `None` for neutral, comment, and open-literal states.
pub const fn kind_of_state(state: State) -> Option<TokenKind> {
    let kind = match state {
        State::Start
        | State::Whitespace
        | State::Str
        | State::StrEscape
        | State::Char
        | State::CharEscape
        | State::LineComment
        | State::BlockComment
        | State::BlockStar => return None,

        State::Ident => TokenKind::Ident,
        State::Int => TokenKind::Int,
        State::Float => TokenKind::Float,
        State::StrEnd => TokenKind::String,
        State::CharEnd => TokenKind::Char,

        State::Plus => TokenKind::Plus,
        State::Increment => TokenKind::Increment,
        State::PlusEqual => TokenKind::PlusEqual,
        State::Minus => TokenKind::Minus,
        State::Decrement => TokenKind::Decrement,
        State::MinusEqual => TokenKind::MinusEqual,
        State::Arrow => TokenKind::Arrow,
        State::Asterisk => TokenKind::Asterisk,
        State::MultEqual => TokenKind::MultEqual,
        State::Slash => TokenKind::Slash,
        State::DivideEqual => TokenKind::DivideEqual,
        State::Ampersand => TokenKind::BitwiseAnd,
        State::LogicalAnd => TokenKind::LogicalAnd,
        State::AmpersandEqual => TokenKind::BitwiseAndEqual,
        State::Pipe => TokenKind::BitwiseOr,
        State::LogicalOr => TokenKind::LogicalOr,
        State::PipeEqual => TokenKind::BitwiseOrEqual,
        State::Tilde => TokenKind::BitwiseNot,
        State::Bang => TokenKind::LogicalNot,
        State::NotEqual => TokenKind::NotEqual,
        State::Caret => TokenKind::BitwiseXor,
        State::CaretEqual => TokenKind::BitwiseXorEqual,
        State::Percent => TokenKind::Modulo,
        State::PercentEqual => TokenKind::ModuloEqual,
        State::Assign => TokenKind::Assign,
        State::Equal => TokenKind::Equal,
        State::Lesser => TokenKind::Lesser,
        State::LesserEqual => TokenKind::LesserEqual,
        State::ShiftLeft => TokenKind::ShiftLeft,
        State::ShiftLeftEqual => TokenKind::ShiftLeftEqual,
        State::Greater => TokenKind::Greater,
        State::GreaterEqual => TokenKind::GreaterEqual,
        State::ShiftRight => TokenKind::ShiftRight,
        State::ShiftRightEqual => TokenKind::ShiftRightEqual,
        State::Period => TokenKind::Period,
        State::Question => TokenKind::QuestionMark,
        State::Colon => TokenKind::Colon,

        State::Comma => TokenKind::Comma,
        State::OpenParen => TokenKind::OpenParen,
        State::CloseParen => TokenKind::CloseParen,
        State::OpenBracket => TokenKind::OpenBracket,
        State::CloseBracket => TokenKind::CloseBracket,
        State::OpenBrace => TokenKind::OpenBrace,
        State::CloseBrace => TokenKind::CloseBrace,
        State::Semicolon => TokenKind::Semicolon,
    };
    Some(kind)
}

/// Look up a reserved word by text.
///
/// Returns the keyword kind if `text` is reserved, `None` otherwise.
#[inline]
pub fn keyword(text: &[u8]) -> Option<TokenKind> {
    // Guard: all keywords are 2-8 bytes
    if !(2..=8).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            b"if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            b"mut" => Some(TokenKind::Mut),
            b"for" => Some(TokenKind::For),
            _ => None,
        },
        4 => match text {
            b"else" => Some(TokenKind::Else),
            b"emit" => Some(TokenKind::Emit),
            b"enum" => Some(TokenKind::Enum),
            _ => None,
        },
        5 => match text {
            b"while" => Some(TokenKind::While),
            b"break" => Some(TokenKind::Break),
            b"union" => Some(TokenKind::Union),
            _ => None,
        },
        6 => match text {
            b"return" => Some(TokenKind::Return),
            b"struct" => Some(TokenKind::Struct),
            _ => None,
        },
        8 => match text {
            b"comptime" => Some(TokenKind::Comptime),
            b"continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}

/// Classify identifier-shaped text as a keyword or a plain identifier.
#[inline]
pub fn classify(text: &[u8]) -> TokenKind {
    keyword(text).unwrap_or(TokenKind::Ident)
}
