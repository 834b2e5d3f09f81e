//! Token kinds and the `Token` record.
//!
//! [`TokenKind`] is `#[repr(u8)]` with semantic discriminant ranges so the
//! category checks are a single comparison:
//!
//! | range      | category     |
//! |------------|--------------|
//! | `0..16`    | literals     |
//! | `16..48`   | keywords     |
//! | `48..112`  | operators    |
//! | `112..128` | punctuators  |
//! | `254`      | invalid      |
//! | `255`      | end of input |

use std::fmt;

use crate::span::Span;

/// Kind of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Literals (0-15) ===
    /// `x`, `_tmp`, `foo42`
    Ident = 0,
    /// `1`, `1_000`
    Int = 1,
    /// `0.5`, `1.`, `1.2.3`
    Float = 2,
    /// `'c'`, `'\n'`
    Char = 3,
    /// `"string"`
    String = 4,

    // === Keywords (16-47) ===
    If = 16,
    Else = 17,
    Mut = 18,
    For = 19,
    While = 20,
    Break = 21,
    Continue = 22,
    Comptime = 23,
    Emit = 24,
    Struct = 25,
    Union = 26,
    Enum = 27,
    Return = 28,

    // === Operators (48-111) ===
    Plus = 48,
    Increment = 49,
    Minus = 50,
    Decrement = 51,
    Asterisk = 52,
    Slash = 53,
    BitwiseAnd = 54,
    LogicalAnd = 55,
    BitwiseOr = 56,
    LogicalOr = 57,
    BitwiseNot = 58,
    LogicalNot = 59,
    BitwiseXor = 60,
    Modulo = 61,
    Assign = 62,
    Equal = 63,
    PlusEqual = 64,
    MinusEqual = 65,
    MultEqual = 66,
    DivideEqual = 67,
    ShiftLeftEqual = 68,
    ShiftRightEqual = 69,
    ShiftLeft = 70,
    ShiftRight = 71,
    Lesser = 72,
    Greater = 73,
    LesserEqual = 74,
    GreaterEqual = 75,
    BitwiseAndEqual = 76,
    BitwiseOrEqual = 77,
    NotEqual = 78,
    BitwiseXorEqual = 79,
    ModuloEqual = 80,
    Period = 81,
    Arrow = 82,
    QuestionMark = 83,
    Colon = 84,

    // === Punctuators (112-127) ===
    Comma = 112,
    OpenParen = 113,
    CloseParen = 114,
    OpenBracket = 115,
    CloseBracket = 116,
    OpenBrace = 117,
    CloseBrace = 118,
    Semicolon = 119,

    // === Special ===
    /// Region that made a scan fail. Only appears in partial scans.
    Invalid = 254,
    /// End of input. Always the last token of a stream, with an empty span.
    Eof = 255,
}

impl TokenKind {
    /// Returns `true` for identifier and literal kinds.
    #[inline]
    pub const fn is_literal(self) -> bool {
        (self as u8) < 16
    }

    /// Returns `true` for reserved words.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self as u8, 16..=47)
    }

    /// Returns `true` for single- and multi-character operators.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self as u8, 48..=111)
    }

    /// Returns `true` for punctuators.
    #[inline]
    pub const fn is_punctuator(self) -> bool {
        matches!(self as u8, 112..=127)
    }

    /// Fixed source text for kinds that have exactly one spelling.
    ///
    /// Returns `None` for identifiers, literals, `Invalid` and `Eof`.
    pub const fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Float
            | TokenKind::Char
            | TokenKind::String
            | TokenKind::Invalid
            | TokenKind::Eof => return None,

            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Mut => "mut",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Comptime => "comptime",
            TokenKind::Emit => "emit",
            TokenKind::Struct => "struct",
            TokenKind::Union => "union",
            TokenKind::Enum => "enum",
            TokenKind::Return => "return",

            TokenKind::Plus => "+",
            TokenKind::Increment => "++",
            TokenKind::Minus => "-",
            TokenKind::Decrement => "--",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::BitwiseAnd => "&",
            TokenKind::LogicalAnd => "&&",
            TokenKind::BitwiseOr => "|",
            TokenKind::LogicalOr => "||",
            TokenKind::BitwiseNot => "~",
            TokenKind::LogicalNot => "!",
            TokenKind::BitwiseXor => "^",
            TokenKind::Modulo => "%",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::MultEqual => "*=",
            TokenKind::DivideEqual => "/=",
            TokenKind::ShiftLeftEqual => "<<=",
            TokenKind::ShiftRightEqual => ">>=",
            TokenKind::ShiftLeft => "<<",
            TokenKind::ShiftRight => ">>",
            TokenKind::Lesser => "<",
            TokenKind::Greater => ">",
            TokenKind::LesserEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::BitwiseAndEqual => "&=",
            TokenKind::BitwiseOrEqual => "|=",
            TokenKind::NotEqual => "!=",
            TokenKind::BitwiseXorEqual => "^=",
            TokenKind::ModuloEqual => "%=",
            TokenKind::Period => ".",
            TokenKind::Arrow => "->",
            TokenKind::QuestionMark => "?",
            TokenKind::Colon => ":",

            TokenKind::Comma => ",",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Semicolon => ";",
        };
        Some(text)
    }

    /// Human-readable name for diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Char => "char literal",
            TokenKind::String => "string literal",
            TokenKind::Invalid => "invalid input",
            TokenKind::Eof => "end of file",
            _ => match self.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexical unit.
///
/// `line` and `column` are 0-based; `column` is a byte count from the start
/// of the line. Use [`line_number`](Self::line_number) and
/// [`column_number`](Self::column_number) for 1-based display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32) -> Self {
        Token {
            kind,
            span,
            line,
            column,
        }
    }

    /// Returns the 1-based line number.
    pub fn line_number(&self) -> u32 {
        self.line + 1
    }

    /// Returns the 1-based column number.
    pub fn column_number(&self) -> u32 {
        self.column + 1
    }

    /// Returns `true` for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
