//! DFA states of the scanner automaton.
//!
//! The enumeration is closed and `#[repr(u8)]`, so a state doubles as a row
//! index into the [`TransitionTable`](crate::TransitionTable) and
//! `Option<State>` stays one byte wide.
//!
//! # Partitions
//!
//! - **Neutral**: [`Start`](State::Start), [`Whitespace`](State::Whitespace).
//!   A transition out of a neutral state begins a new token.
//! - **Open literal**: string/char bodies and their escape sub-states.
//!   Ending the input here is an unterminated literal.
//! - **Comment**: line and block comment bodies. Consumed, never tokenized.
//! - **Accepting**: every state that [`kind_of_state`](crate::classify::kind_of_state)
//!   maps to a token kind.

/// A state of the scanner automaton.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    // === Neutral ===
    Start,
    Whitespace,

    // === Literals ===
    Ident,
    Int,
    Float,
    Str,
    StrEscape,
    StrEnd,
    Char,
    CharEscape,
    CharEnd,

    // === Comments ===
    LineComment,
    BlockComment,
    BlockStar,

    // === Operators ===
    Plus,
    Increment,
    PlusEqual,
    Minus,
    Decrement,
    MinusEqual,
    Arrow,
    Asterisk,
    MultEqual,
    Slash,
    DivideEqual,
    Ampersand,
    LogicalAnd,
    AmpersandEqual,
    Pipe,
    LogicalOr,
    PipeEqual,
    Tilde,
    Bang,
    NotEqual,
    Caret,
    CaretEqual,
    Percent,
    PercentEqual,
    Assign,
    Equal,
    Lesser,
    LesserEqual,
    ShiftLeft,
    ShiftLeftEqual,
    Greater,
    GreaterEqual,
    ShiftRight,
    ShiftRightEqual,
    Period,
    Question,
    Colon,

    // === Punctuators ===
    Comma,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Semicolon,
}

impl State {
    /// Number of states; the row count of the transition table.
    pub const COUNT: usize = State::Semicolon as usize + 1;

    /// Every state, in discriminant order.
    pub const ALL: [State; State::COUNT] = [
        State::Start,
        State::Whitespace,
        State::Ident,
        State::Int,
        State::Float,
        State::Str,
        State::StrEscape,
        State::StrEnd,
        State::Char,
        State::CharEscape,
        State::CharEnd,
        State::LineComment,
        State::BlockComment,
        State::BlockStar,
        State::Plus,
        State::Increment,
        State::PlusEqual,
        State::Minus,
        State::Decrement,
        State::MinusEqual,
        State::Arrow,
        State::Asterisk,
        State::MultEqual,
        State::Slash,
        State::DivideEqual,
        State::Ampersand,
        State::LogicalAnd,
        State::AmpersandEqual,
        State::Pipe,
        State::LogicalOr,
        State::PipeEqual,
        State::Tilde,
        State::Bang,
        State::NotEqual,
        State::Caret,
        State::CaretEqual,
        State::Percent,
        State::PercentEqual,
        State::Assign,
        State::Equal,
        State::Lesser,
        State::LesserEqual,
        State::ShiftLeft,
        State::ShiftLeftEqual,
        State::Greater,
        State::GreaterEqual,
        State::ShiftRight,
        State::ShiftRightEqual,
        State::Period,
        State::Question,
        State::Colon,
        State::Comma,
        State::OpenParen,
        State::CloseParen,
        State::OpenBracket,
        State::CloseBracket,
        State::OpenBrace,
        State::CloseBrace,
        State::Semicolon,
    ];

    /// The two states a token may start from.
    pub const NEUTRAL: [State; 2] = [State::Start, State::Whitespace];

    /// Row index in the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for [`Start`](State::Start) and
    /// [`Whitespace`](State::Whitespace).
    #[inline]
    pub const fn is_neutral(self) -> bool {
        matches!(self, State::Start | State::Whitespace)
    }

    /// Returns `true` inside a comment body.
    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            State::LineComment | State::BlockComment | State::BlockStar
        )
    }

    /// Returns `true` inside a string or char literal that has not seen its
    /// closing quote.
    #[inline]
    pub const fn is_open_literal(self) -> bool {
        matches!(
            self,
            State::Str | State::StrEscape | State::Char | State::CharEscape
        )
    }

    /// Returns `true` inside a block comment that has not seen `*/`.
    #[inline]
    pub const fn is_open_block_comment(self) -> bool {
        matches!(self, State::BlockComment | State::BlockStar)
    }

    /// Returns `true` if reaching this state completes a token.
    #[inline]
    pub const fn is_accepting(self) -> bool {
        crate::classify::kind_of_state(self).is_some()
    }
}
