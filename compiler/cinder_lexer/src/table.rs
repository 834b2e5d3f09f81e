//! DFA transition table and its builder.
//!
//! The table is a total function `(State, byte) -> Option<State>` over all
//! 256 byte values, stored as one 256-entry row per state. Only the
//! "any byte" loops of literal and comment bodies route bytes >= 128; every
//! other family is installed for ASCII bytes only.
//!
//! # Construction
//!
//! [`TableBuilder`] assigns each `(state, byte)` cell at most once. A second
//! assignment to the same cell is a defect in the rule set, recorded as a
//! [`TableConflict`] and reported by [`TableBuilder::finish`]; it is never
//! resolved by precedence at scan time.
//!
//! # Sharing
//!
//! A built table is immutable. [`TransitionTable::shared`] builds it once per
//! process and hands out `&'static` references that any number of concurrent
//! scans can read without synchronization.

use std::fmt;
use std::sync::OnceLock;

use thiserror::Error;

use crate::state::State;

/// One row of the table: the successor for each byte value.
type Row = [Option<State>; 256];

/// Neutral-state byte -> first operator state.
const OPERATOR_ROOTS: &[(u8, State)] = &[
    (b'+', State::Plus),
    (b'-', State::Minus),
    (b'*', State::Asterisk),
    (b'/', State::Slash),
    (b'&', State::Ampersand),
    (b'|', State::Pipe),
    (b'~', State::Tilde),
    (b'!', State::Bang),
    (b'^', State::Caret),
    (b'%', State::Percent),
    (b'=', State::Assign),
    (b'<', State::Lesser),
    (b'>', State::Greater),
    (b'.', State::Period),
    (b'?', State::Question),
    (b':', State::Colon),
];

/// Operator chains: every state on a chain accepts, so the scanner can stop
/// one byte early when a chain breaks.
const OPERATOR_CONTINUATIONS: &[(State, u8, State)] = &[
    (State::Plus, b'+', State::Increment),
    (State::Plus, b'=', State::PlusEqual),
    (State::Minus, b'-', State::Decrement),
    (State::Minus, b'=', State::MinusEqual),
    (State::Minus, b'>', State::Arrow),
    (State::Asterisk, b'=', State::MultEqual),
    (State::Slash, b'=', State::DivideEqual),
    (State::Ampersand, b'&', State::LogicalAnd),
    (State::Ampersand, b'=', State::AmpersandEqual),
    (State::Pipe, b'|', State::LogicalOr),
    (State::Pipe, b'=', State::PipeEqual),
    (State::Bang, b'=', State::NotEqual),
    (State::Caret, b'=', State::CaretEqual),
    (State::Percent, b'=', State::PercentEqual),
    (State::Assign, b'=', State::Equal),
    (State::Lesser, b'<', State::ShiftLeft),
    (State::Lesser, b'=', State::LesserEqual),
    (State::ShiftLeft, b'=', State::ShiftLeftEqual),
    (State::Greater, b'>', State::ShiftRight),
    (State::Greater, b'=', State::GreaterEqual),
    (State::ShiftRight, b'=', State::ShiftRightEqual),
];

/// Single-byte punctuators. Accepting, no continuation.
const PUNCTUATORS: &[(u8, State)] = &[
    (b',', State::Comma),
    (b'(', State::OpenParen),
    (b')', State::CloseParen),
    (b'[', State::OpenBracket),
    (b']', State::CloseBracket),
    (b'{', State::OpenBrace),
    (b'}', State::CloseBrace),
    (b';', State::Semicolon),
];

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Immutable `state x byte` transition table.
#[derive(Clone)]
pub struct TransitionTable {
    rows: Box<[Row]>,
}

impl TransitionTable {
    /// Build the table from the Cinder rule set.
    pub fn build() -> Result<Self, TableError> {
        let mut builder = TableBuilder::new();
        builder.install_rules();
        builder.finish()
    }

    /// The process-wide table, built on first use.
    ///
    /// # Panics
    /// Panics if the rule set assigns a cell twice. The rules are fixed at
    /// compile time and the unit tests build them, so this cannot happen in
    /// a tested build.
    pub fn shared() -> &'static TransitionTable {
        static TABLE: OnceLock<TransitionTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::build().unwrap_or_else(|e| panic!("{}", e)))
    }

    /// Successor of `state` on `byte`, or `None` if no transition exists.
    #[inline]
    pub fn next(&self, state: State, byte: u8) -> Option<State> {
        self.rows[state.index()][byte as usize]
    }

    /// Number of defined `(state, byte)` cells.
    pub fn transition_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &self.rows.len())
            .field("transitions", &self.transition_count())
            .finish()
    }
}

/// A `(state, byte)` cell that the rule set assigned twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConflict {
    pub state: State,
    pub byte: u8,
    pub existing: State,
    pub attempted: State,
}

impl fmt::Display for TableConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} on 0x{:02X} already goes to {:?}, cannot also go to {:?}",
            self.state, self.byte, self.existing, self.attempted
        )
    }
}

/// Error building a transition table.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("transition table assigns a cell twice: {first} (and {} more)", .rest.len())]
    Conflicts {
        first: TableConflict,
        rest: Vec<TableConflict>,
    },
}

/// Incremental builder for a [`TransitionTable`].
///
/// Rules are added with [`set`](Self::set), [`set_class`](Self::set_class)
/// and [`set_all_except`](Self::set_all_except); each call records a
/// conflict instead of overwriting an assigned cell.
pub struct TableBuilder {
    rows: Box<[Row]>,
    conflicts: Vec<TableConflict>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Create a builder with every cell unassigned.
    pub fn new() -> Self {
        Self {
            rows: vec![[None; 256]; State::COUNT].into_boxed_slice(),
            conflicts: Vec::new(),
        }
    }

    /// Assign `from --byte--> to`.
    pub fn set(&mut self, from: State, byte: u8, to: State) {
        let cell = &mut self.rows[from.index()][byte as usize];
        match *cell {
            Some(existing) => self.conflicts.push(TableConflict {
                state: from,
                byte,
                existing,
                attempted: to,
            }),
            None => *cell = Some(to),
        }
    }

    /// Assign `from --b--> to` for every ASCII byte `b` with `class(b)`.
    pub fn set_class(&mut self, from: State, class: impl Fn(u8) -> bool, to: State) {
        for byte in 0..=127u8 {
            if class(byte) {
                self.set(from, byte, to);
            }
        }
    }

    /// Assign `from --b--> to` for every byte value (0-255) not in `except`.
    ///
    /// This is the only way rules reach bytes >= 128.
    pub fn set_all_except(&mut self, from: State, except: &[u8], to: State) {
        for byte in 0..=255u8 {
            if !except.contains(&byte) {
                self.set(from, byte, to);
            }
        }
    }

    /// Finish building, failing if any cell was assigned twice.
    pub fn finish(self) -> Result<TransitionTable, TableError> {
        let mut conflicts = self.conflicts.into_iter();
        if let Some(first) = conflicts.next() {
            return Err(TableError::Conflicts {
                first,
                rest: conflicts.collect(),
            });
        }
        let table = TransitionTable { rows: self.rows };
        tracing::debug!(
            states = State::COUNT,
            transitions = table.transition_count(),
            "built transition table"
        );
        Ok(table)
    }

    /// Install every token family of the language.
    fn install_rules(&mut self) {
        for neutral in State::NEUTRAL {
            self.install_token_starts(neutral);
        }
        self.set_class(State::Whitespace, is_whitespace, State::Whitespace);
        self.install_identifier();
        self.install_numbers();
        self.install_quoted(b'"', State::Str, State::StrEscape, State::StrEnd);
        self.install_quoted(b'\'', State::Char, State::CharEscape, State::CharEnd);
        self.install_comments();
        for &(from, byte, to) in OPERATOR_CONTINUATIONS {
            self.set(from, byte, to);
        }
    }

    /// Transitions out of a neutral state: the first byte of every token.
    fn install_token_starts(&mut self, neutral: State) {
        if neutral == State::Start {
            self.set_class(neutral, is_whitespace, State::Whitespace);
        }
        self.set_class(neutral, is_ident_start, State::Ident);
        self.set_class(neutral, |b| b.is_ascii_digit(), State::Int);
        self.set(neutral, b'"', State::Str);
        self.set(neutral, b'\'', State::Char);
        for &(byte, to) in OPERATOR_ROOTS.iter().chain(PUNCTUATORS) {
            self.set(neutral, byte, to);
        }
    }

    fn install_identifier(&mut self) {
        self.set_class(State::Ident, is_ident_continue, State::Ident);
    }

    fn install_numbers(&mut self) {
        self.set_class(State::Int, |b| b.is_ascii_digit() || b == b'_', State::Int);
        self.set(State::Int, b'.', State::Float);
        // Repeated dots are accepted: `1.2.3` is one float literal.
        self.set_class(
            State::Float,
            |b| b.is_ascii_digit() || b == b'_' || b == b'.',
            State::Float,
        );
    }

    fn install_quoted(&mut self, quote: u8, body: State, escape: State, end: State) {
        self.set_all_except(body, &[quote, b'\\'], body);
        self.set(body, b'\\', escape);
        self.set(body, quote, end);
        self.set_all_except(escape, &[], body);
    }

    fn install_comments(&mut self) {
        self.set(State::Slash, b'/', State::LineComment);
        self.set_all_except(State::LineComment, b"\n", State::LineComment);
        self.set(State::LineComment, b'\n', State::Start);

        self.set(State::Slash, b'*', State::BlockComment);
        self.set_all_except(State::BlockComment, b"*", State::BlockComment);
        self.set(State::BlockComment, b'*', State::BlockStar);
        self.set(State::BlockStar, b'*', State::BlockStar);
        self.set(State::BlockStar, b'/', State::Start);
        self.set_all_except(State::BlockStar, b"*/", State::BlockComment);
    }
}
