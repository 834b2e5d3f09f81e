use pretty_assertions::assert_eq;

use super::*;
use crate::error::ScanErrorKind;

fn lex(src: &str) -> TokenStream {
    match tokenize(&SourceBuffer::new(src)) {
        Ok(stream) => stream,
        Err(e) => panic!("{src:?} should scan: {e}"),
    }
}

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).kinds()
}

fn lex_err(src: &str) -> ScanError {
    match tokenize(&SourceBuffer::new(src)) {
        Ok(stream) => panic!("{src:?} should fail, got {:?}", stream.kinds()),
        Err(e) => e,
    }
}

/// `(kind, start, end, line, column)` for each token.
fn layout(src: &str) -> Vec<(TokenKind, u32, u32, u32, u32)> {
    lex(src)
        .iter()
        .map(|t| (t.kind, t.span.start, t.span.end(), t.line, t.column))
        .collect()
}

use TokenKind::*;

// === Empty and trivia-only input ===

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(layout(""), vec![(Eof, 0, 0, 0, 0)]);
}

#[test]
fn whitespace_only_input() {
    assert_eq!(layout("  \n\t"), vec![(Eof, 4, 4, 1, 1)]);
}

#[test]
fn comment_only_input() {
    assert_eq!(layout("// only"), vec![(Eof, 7, 7, 0, 7)]);
    assert_eq!(layout("/* c */"), vec![(Eof, 7, 7, 0, 7)]);
    assert_eq!(layout("/**/\n"), vec![(Eof, 5, 5, 1, 0)]);
}

// === Maximal munch ===

#[test]
fn longest_operator_wins() {
    assert_eq!(kinds("<<="), vec![ShiftLeftEqual, Eof]);
    assert_eq!(kinds(">>="), vec![ShiftRightEqual, Eof]);
    assert_eq!(kinds("<<<"), vec![ShiftLeft, Lesser, Eof]);
    assert_eq!(kinds("a<<=b"), vec![Ident, ShiftLeftEqual, Ident, Eof]);
}

#[test]
fn operator_chains_split_at_the_longest_prefix() {
    assert_eq!(kinds("x+++y"), vec![Ident, Increment, Plus, Ident, Eof]);
    assert_eq!(kinds("a->b"), vec![Ident, Arrow, Ident, Eof]);
    assert_eq!(kinds("a-->b"), vec![Ident, Decrement, Greater, Ident, Eof]);
    assert_eq!(kinds("===="), vec![Equal, Equal, Eof]);
    assert_eq!(kinds("!!="), vec![LogicalNot, NotEqual, Eof]);
}

#[test]
fn every_operator_scans_alone() {
    for kind in [
        Plus, Increment, Minus, Decrement, Asterisk, Slash, BitwiseAnd, LogicalAnd, BitwiseOr,
        LogicalOr, BitwiseNot, LogicalNot, BitwiseXor, Modulo, Assign, Equal, PlusEqual,
        MinusEqual, MultEqual, DivideEqual, ShiftLeftEqual, ShiftRightEqual, ShiftLeft,
        ShiftRight, Lesser, Greater, LesserEqual, GreaterEqual, BitwiseAndEqual, BitwiseOrEqual,
        NotEqual, BitwiseXorEqual, ModuloEqual, Period, Arrow, QuestionMark, Colon,
    ] {
        let Some(text) = kind.lexeme() else {
            panic!("{kind:?} has no lexeme");
        };
        assert_eq!(kinds(text), vec![kind, Eof], "{text}");
    }
}

#[test]
fn punctuators() {
    assert_eq!(
        kinds("f(a,[b]){};"),
        vec![
            Ident,
            OpenParen,
            Ident,
            Comma,
            OpenBracket,
            Ident,
            CloseBracket,
            CloseParen,
            OpenBrace,
            CloseBrace,
            Semicolon,
            Eof
        ]
    );
}

#[test]
fn ternary_and_member_access() {
    assert_eq!(
        kinds("a?b.c:d"),
        vec![Ident, QuestionMark, Ident, Period, Ident, Colon, Ident, Eof]
    );
}

// === Identifiers and keywords ===

#[test]
fn keywords_need_the_whole_word() {
    assert_eq!(kinds("if"), vec![If, Eof]);
    assert_eq!(kinds("ifx"), vec![Ident, Eof]);
    assert_eq!(kinds("_if"), vec![Ident, Eof]);
    assert_eq!(kinds("If"), vec![Ident, Eof]);
}

#[test]
fn all_keywords() {
    assert_eq!(
        kinds("if else mut for while break continue comptime emit struct union enum return"),
        vec![
            If, Else, Mut, For, While, Break, Continue, Comptime, Emit, Struct, Union, Enum,
            Return, Eof
        ]
    );
}

#[test]
fn identifiers_with_digits_and_underscores() {
    assert_eq!(
        layout("_a1 b_2"),
        vec![
            (Ident, 0, 3, 0, 0),
            (Ident, 4, 7, 0, 4),
            (Eof, 7, 7, 0, 7)
        ]
    );
}

// === Numbers ===

#[test]
fn integer_then_identifier() {
    assert_eq!(
        layout("123abc"),
        vec![(Int, 0, 3, 0, 0), (Ident, 3, 6, 0, 3), (Eof, 6, 6, 0, 6)]
    );
}

#[test]
fn repeated_dots_stay_one_float() {
    assert_eq!(layout("1.2.3"), vec![(Float, 0, 5, 0, 0), (Eof, 5, 5, 0, 5)]);
}

#[test]
fn trailing_dot_is_a_float() {
    assert_eq!(kinds("1."), vec![Float, Eof]);
    assert_eq!(kinds("1.x"), vec![Float, Ident, Eof]);
}

#[test]
fn underscores_in_numbers() {
    assert_eq!(kinds("1_000 3.141_59"), vec![Int, Float, Eof]);
}

#[test]
fn leading_dot_is_a_period() {
    assert_eq!(kinds(".5"), vec![Period, Int, Eof]);
}

// === Literals ===

#[test]
fn string_with_escaped_quote() {
    assert_eq!(
        layout(r#""a\"b" x"#),
        vec![(String, 0, 6, 0, 0), (Ident, 7, 8, 0, 7), (Eof, 8, 8, 0, 8)]
    );
}

#[test]
fn adjacent_strings_are_separate_tokens() {
    assert_eq!(kinds(r#""a""b""#), vec![String, String, Eof]);
}

#[test]
fn char_literals() {
    assert_eq!(kinds(r"'x' '\''"), vec![Char, Char, Eof]);
    assert_eq!(kinds("''"), vec![Char, Eof]);
    assert_eq!(kinds(r#"'"'"#), vec![Char, Eof]);
}

#[test]
fn multi_line_string_advances_lines() {
    assert_eq!(
        layout("\"a\nb\" c"),
        vec![(String, 0, 5, 0, 0), (Ident, 6, 7, 1, 3), (Eof, 7, 7, 1, 4)]
    );
}

#[test]
fn string_body_accepts_non_ascii() {
    assert_eq!(
        layout("\"\u{e9}\" x"),
        vec![(String, 0, 4, 0, 0), (Ident, 5, 6, 0, 5), (Eof, 6, 6, 0, 6)]
    );
}

// === Comments ===

#[test]
fn line_comment_is_skipped() {
    assert_eq!(
        layout("a//comment\nb"),
        vec![(Ident, 0, 1, 0, 0), (Ident, 11, 12, 1, 0), (Eof, 12, 12, 1, 1)]
    );
}

#[test]
fn block_comment_is_skipped() {
    assert_eq!(
        layout("x/*c*/y"),
        vec![(Ident, 0, 1, 0, 0), (Ident, 6, 7, 0, 6), (Eof, 7, 7, 0, 7)]
    );
}

#[test]
fn block_comment_counts_newlines() {
    assert_eq!(
        layout("a/*\n\n*/b"),
        vec![(Ident, 0, 1, 0, 0), (Ident, 7, 8, 2, 2), (Eof, 8, 8, 2, 3)]
    );
}

#[test]
fn block_comment_with_extra_stars() {
    assert_eq!(kinds("/*** x **/y"), vec![Ident, Eof]);
}

#[test]
fn comments_accept_non_ascii() {
    assert_eq!(layout("// \u{e9}\nx"), vec![(Ident, 6, 7, 1, 0), (Eof, 7, 7, 1, 1)]);
}

#[test]
fn slash_is_an_operator_when_no_comment_follows() {
    assert_eq!(kinds("a/b"), vec![Ident, Slash, Ident, Eof]);
    assert_eq!(kinds("a/=b"), vec![Ident, DivideEqual, Ident, Eof]);
    assert_eq!(kinds("a/"), vec![Ident, Slash, Eof]);
}

// === Positions ===

#[test]
fn tokens_on_separate_lines() {
    assert_eq!(
        layout("a\n+\nb"),
        vec![
            (Ident, 0, 1, 0, 0),
            (Plus, 2, 3, 1, 0),
            (Ident, 4, 5, 2, 0),
            (Eof, 5, 5, 2, 1)
        ]
    );
}

#[test]
fn carriage_return_is_whitespace() {
    assert_eq!(
        layout("a\r\nb"),
        vec![(Ident, 0, 1, 0, 0), (Ident, 3, 4, 1, 0), (Eof, 4, 4, 1, 1)]
    );
}

#[test]
fn whitespace_between_tokens() {
    assert_eq!(
        layout("a  +\tb"),
        vec![
            (Ident, 0, 1, 0, 0),
            (Plus, 3, 4, 0, 3),
            (Ident, 5, 6, 0, 5),
            (Eof, 6, 6, 0, 6)
        ]
    );
}

#[test]
fn one_based_accessors() {
    let stream = lex("\n  x");
    assert_eq!(stream[0].line_number(), 2);
    assert_eq!(stream[0].column_number(), 3);
}

// === Errors ===

#[test]
fn unterminated_string() {
    let err = lex_err("\"abc");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedLiteral);
    assert_eq!(err.offset, 4);
    assert_eq!(err.token_start, 0);
    assert_eq!(err.state, State::Str);
}

#[test]
fn unterminated_string_after_escape() {
    let err = lex_err(r#""ab\"#);
    assert_eq!(err.kind, ScanErrorKind::UnterminatedLiteral);
    assert_eq!(err.state, State::StrEscape);
}

#[test]
fn unterminated_char() {
    let err = lex_err("x = 'a");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedLiteral);
    assert_eq!((err.offset, err.token_start), (6, 4));
    assert_eq!(err.state, State::Char);
    assert_eq!(err.help(), "add a closing `'`");
}

#[test]
fn unterminated_block_comment() {
    let err = lex_err("a /* b");
    assert_eq!(err.kind, ScanErrorKind::UnterminatedComment);
    assert_eq!((err.offset, err.token_start), (6, 2));
    assert_eq!(err.state, State::BlockComment);

    let err = lex_err("/* *");
    assert_eq!(err.state, State::BlockStar);
}

#[test]
fn unrecognized_byte_after_whitespace() {
    let err = lex_err("a @");
    assert_eq!(err.kind, ScanErrorKind::UnrecognizedByte { byte: b'@' });
    assert_eq!((err.offset, err.token_start), (2, 2));
    assert_eq!(err.state, State::Whitespace);
}

#[test]
fn unrecognized_byte_right_after_token() {
    let err = lex_err("a@");
    assert_eq!(err.kind, ScanErrorKind::UnrecognizedByte { byte: b'@' });
    assert_eq!(err.offset, 1);
    assert_eq!(err.state, State::Start);
}

#[test]
fn high_byte_outside_literal_is_unrecognized() {
    let source = match SourceBuffer::from_bytes(vec![b'x', b' ', 0xFF]) {
        Ok(source) => source,
        Err(e) => panic!("{e}"),
    };
    let err = tokenize(&source).err();
    assert_eq!(
        err.map(|e| (e.kind, e.offset)),
        Some((ScanErrorKind::UnrecognizedByte { byte: 0xFF }, 2))
    );
}

// === Laziness ===

#[test]
fn iterator_ends_after_eof() {
    let source = SourceBuffer::new("a b");
    let mut scanner = Scanner::new(TransitionTable::shared(), &source);
    let kinds: Vec<_> = scanner
        .by_ref()
        .map(|r| r.map(|t| t.kind))
        .collect();
    assert_eq!(kinds, vec![Ok(Ident), Ok(Ident), Ok(Eof)]);
    assert_eq!(scanner.next(), None);
}

#[test]
fn next_token_repeats_eof() {
    let source = SourceBuffer::new("a");
    let mut scanner = Scanner::new(TransitionTable::shared(), &source);
    assert_eq!(scanner.next_token().map(|t| t.kind), Ok(Ident));
    assert_eq!(scanner.next_token().map(|t| t.kind), Ok(Eof));
    assert_eq!(scanner.next_token().map(|t| t.kind), Ok(Eof));
}

#[test]
fn iterator_ends_after_error() {
    let source = SourceBuffer::new("a # b");
    let results: Vec<_> = Scanner::new(TransitionTable::shared(), &source).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].map(|t| t.kind), Ok(Ident));
    assert_eq!(
        results[1].map_err(|e| e.kind),
        Err(ScanErrorKind::UnrecognizedByte { byte: b'#' })
    );
}

#[test]
fn lazy_and_eager_agree() {
    let source = SourceBuffer::new("while (i < 10) { i += 1; } // done\n");
    let lazy: Result<Vec<Token>, ScanError> =
        Scanner::new(TransitionTable::shared(), &source).collect();
    let eager = tokenize(&source).map(TokenStream::into_vec);
    assert_eq!(lazy, eager);
}

#[test]
fn explicit_table_matches_shared() {
    let table = match TransitionTable::build() {
        Ok(table) => table,
        Err(e) => panic!("{e}"),
    };
    let source = SourceBuffer::new("struct P { mut x: 1.5, }");
    assert_eq!(tokenize_with(&table, &source), tokenize(&source));
}

// === Partial scans ===

#[test]
fn partial_scan_of_valid_source_is_complete() {
    let source = SourceBuffer::new("emit x;");
    let partial = tokenize_partial(&source);
    assert!(partial.is_complete());
    assert_eq!(tokenize(&source).map(TokenStream::into_vec), Ok(partial.tokens));
}

#[test]
fn partial_scan_keeps_prefix_and_marks_failure() {
    let source = SourceBuffer::new("a\n  \"bc");
    let partial = tokenize_partial(&source);
    assert_eq!(
        partial.error.map(|e| e.kind),
        Some(ScanErrorKind::UnterminatedLiteral)
    );
    let layout: Vec<_> = partial
        .tokens
        .iter()
        .map(|t| (t.kind, t.span.start, t.span.end(), t.line, t.column))
        .collect();
    assert_eq!(layout, vec![(Ident, 0, 1, 0, 0), (Invalid, 4, 7, 1, 2)]);
}

#[test]
fn partial_scan_marks_single_bad_byte() {
    let partial = tokenize_partial(&SourceBuffer::new("x $ y"));
    let last = partial.tokens.last().map(|t| (t.kind, t.span));
    assert_eq!(last, Some((Invalid, Span::new(2, 1))));
}

// === Determinism ===

#[test]
fn scanning_is_idempotent() {
    let source = SourceBuffer::new("for (mut i = 0; i < n; ++i) { x <<= 1; }");
    assert_eq!(tokenize(&source), tokenize(&source));
}

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    fn piece() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("if"),
            Just("else"),
            Just("ifx"),
            Just("x1"),
            Just("_a"),
            Just("42"),
            Just("1_000"),
            Just("3.14"),
            Just("1.2.3"),
            Just("\"s\""),
            Just("\"a\\\"b\""),
            Just("'c'"),
            Just("'\\''"),
            Just("+"),
            Just("++"),
            Just("+="),
            Just("-"),
            Just("->"),
            Just("<<="),
            Just(">>"),
            Just("<"),
            Just("="),
            Just("=="),
            Just("!="),
            Just("&&"),
            Just("|"),
            Just("^="),
            Just("%"),
            Just("?"),
            Just(":"),
            Just("."),
            Just(","),
            Just("("),
            Just(")"),
            Just("{"),
            Just("}"),
            Just(";"),
            Just("/"),
            Just(" "),
            Just("\t"),
            Just("\n"),
            Just("\r\n"),
            Just("// c\n"),
            Just("/* b */"),
            Just("/*\n*/"),
        ]
    }

    fn program() -> impl Strategy<Value = std::string::String> {
        proptest::collection::vec(piece(), 0..64).prop_map(|pieces| pieces.concat())
    }

    proptest! {
        #[test]
        fn tokens_tile_the_source(src in program()) {
            let source = SourceBuffer::new(&src);
            let stream = tokenize(&source);
            prop_assert!(stream.is_ok(), "{:?} failed: {:?}", src, stream);
            let Ok(stream) = stream else { return Ok(()) };

            let mut prev_end = 0;
            for token in &stream {
                prop_assert!(token.span.start >= prev_end);
                // Gaps between tokens are pure trivia.
                let gap = SourceBuffer::new(&src[prev_end as usize..token.span.start as usize]);
                prop_assert_eq!(tokenize(&gap).map(|s| s.kinds()), Ok(vec![Eof]));
                prop_assert_eq!(source.line_col(token.span.start), (token.line, token.column));
                if !token.is_eof() {
                    prop_assert!(!token.span.is_empty());
                }
                prev_end = token.span.end();
            }
            prop_assert_eq!(stream.eof().map(|t| t.span.start), Some(source.len()));
        }

        #[test]
        fn each_token_rescans_alone(src in program()) {
            let source = SourceBuffer::new(&src);
            let Ok(stream) = tokenize(&source) else { return Ok(()) };
            for token in stream.iter().filter(|t| !t.is_eof()) {
                let alone = SourceBuffer::new(&src[token.span.range()]);
                prop_assert_eq!(
                    tokenize(&alone).map(|s| s.kinds()),
                    Ok(vec![token.kind, Eof])
                );
            }
        }

        #[test]
        fn scanning_arbitrary_bytes_is_deterministic(
            bytes in proptest::collection::vec(any::<u8>(), 0..256)
        ) {
            let Ok(source) = SourceBuffer::from_bytes(bytes) else { return Ok(()) };
            prop_assert_eq!(tokenize(&source), tokenize(&source));
        }

        #[test]
        fn partial_scan_prefix_matches_lazy_scan(
            bytes in proptest::collection::vec(0u8..128, 0..128)
        ) {
            let Ok(source) = SourceBuffer::from_bytes(bytes) else { return Ok(()) };
            let partial = tokenize_partial(&source);
            let lazy: Vec<Token> = Scanner::new(TransitionTable::shared(), &source)
                .map_while(Result::ok)
                .collect();
            prop_assert!(partial.tokens.starts_with(&lazy));
            prop_assert_eq!(partial.tokens.len() - lazy.len(), usize::from(!partial.is_complete()));
        }
    }
}
