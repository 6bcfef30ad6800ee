use delta_diagnostic::{DiagnosticQueue, ErrorCode, Location};
use delta_ir::{Position, Token, TokenCategory};
use delta_lexer_core::{ReaderConfig, SourceReader};
use delta_symbols::SymbolTable;
use pretty_assertions::assert_eq;

use super::*;

fn source(text: &str, buffer_size: usize) -> SourceReader {
    SourceReader::from_bytes("test", text, ReaderConfig::with_buffer_size(buffer_size)).unwrap()
}

fn lexer(text: &str) -> LexicalAnalyzer<DiagnosticQueue> {
    lexer_with(text, 16)
}

fn lexer_with(text: &str, buffer_size: usize) -> LexicalAnalyzer<DiagnosticQueue> {
    let mut lexer = LexicalAnalyzer::new(SymbolTable::new(), DiagnosticQueue::new());
    lexer.push_source(source(text, buffer_size));
    lexer
}

/// Every token and error until all sources are exhausted.
fn drain(lexer: &mut LexicalAnalyzer<DiagnosticQueue>) -> Vec<Result<Token, LexError>> {
    let mut out = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(Some(token)) => out.push(Ok(token)),
            Ok(None) => return out,
            Err(err) => {
                assert!(!err.is_internal(), "internal error: {err}");
                out.push(Err(err));
            }
        }
    }
}

fn categories(text: &str) -> Vec<TokenCategory> {
    drain(&mut lexer(text))
        .into_iter()
        .map(|result| result.unwrap().category())
        .collect()
}

fn single(text: &str) -> Token {
    let mut tokens = drain(&mut lexer(text));
    assert_eq!(tokens.len(), 1, "{text:?} gave {tokens:?}");
    tokens.remove(0).unwrap()
}

fn error_codes(text: &str) -> Vec<ErrorCode> {
    let mut lexer = lexer(text);
    drain(&mut lexer);
    lexer.emitter().codes()
}

// === Single-character tokens ===

#[test]
fn punctuation_round_trip() {
    use TokenCategory::{
        Comma, GreaterThan, LBracket, LCurly, LParen, LessThan, Minus, RBracket, RCurly, RParen,
        Semicolon, Times,
    };
    assert_eq!(
        categories(",;(){}[]<>-*"),
        vec![
            Comma, Semicolon, LParen, RParen, LCurly, RCurly, LBracket, RBracket, LessThan,
            GreaterThan, Minus, Times
        ]
    );
}

#[test]
fn single_char_tokens_carry_no_payload() {
    let token = single(";");
    assert_eq!(token.attribute(), None);
    assert_eq!(token.position(), Position::START);
}

// === Identifiers and symbols ===

#[test]
fn identifier_interned_once() {
    let mut lexer = lexer("alpha alpha");
    let before = lexer.symbols().len();

    let first = lexer.next_token().unwrap().unwrap();
    assert_eq!(lexer.symbols().len(), before + 1);
    let second = lexer.next_token().unwrap().unwrap();
    assert_eq!(lexer.symbols().len(), before + 1);

    assert_eq!(first.category(), TokenCategory::Identifier);
    assert_eq!(first.entry(), second.entry());
    assert!(first.entry().is_some());
}

#[test]
fn table_decides_the_category() {
    assert_eq!(
        categories("while sqrt pi help import counter"),
        vec![
            TokenCategory::Keyword,
            TokenCategory::Function,
            TokenCategory::Constant,
            TokenCategory::Command,
            TokenCategory::Command,
            TokenCategory::Identifier,
        ]
    );
}

#[test]
fn symbol_token_references_its_entry() {
    let mut lexer = lexer("cos");
    let token = lexer.next_token().unwrap().unwrap();
    let entry = lexer.symbols().get(token.entry().unwrap()).unwrap();
    assert_eq!(entry.lexeme, "cos");
    assert_eq!(token.lexeme(), None);
}

#[test]
fn identifier_at_end_of_input() {
    let token = single("last");
    assert_eq!(token.category(), TokenCategory::Identifier);
}

// === Whitespace and comments ===

#[test]
fn whitespace_and_comments_are_transparent() {
    let text = "a \t\n // line\n /* block */ /+ nested /+ deeper +/ +/\r\n b";
    assert_eq!(
        categories(text),
        vec![TokenCategory::Identifier, TokenCategory::Identifier]
    );
}

#[test]
fn only_trivia_yields_nothing() {
    assert!(categories("   \n// nothing\n/* here */").is_empty());
}

#[test]
fn nested_comment_closes_at_depth_zero() {
    assert!(categories("/+ a /+ b +/ c +/").is_empty());
}

#[test]
fn extra_close_after_nested_comment_is_lexed() {
    // The first `+/` closes the comment; `+/` then fails as an operator and
    // the `/` is lexed on its own.
    let mut lexer = lexer("/+ a +/ +/");
    let results = drain(&mut lexer);
    assert!(results[0].is_err());
    assert_eq!(
        results[1].as_ref().map(Token::category),
        Ok(TokenCategory::Div)
    );
    assert_eq!(lexer.emitter().codes(), vec![ErrorCode::E2401]);
}

#[test]
fn unterminated_comments() {
    assert_eq!(error_codes("/* open"), vec![ErrorCode::E2501]);
    assert_eq!(error_codes("/+ /+ +/"), vec![ErrorCode::E2501]);
}

#[test]
fn slash_is_division() {
    assert_eq!(
        categories("a / b"),
        vec![
            TokenCategory::Identifier,
            TokenCategory::Div,
            TokenCategory::Identifier
        ]
    );
}

// === Strings ===

#[test]
fn string_literal_keeps_quotes_and_escapes() {
    let token = single(r#""say \"hi\"""#);
    assert_eq!(token.category(), TokenCategory::LiteralString);
    assert_eq!(token.lexeme(), Some(r#""say \"hi\"""#));
}

#[test]
fn string_errors() {
    assert_eq!(error_codes(r#""""#), vec![ErrorCode::E2331]);
    assert_eq!(error_codes(r#""no end"#), vec![ErrorCode::E2332]);
}

#[test]
fn string_longer_than_buffers() {
    let text = format!("\"{}\"", "x".repeat(100));
    let mut lexer = lexer_with(&text, 4);
    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.lexeme(), Some(text.as_str()));
}

// === Numbers ===

#[test]
fn number_classification() {
    let cases = [
        ("45", TokenCategory::LiteralInt),
        ("1.15", TokenCategory::LiteralFloat),
        ("0b101", TokenCategory::LiteralInt),
        ("10E5", TokenCategory::LiteralFloat),
        (".5", TokenCategory::LiteralFloat),
        ("1_000", TokenCategory::LiteralInt),
    ];
    for (text, category) in cases {
        let token = single(text);
        assert_eq!(token.category(), category, "{text}");
        assert_eq!(token.lexeme(), Some(text), "{text}");
    }
}

#[test]
fn number_followed_by_operator() {
    let mut lexer = lexer("45;");
    let token = lexer.next_token().unwrap().unwrap();
    assert_eq!(token.lexeme(), Some("45"));
    let semi = lexer.next_token().unwrap().unwrap();
    assert_eq!(semi.category(), TokenCategory::Semicolon);
    assert_eq!(semi.position(), Position::new(1, 3));
}

#[test]
fn malformed_numbers() {
    assert_eq!(error_codes("0b"), vec![ErrorCode::E2322]);
    assert_eq!(error_codes("0b12"), vec![ErrorCode::E2322]);
    assert_eq!(error_codes("1.5x"), vec![ErrorCode::E2311]);
}

#[test]
fn letter_after_integer_is_reported_then_lexed() {
    let mut lexer = lexer("45a");
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.diagnostic().code, ErrorCode::E2323);
    assert_eq!(
        err.diagnostic().location,
        Location::Source {
            name: "test".into(),
            position: Position::new(1, 3),
        }
    );
    // Report-and-continue: the letter starts the next token.
    let next = lexer.next_token().unwrap().unwrap();
    assert_eq!(next.category(), TokenCategory::Identifier);
}

#[test]
fn lone_dot() {
    assert_eq!(
        categories("a.b"),
        vec![
            TokenCategory::Identifier,
            TokenCategory::Dot,
            TokenCategory::Identifier
        ]
    );
}

// === Operators ===

#[test]
fn two_byte_operators() {
    assert_eq!(
        categories("a == b = c ++ d += 1"),
        vec![
            TokenCategory::Identifier,
            TokenCategory::Equals,
            TokenCategory::Identifier,
            TokenCategory::Assign,
            TokenCategory::Identifier,
            TokenCategory::Increment,
            TokenCategory::Identifier,
            TokenCategory::PlusAssign,
            TokenCategory::LiteralInt,
        ]
    );
}

#[test]
fn lone_plus_is_unsupported() {
    assert_eq!(error_codes("1 + 2"), vec![ErrorCode::E2401]);
}

// === Unsupported characters ===

#[test]
fn unsupported_character_is_consumed() {
    let mut lexer = lexer("a @ b");
    let results = drain(&mut lexer);
    assert_eq!(results.len(), 3);
    let err = results[1].as_ref().unwrap_err();
    assert_eq!(err.diagnostic().message(), "character not supported, '@'");
    assert_eq!(
        err.diagnostic().location,
        Location::Source {
            name: "test".into(),
            position: Position::new(1, 3),
        }
    );
}

#[test]
fn interior_nul_is_unsupported() {
    assert_eq!(error_codes("a\0b"), vec![ErrorCode::E2001]);
}

// === Positions ===

#[test]
fn positions_track_lines_and_columns() {
    let mut lexer = lexer("x\n  y = 1;");
    let positions: Vec<_> = drain(&mut lexer)
        .into_iter()
        .map(|t| t.unwrap().position())
        .collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(2, 3),
            Position::new(2, 5),
            Position::new(2, 7),
            Position::new(2, 8),
        ]
    );
}

#[test]
fn positions_do_not_depend_on_buffer_size() {
    let text = "alpha = 0b1_0; /* c */ beta += 2.5e-3;\ngamma";
    let reference: Vec<_> = drain(&mut lexer_with(text, 64))
        .into_iter()
        .map(|t| {
            let t = t.unwrap();
            (t.category(), t.position(), t.lexeme().map(str::to_owned))
        })
        .collect();
    for size in [2, 3, 4, 7] {
        let got: Vec<_> = drain(&mut lexer_with(text, size))
            .into_iter()
            .map(|t| {
                let t = t.unwrap();
                (t.category(), t.position(), t.lexeme().map(str::to_owned))
            })
            .collect();
        assert_eq!(got, reference, "buffer size {size}");
    }
}

// === Source stack ===

#[test]
fn pushed_source_is_read_first() {
    let mut lexer = lexer("a b");
    let first = lexer.next_token().unwrap().unwrap();
    lexer.push_source(source("1", 8));
    assert_eq!(lexer.source_depth(), 2);

    let inner = lexer.next_token().unwrap().unwrap();
    assert_eq!(inner.category(), TokenCategory::LiteralInt);
    let resumed = lexer.next_token().unwrap().unwrap();
    assert_eq!(resumed.category(), TokenCategory::Identifier);
    assert_ne!(first.entry(), resumed.entry());
    assert_eq!(resumed.position(), Position::new(1, 3));

    assert_eq!(lexer.next_token().unwrap(), None);
    assert_eq!(lexer.source_depth(), 0);
}

#[test]
fn no_sources_means_no_tokens() {
    let mut lexer = LexicalAnalyzer::new(SymbolTable::new(), DiagnosticQueue::new());
    assert_eq!(lexer.next_token().unwrap(), None);
    assert_eq!(lexer.current_source(), None);
}

#[test]
fn symbols_survive_across_sources() {
    let mut lexer = lexer("value");
    let first = lexer.next_token().unwrap().unwrap();
    lexer.push_source(source("value", 8));
    let second = lexer.next_token().unwrap().unwrap();
    assert_eq!(first.entry(), second.entry());

    let (symbols, queue) = lexer.into_parts();
    assert!(symbols.lookup("value").is_some());
    assert!(!queue.has_errors());
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_round_trip {
    use proptest::prelude::*;

    use super::{categories, lexer_with};
    use crate::automata::single_char_category;

    const SINGLES: &[u8] = b",;(){}[]<>-*";

    proptest! {
        #[test]
        fn single_char_stream_round_trips(
            picks in proptest::collection::vec(0..SINGLES.len(), 0..120),
        ) {
            let text: String = picks.iter().map(|&i| char::from(SINGLES[i])).collect();
            let expected: Vec<_> = text
                .bytes()
                .map(|b| single_char_category(b).unwrap())
                .collect();
            prop_assert_eq!(categories(&text), expected);
        }

        #[test]
        fn identifiers_split_on_whitespace(
            words in proptest::collection::vec("[a-z_][a-z0-9_]{0,12}", 1..10),
            size in 2usize..9,
        ) {
            let text = words.join("  ");
            let mut lexer = lexer_with(&text, size);
            let mut count = 0;
            while let Some(token) = lexer.next_token().unwrap() {
                let entry = lexer.symbols().get(token.entry().unwrap()).unwrap();
                prop_assert_eq!(&entry.lexeme, &words[count]);
                count += 1;
            }
            prop_assert_eq!(count, words.len());
        }
    }
}
