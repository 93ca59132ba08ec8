//! Tokenizer tests
//!
//! Classification, escape decoding and the lexical errors that must be
//! reported before parsing starts.

use nodepath_engine::tokenizer::tokenize;
use nodepath_engine::tokens::TokenKind;

fn kinds(query: &str) -> Vec<TokenKind> {
    tokenize(query)
        .expect("query should tokenize")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_structural_tokens() {
    assert_eq!(
        kinds("$..a[*]"),
        vec![
            TokenKind::Root,
            TokenKind::DoubleDot,
            TokenKind::Identifier("a".to_string()),
            TokenKind::LeftBracket,
            TokenKind::Star,
            TokenKind::RightBracket,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_operators() {
    assert_eq!(
        kinds("== != < <= > >= && || !"),
        vec![
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::Less,
            TokenKind::LessEq,
            TokenKind::Greater,
            TokenKind::GreaterEq,
            TokenKind::LogicalAnd,
            TokenKind::LogicalOr,
            TokenKind::Not,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_single_equals_is_rejected() {
    let error = tokenize("$[?@.a = 1]").expect_err("single '=' must fail");
    assert!(error.is_syntax_error());
    assert_eq!(error.position(), Some(7));
}

#[test]
fn test_numbers() {
    assert_eq!(
        kinds("0 -3 1.5 2e3 -0"),
        vec![
            TokenKind::Integer(0),
            TokenKind::Integer(-3),
            TokenKind::Number(1.5),
            TokenKind::Number(2000.0),
            TokenKind::Number(-0.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_malformed_numbers() {
    for query in ["01", "-", "1.", "1e", "1e+", "-01"] {
        assert!(tokenize(query).is_err(), "{query} should not tokenize");
    }
}

#[test]
fn test_string_escapes_are_decoded() {
    assert_eq!(
        kinds(r#"'a\'b' "c\"d" 'é\n\\' '😀'"#),
        vec![
            TokenKind::String("a'b".to_string()),
            TokenKind::String("c\"d".to_string()),
            TokenKind::String("\u{e9}\n\\".to_string()),
            TokenKind::String("\u{1F600}".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_quote_escape_must_match_delimiter() {
    assert!(tokenize(r#"'\"'"#).is_err());
    assert!(tokenize(r#""\'""#).is_err());
}

#[test]
fn test_raw_control_characters_are_rejected() {
    assert!(tokenize("'a\u{0001}b'").is_err());
    assert!(tokenize("'a\u{007F}b'").is_err());
    assert!(tokenize("'a\tb'").is_err());
    assert!(tokenize(r"'a\tb'").is_ok());
}

#[test]
fn test_bad_unicode_escapes() {
    for query in [r"'\u12'", r"'\uZZZZ'", r"'\uD800'", r"'\uDC00'", r"'\uD800A'"] {
        assert!(tokenize(query).is_err(), "{query} should not tokenize");
    }
}

#[test]
fn test_unterminated_string_reports_opening_quote() {
    let error = tokenize("$['abc").expect_err("unterminated string");
    assert_eq!(error.position(), Some(2));
}

#[test]
fn test_whitespace_after_shorthand_dot_is_rejected() {
    assert!(tokenize("$. a").is_err());
    assert!(tokenize("$.. a").is_err());
    assert!(tokenize("$ .a").is_ok());
    assert!(tokenize("$[ 'a' , 1 ]").is_ok());
}

#[test]
fn test_keywords_only_outside_shorthand() {
    assert_eq!(
        kinds("$.true"),
        vec![
            TokenKind::Root,
            TokenKind::Dot,
            TokenKind::Identifier("true".to_string()),
            TokenKind::Eof,
        ]
    );
    assert_eq!(kinds("true")[0], TokenKind::True);
}

#[test]
fn test_token_positions_are_character_offsets() {
    let tokens = tokenize("$['é'].b").expect("tokenize");
    let dot = tokens
        .iter()
        .find(|token| token.kind == TokenKind::Dot)
        .expect("dot token");
    assert_eq!((dot.start, dot.end), (6, 7));
}
