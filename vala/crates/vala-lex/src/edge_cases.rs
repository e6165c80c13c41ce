//! Edge case and property tests for vala-lex

use crate::{tokenize, ScanOptions, Scanner, Token, TokenKind};
use proptest::prelude::*;

/// Scans to end of input, counting calls including the final one.
fn scan_counting(source: &str) -> (Vec<Token>, usize) {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    let mut calls = 0;
    loop {
        calls += 1;
        let token = scanner.scan();
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    (tokens, calls)
}

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.literal.as_str()).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_single_char_ident() {
    assert_eq!(tokenize("x"), vec![Token::new(TokenKind::Identifier, "x")]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let tokens = tokenize(&name);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].literal.len(), 10000);
}

#[test]
fn test_edge_classical_is_one_identifier() {
    assert_eq!(
        tokenize("classical"),
        vec![Token::new(TokenKind::Identifier, "classical")]
    );
}

#[test]
fn test_edge_whitespace_grouping() {
    assert_eq!(
        tokenize("a   b"),
        vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Whitespace, "   "),
            Token::new(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_edge_number_classification() {
    assert_eq!(tokenize("123"), vec![Token::new(TokenKind::IntegerLiteral, "123")]);
    assert_eq!(tokenize("12.5"), vec![Token::new(TokenKind::RealLiteral, "12.5")]);
    assert_eq!(tokenize("0x1F"), vec![Token::new(TokenKind::IntegerLiteral, "0x1F")]);
}

#[test]
fn test_edge_illegal_then_continue() {
    assert_eq!(
        tokenize("a ~ b"),
        vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Whitespace, " "),
            Token::illegal("~"),
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_edge_every_symbol_run_shrinks_to_one() {
    let tokens = tokenize("{}[]()");
    assert_eq!(tokens.len(), 6);
    assert!(tokens.iter().all(|t| t.literal.chars().count() == 1));
}

#[test]
fn test_edge_long_symbol_run() {
    let source = "+".repeat(1000);
    let tokens = tokenize(&source);
    assert_eq!(tokens.len(), 1000);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Add));
}

#[test]
fn test_edge_close_comment_inside_run() {
    assert_eq!(
        tokenize("*/*"),
        vec![
            Token::new(TokenKind::CloseMultilineComments, "*/"),
            Token::new(TokenKind::Mult, "*"),
        ]
    );
}

#[test]
fn test_edge_lambda_and_comment_shrink() {
    assert_eq!(
        tokenize("=>="),
        vec![Token::new(TokenKind::LambdaArrow, "=>"), Token::new(TokenKind::Assign, "=")]
    );
    assert_eq!(
        tokenize("/*/"),
        vec![
            Token::new(TokenKind::OpenMultilineComments, "/*"),
            Token::new(TokenKind::Divide, "/"),
        ]
    );
}

#[test]
fn test_edge_adjacent_operators() {
    assert_eq!(
        tokenize("x==(y)"),
        vec![
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Equal, "=="),
            Token::new(TokenKind::OpenParens, "("),
            Token::new(TokenKind::Identifier, "y"),
            Token::new(TokenKind::CloseParens, ")"),
        ]
    );
    assert_eq!(
        tokenize("a=-1;"),
        vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Assign, "="),
            Token::new(TokenKind::Minus, "-"),
            Token::new(TokenKind::IntegerLiteral, "1"),
            Token::new(TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_edge_non_ascii_letters_are_illegal() {
    assert_eq!(
        tokenize("naïve"),
        vec![
            Token::new(TokenKind::Identifier, "na"),
            Token::illegal("ï"),
            Token::new(TokenKind::Identifier, "ve"),
        ]
    );
}

#[test]
fn test_edge_number_then_identifier() {
    assert_eq!(
        tokenize("12abc"),
        vec![
            Token::new(TokenKind::IntegerLiteral, "12"),
            Token::new(TokenKind::Identifier, "abc"),
        ]
    );
}

#[test]
fn test_edge_crlf_source_round_trips_with_option() {
    let source = "class A\r\n{\r\n}\r\n";
    let options = ScanOptions {
        crlf_whitespace: true,
    };
    let tokens: Vec<_> = Scanner::with_options(source, options).tokens().collect();
    assert_eq!(concat(&tokens), source);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));
}

// ==================== PROPERTIES ====================

#[test]
fn test_property_literals_reconstruct_input() {
    proptest!(|(input in "\\PC{0,200}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(concat(&tokens), input);
    });
}

#[test]
fn test_property_ascii_literals_reconstruct_input() {
    proptest!(|(input in "[\\x00-\\x7f]{0,200}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(concat(&tokens), input);
    });
}

#[test]
fn test_property_terminates_within_bound() {
    proptest!(|(input in "[\\x00-\\x7f]{0,200}")| {
        let (_, calls) = scan_counting(&input);
        prop_assert!(calls <= input.chars().count() + 1);
    });
}

#[test]
fn test_property_tokens_are_non_empty() {
    proptest!(|(input in "[ -~\\t\\n\\r]{0,200}")| {
        for token in tokenize(&input) {
            prop_assert!(!token.literal.is_empty());
            prop_assert!(!token.is_eof());
        }
    });
}

#[test]
fn test_property_identifier_runs_are_single_tokens() {
    proptest!(|(input in "[a-zA-Z][a-zA-Z0-9_]{0,40}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert!(tokens[0].kind == TokenKind::Identifier || tokens[0].kind.is_keyword());
    });
}

#[test]
fn test_property_decimal_numbers_are_integers() {
    proptest!(|(input in "[0-9]{1,30}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::IntegerLiteral, input.clone())]);
    });
}

#[test]
fn test_property_symbol_runs_round_trip() {
    proptest!(|(input in "[=/*>]{1,6}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(concat(&tokens), input);
        for token in &tokens {
            if token.kind == TokenKind::Illegal {
                prop_assert_eq!(token.literal.as_str(), ">");
            }
        }
    });
}

#[test]
fn test_property_known_symbol_chars_never_illegal() {
    proptest!(|(input in "[-+*/:,;{}%().=\\[\\]\"]{1,12}")| {
        let tokens = tokenize(&input);
        prop_assert_eq!(concat(&tokens), input);
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));
        prop_assert!(tokens
            .iter()
            .all(|t| t.literal.chars().count() <= TokenKind::MAX_SYMBOL_LEN));
    });
}

#[test]
fn test_property_eof_is_idempotent() {
    proptest!(|(input in "[ -~]{0,50}", extra in 1usize..10)| {
        let mut scanner = Scanner::new(&input);
        while !scanner.scan().is_eof() {}
        for _ in 0..extra {
            prop_assert_eq!(scanner.scan(), Token::eof());
        }
    });
}
