//! vala-lex - Lexical scanner for a C#/Vala-like language
//!
//! This crate turns source text into a flat sequence of classified tokens.
//! It is a pull scanner: the caller asks for one token at a time and stops
//! at end of input.
//!
//! # Example Usage
//!
//! ```
//! use vala_lex::{Scanner, Token, TokenKind};
//!
//! let mut scanner = Scanner::new("var x = y => 1.5;");
//!
//! // Get tokens one at a time
//! assert_eq!(scanner.scan(), Token::new(TokenKind::Var, "var"));
//! assert_eq!(scanner.scan().kind, TokenKind::Whitespace);
//!
//! // Or iterate over everything before end of input
//! let significant: Vec<_> = scanner.tokens().filter(|t| !t.is_whitespace()).collect();
//! assert_eq!(significant[1].kind, TokenKind::Assign);
//! assert_eq!(significant[3].kind, TokenKind::LambdaArrow);
//! assert_eq!(significant[4].kind, TokenKind::RealLiteral);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions, keyword and symbol tables
//! - [`scanner`] - The scanner and its sub-scanners
//! - [`cursor`] - Random-access character cursor with pushback
//! - [`chars`] - ASCII character classes
//!
//! # Scanning Rules
//!
//! The first character of every token selects a sub-scanner:
//!
//! - **Whitespace** (space, tab, newline): one token per maximal run
//! - **Letter**: a run of letters, digits and `_`, then a keyword lookup
//! - **Special symbol** (printable punctuation except `_`): the longest
//!   known symbol at the start of the run, else a one-character `Illegal`
//! - **Digit**: a run of digits, `A-F`, `x` and `.`; real if it has a `.`
//!
//! Anything else becomes a one-character `Illegal` token. Nothing is ever
//! dropped: concatenating every literal reproduces the input.
//!
//! String and comment bodies are not consumed as units. Only the `"`,
//! `//`, `/*` and `*/` markers are recognized, and the text between them is
//! scanned like any other source.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use scanner::{ScanOptions, Scanner};
pub use token::{keyword_from_ident, symbol_from_str, Token, TokenCategory, TokenKind};

/// Scans `source` to the end and returns every token before end of input.
///
/// Whitespace tokens are included.
///
/// # Example
///
/// ```
/// use vala_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a   b");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Whitespace);
/// assert_eq!(tokens[1].literal, "   ");
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).tokens().collect()
}
