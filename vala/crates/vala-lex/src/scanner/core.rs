//! Core scanner implementation.
//!
//! This module contains the Scanner struct and its dispatch loop.

use std::io::{self, Read};

use tracing::trace;

use crate::chars::CharClass;
use crate::cursor::Cursor;
use crate::token::Token;

/// Knobs that change how input is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Treat `'\r'` as whitespace so CRLF input produces no illegal tokens.
    pub crlf_whitespace: bool,
}

impl ScanOptions {
    /// Whitespace predicate, widened to `'\r'` when enabled.
    #[inline]
    pub fn is_whitespace(self, ch: char) -> bool {
        crate::chars::is_whitespace(ch) || (self.crlf_whitespace && ch == '\r')
    }
}

/// Scanner for C#/Vala-like source text.
///
/// The scanner owns the whole input and hands out one [`Token`] per call to
/// [`Scanner::scan`], in document order. Whitespace and comment markers are
/// returned like any other token. Once the input is exhausted every call
/// returns the end-of-input token.
///
/// # Example
///
/// ```
/// use vala_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("var x");
/// assert_eq!(scanner.scan().kind, TokenKind::Var);
/// assert_eq!(scanner.scan().kind, TokenKind::Whitespace);
/// assert_eq!(scanner.scan().literal, "x");
/// assert!(scanner.scan().is_eof());
/// assert!(scanner.scan().is_eof());
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    /// Character cursor over the input.
    pub(crate) cursor: Cursor,

    /// Classification options.
    pub(crate) options: ScanOptions,
}

impl Scanner {
    /// Creates a scanner over `source` with default options.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    /// Creates a scanner over `source` with the given options.
    pub fn with_options(source: &str, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
        }
    }

    /// Creates a scanner over raw bytes.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD, which later scans
    /// as an illegal token.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(bytes))
    }

    /// Reads `reader` to the end and creates a scanner over its contents.
    ///
    /// # Errors
    ///
    /// Returns any error produced while reading.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::from_bytes(&bytes))
    }

    /// Returns the options in effect.
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// Replaces the options used for every following `scan` call.
    ///
    /// Meant for scanners built with [`Scanner::from_reader`] or
    /// [`Scanner::from_bytes`], before the first token is scanned.
    pub fn set_options(&mut self, options: ScanOptions) {
        self.options = options;
    }

    /// Returns the character index of the next token to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Scans the next token.
    ///
    /// The first character is read only to pick a sub-scanner, then pushed
    /// back; the sub-scanner reads it again as part of its own run.
    pub fn scan(&mut self) -> Token {
        let Some(ch) = self.cursor.bump() else {
            return Token::eof();
        };

        let Some(class) = self.classify(ch) else {
            trace!(position = self.cursor.position() - 1, ch = ?ch, "illegal character");
            return Token::illegal(ch);
        };

        self.cursor.unbump();
        match class {
            CharClass::Whitespace => self.scan_whitespace(),
            CharClass::Letter => self.scan_identifier(),
            CharClass::SpecialSymbol => self.scan_special_symbol(),
            CharClass::Digit => self.scan_number(),
        }
    }

    /// Returns an iterator over the remaining tokens, ending before
    /// end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use vala_lex::{Scanner, TokenKind};
    ///
    /// let mut scanner = Scanner::new("a = 1");
    /// let kinds: Vec<_> = scanner.tokens().map(|t| t.kind).collect();
    /// assert_eq!(kinds.len(), 5);
    /// assert_eq!(kinds[2], TokenKind::Assign);
    /// assert!(scanner.scan().is_eof());
    /// ```
    pub fn tokens(&mut self) -> impl Iterator<Item = Token> + '_ {
        std::iter::from_fn(move || {
            let token = self.scan();
            (!token.is_eof()).then_some(token)
        })
    }

    /// Classifies `ch`, honouring the scanner options.
    fn classify(&self, ch: char) -> Option<CharClass> {
        if self.options.is_whitespace(ch) {
            return Some(CharClass::Whitespace);
        }
        CharClass::of(ch)
    }
}
