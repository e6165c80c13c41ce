//! Number literal scanning.
//!
//! Numbers are classified by shape only. The literal text is passed through
//! unvalidated, so `1.2.3`, `12x` and `0xFF.A` are all accepted.

use crate::chars::is_number_continue;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Scans an integer or real literal.
    ///
    /// After the leading digit, consumes decimal digits, `A`-`F`, `x` and
    /// `.`. The literal is a [`TokenKind::RealLiteral`] if it contains a `.`,
    /// otherwise a [`TokenKind::IntegerLiteral`].
    pub(crate) fn scan_number(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.bump();
        self.cursor.eat_while(is_number_continue);

        let text = self.cursor.slice_from(start);
        let kind = if text.contains('.') {
            TokenKind::RealLiteral
        } else {
            TokenKind::IntegerLiteral
        };
        Token::new(kind, text)
    }
}
