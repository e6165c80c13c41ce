//! Whitespace scanning.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl Scanner {
    /// Scans a maximal run of whitespace.
    ///
    /// The run ends at end of input or at the first non-whitespace
    /// character, which is left for the next call.
    pub(crate) fn scan_whitespace(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.bump();

        let options = self.options;
        self.cursor.eat_while(|c| options.is_whitespace(c));

        Token::new(TokenKind::Whitespace, self.cursor.slice_from(start))
    }
}
