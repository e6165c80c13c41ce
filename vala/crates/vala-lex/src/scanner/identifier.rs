//! Identifier and keyword scanning.

use crate::chars::is_ident_continue;
use crate::scanner::Scanner;
use crate::token::{keyword_from_ident, Token, TokenKind};

impl Scanner {
    /// Scans an identifier or keyword.
    ///
    /// Reads the leading letter and every following letter, digit or
    /// underscore, then looks the whole run up in the keyword table. There
    /// is no partial keyword matching: `classroom` is one identifier.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.bump();
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(start);
        let kind = keyword_from_ident(&text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text)
    }
}
