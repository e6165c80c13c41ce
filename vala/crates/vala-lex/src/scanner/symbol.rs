//! Special-symbol scanning.
//!
//! Operators and punctuation are resolved greedy-then-shrink: the scanner
//! reads a run of special-symbol characters and takes the longest prefix of
//! it that is a known symbol, rewinding the cursor to just after that
//! prefix. `=>=` yields `=>` then `=`, and `/*/` yields `/*` then `/`.
//! A first character with no symbol of its own is illegal.
//!
//! No symbol is longer than [`TokenKind::MAX_SYMBOL_LEN`] characters, so the
//! run is never read past that length.

use tracing::trace;

use crate::chars::is_special_symbol;
use crate::cursor::CursorSnapshot;
use crate::scanner::Scanner;
use crate::token::{symbol_from_str, Token, TokenKind};

impl Scanner {
    /// Scans an operator, punctuation mark or comment marker.
    ///
    /// Falls back to an illegal token holding the first character when no
    /// prefix of the run is in the symbol table.
    pub(crate) fn scan_special_symbol(&mut self) -> Token {
        let start = self.cursor.position();
        self.cursor.bump();
        while self.cursor.position() - start < TokenKind::MAX_SYMBOL_LEN
            && self.cursor.first().is_some_and(is_special_symbol)
        {
            self.cursor.bump();
        }
        let run_len = self.cursor.position() - start;

        for len in (1..=run_len).rev() {
            self.cursor.restore(CursorSnapshot {
                position: start + len,
            });
            let text = self.cursor.slice_from(start);
            if let Some(kind) = symbol_from_str(&text) {
                if len < run_len {
                    trace!(position = start, text = %text, "shrank symbol run");
                }
                return Token::new(kind, text);
            }
        }

        let text = self.cursor.slice_from(start);
        trace!(position = start, text = %text, "illegal symbol");
        Token::illegal(text)
    }
}
