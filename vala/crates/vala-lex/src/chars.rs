//! Character classes used by the scanner.
//!
//! All predicates are fixed ASCII ranges. Non-ASCII characters belong to no
//! class and scan as illegal.

/// The class of a token's first character, which selects the sub-scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Space, tab or newline.
    Whitespace,
    /// `A-Z` or `a-z`.
    Letter,
    /// Printable ASCII punctuation except `_`.
    SpecialSymbol,
    /// `0-9`.
    Digit,
}

impl CharClass {
    /// Classifies a character, or returns `None` if it starts no token.
    ///
    /// # Example
    ///
    /// ```
    /// use vala_lex::chars::CharClass;
    ///
    /// assert_eq!(CharClass::of('a'), Some(CharClass::Letter));
    /// assert_eq!(CharClass::of('='), Some(CharClass::SpecialSymbol));
    /// assert_eq!(CharClass::of('_'), None);
    /// assert_eq!(CharClass::of('\r'), None);
    /// ```
    pub fn of(ch: char) -> Option<Self> {
        if is_whitespace(ch) {
            Some(CharClass::Whitespace)
        } else if is_letter(ch) {
            Some(CharClass::Letter)
        } else if is_special_symbol(ch) {
            Some(CharClass::SpecialSymbol)
        } else if is_digit(ch) {
            Some(CharClass::Digit)
        } else {
            None
        }
    }
}

/// Space, tab or newline. Carriage return is deliberately excluded.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

/// ASCII letter.
#[inline]
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Upper-case hexadecimal digit (`0-9`, `A-F`).
#[inline]
pub fn is_hex_digit(ch: char) -> bool {
    matches!(ch, '0'..='9' | 'A'..='F')
}

/// Printable ASCII punctuation or symbol, excluding `_`.
///
/// Covers `!`–`/`, `:`–`?`, `[`–`` ` `` and `{`–`~`.
///
/// # Example
///
/// ```
/// use vala_lex::chars::is_special_symbol;
///
/// assert!(is_special_symbol('/'));
/// assert!(is_special_symbol('`'));
/// assert!(!is_special_symbol('_'));
/// assert!(!is_special_symbol('@'));
/// ```
#[inline]
pub fn is_special_symbol(ch: char) -> bool {
    matches!(ch, '!'..='/' | ':'..='?' | '['..='`' | '{'..='~') && ch != '_'
}

/// Characters that may follow the first letter of an identifier.
#[inline]
pub fn is_ident_continue(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || ch == '_'
}

/// Characters that may follow the first digit of a number literal.
#[inline]
pub fn is_number_continue(ch: char) -> bool {
    is_digit(ch) || is_hex_digit(ch) || ch == 'x' || ch == '.'
}
