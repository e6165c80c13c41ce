//! Token definitions for the scanner.
//!
//! A [`Token`] is a classified span of source text: a [`TokenKind`] plus the
//! exact text that was matched. Keyword and symbol kinds carry a canonical
//! spelling, which drives both recognition and display.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The closed set of lexical categories produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    /// `using`
    Using,
    /// `namespace`
    Namespace,
    /// `public`
    PublicModifier,
    /// `private`
    PrivateModifier,
    /// `protected`
    ProtectedModifier,
    /// `class`
    Class,
    /// `var`
    Var,
    /// `return`
    Return,
    /// `null`
    Null,
    /// `if`
    If,
    /// `false`
    False,
    /// `true`
    True,
    /// `new`
    New,

    /// Any non-keyword identifier.
    Identifier,

    // Literals
    /// Digits with no `.` (hex-looking text included).
    IntegerLiteral,
    /// Digits containing at least one `.`.
    RealLiteral,
    /// The `"` marker. String bodies are not scanned as a unit.
    StringLiteral,

    // Operators
    /// `+`
    Add,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Divide,
    /// `%`
    Percent,
    /// `=`
    Assign,
    /// `==`
    Equal,
    /// `=>`
    LambdaArrow,

    // Punctuation
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `(`
    OpenParens,
    /// `)`
    CloseParens,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,

    // Comment markers
    /// `/*`
    OpenMultilineComments,
    /// `*/`
    CloseMultilineComments,
    /// `//`
    OpenSingleComments,

    // Sentinels
    /// A maximal run of whitespace characters.
    Whitespace,
    /// End of input. Returned forever once the buffer is exhausted.
    EndOfInput,
    /// A character (or unmatched one-character symbol) with no other kind.
    Illegal,
}

/// Coarse grouping of [`TokenKind`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Reserved words.
    Keyword,
    /// User names.
    Identifier,
    /// Numeric literals and the string marker.
    Literal,
    /// Arithmetic, assignment and comparison operators.
    Operator,
    /// Delimiters and separators.
    Punctuation,
    /// `//`, `/*` and `*/`.
    CommentMarker,
    /// Whitespace runs.
    Whitespace,
    /// End of input.
    EndOfInput,
    /// Unrecognized input.
    Illegal,
}

impl TokenKind {
    /// Every keyword kind, in table order.
    pub const KEYWORDS: [TokenKind; 13] = [
        TokenKind::Using,
        TokenKind::Namespace,
        TokenKind::PublicModifier,
        TokenKind::PrivateModifier,
        TokenKind::ProtectedModifier,
        TokenKind::Class,
        TokenKind::Var,
        TokenKind::Return,
        TokenKind::Null,
        TokenKind::If,
        TokenKind::False,
        TokenKind::True,
        TokenKind::New,
    ];

    /// Every kind recognized by the special-symbol scanner.
    pub const SYMBOLS: [TokenKind; 22] = [
        TokenKind::Add,
        TokenKind::Minus,
        TokenKind::Mult,
        TokenKind::Divide,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::StringLiteral,
        TokenKind::Percent,
        TokenKind::OpenParens,
        TokenKind::CloseParens,
        TokenKind::Dot,
        TokenKind::OpenMultilineComments,
        TokenKind::CloseMultilineComments,
        TokenKind::LambdaArrow,
        TokenKind::Equal,
        TokenKind::OpenSingleComments,
        TokenKind::Assign,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
    ];

    /// Length in characters of the longest spelling in [`TokenKind::SYMBOLS`].
    pub const MAX_SYMBOL_LEN: usize = 2;

    /// Returns the canonical source spelling of this kind.
    ///
    /// Kinds whose text varies (identifiers, numbers, whitespace, illegal
    /// characters) and `EndOfInput` have no fixed spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use vala_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::LambdaArrow.spelling(), Some("=>"));
    /// assert_eq!(TokenKind::Identifier.spelling(), None);
    /// ```
    pub fn spelling(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Using => "using",
            TokenKind::Namespace => "namespace",
            TokenKind::PublicModifier => "public",
            TokenKind::PrivateModifier => "private",
            TokenKind::ProtectedModifier => "protected",
            TokenKind::Class => "class",
            TokenKind::Var => "var",
            TokenKind::Return => "return",
            TokenKind::Null => "null",
            TokenKind::If => "if",
            TokenKind::False => "false",
            TokenKind::True => "true",
            TokenKind::New => "new",
            TokenKind::StringLiteral => "\"",
            TokenKind::Add => "+",
            TokenKind::Minus => "-",
            TokenKind::Mult => "*",
            TokenKind::Divide => "/",
            TokenKind::Percent => "%",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::LambdaArrow => "=>",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Dot => ".",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenParens => "(",
            TokenKind::CloseParens => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenMultilineComments => "/*",
            TokenKind::CloseMultilineComments => "*/",
            TokenKind::OpenSingleComments => "//",
            TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::RealLiteral
            | TokenKind::Whitespace
            | TokenKind::EndOfInput
            | TokenKind::Illegal => return None,
        };
        Some(text)
    }

    /// Returns the upper-case display name used when printing tokens.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Using => "USING",
            TokenKind::Namespace => "NAMESPACE",
            TokenKind::PublicModifier => "PUBLIC_MODIFIER",
            TokenKind::PrivateModifier => "PRIVATE_MODIFIER",
            TokenKind::ProtectedModifier => "PROTECTED_MODIFIER",
            TokenKind::Class => "CLASS",
            TokenKind::Var => "VAR",
            TokenKind::Return => "RETURN",
            TokenKind::Null => "NULL",
            TokenKind::If => "IF_STMT",
            TokenKind::False => "FALSE",
            TokenKind::True => "TRUE",
            TokenKind::New => "NEW",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::RealLiteral => "REAL_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::Add => "OP_SUM",
            TokenKind::Minus => "OP_MINUS",
            TokenKind::Mult => "OP_MULT",
            TokenKind::Divide => "OP_DIVIDE",
            TokenKind::Percent => "PERCENT",
            TokenKind::Assign => "ASSIGN_OP",
            TokenKind::Equal => "EQUAL",
            TokenKind::LambdaArrow => "LAMBDA_ARROW",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Dot => "DOT",
            TokenKind::OpenBrace => "OPEN_BRACE",
            TokenKind::CloseBrace => "CLOSE_BRACE",
            TokenKind::OpenParens => "OPEN_PARENS",
            TokenKind::CloseParens => "CLOSE_PARENS",
            TokenKind::OpenBracket => "OPEN_BRACKET",
            TokenKind::CloseBracket => "CLOSE_BRACKET",
            TokenKind::OpenMultilineComments => "OPEN_MULTILINE_COMMENTS",
            TokenKind::CloseMultilineComments => "CLOSE_MULTILINE_COMMENTS",
            TokenKind::OpenSingleComments => "OPEN_SINGLE_COMMENTS",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "ILLEGAL",
        }
    }

    /// Returns the coarse category this kind belongs to.
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Using
            | TokenKind::Namespace
            | TokenKind::PublicModifier
            | TokenKind::PrivateModifier
            | TokenKind::ProtectedModifier
            | TokenKind::Class
            | TokenKind::Var
            | TokenKind::Return
            | TokenKind::Null
            | TokenKind::If
            | TokenKind::False
            | TokenKind::True
            | TokenKind::New => TokenCategory::Keyword,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::IntegerLiteral | TokenKind::RealLiteral | TokenKind::StringLiteral => {
                TokenCategory::Literal
            },
            TokenKind::Add
            | TokenKind::Minus
            | TokenKind::Mult
            | TokenKind::Divide
            | TokenKind::Percent
            | TokenKind::Assign
            | TokenKind::Equal
            | TokenKind::LambdaArrow => TokenCategory::Operator,
            TokenKind::Colon
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Dot
            | TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::OpenParens
            | TokenKind::CloseParens
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket => TokenCategory::Punctuation,
            TokenKind::OpenMultilineComments
            | TokenKind::CloseMultilineComments
            | TokenKind::OpenSingleComments => TokenCategory::CommentMarker,
            TokenKind::Whitespace => TokenCategory::Whitespace,
            TokenKind::EndOfInput => TokenCategory::EndOfInput,
            TokenKind::Illegal => TokenCategory::Illegal,
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        self.category() == TokenCategory::Keyword
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| spelling_table(&TokenKind::KEYWORDS));

static SYMBOLS: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| spelling_table(&TokenKind::SYMBOLS));

fn spelling_table(kinds: &[TokenKind]) -> FxHashMap<&'static str, TokenKind> {
    kinds
        .iter()
        .filter_map(|&kind| kind.spelling().map(|text| (text, kind)))
        .collect()
}

/// Looks up an identifier run in the keyword table.
///
/// Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use vala_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("class"), Some(TokenKind::Class));
/// assert_eq!(keyword_from_ident("Class"), None);
/// assert_eq!(keyword_from_ident("classroom"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS.get(text).copied()
}

/// Looks up a special-symbol run in the symbol table.
pub fn symbol_from_str(text: &str) -> Option<TokenKind> {
    SYMBOLS.get(text).copied()
}

/// A classified piece of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// What the text was classified as.
    pub kind: TokenKind,
    /// The exact text matched, empty only for `EndOfInput`.
    pub literal: String,
}

impl Token {
    /// Creates a token of the given kind.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    /// An illegal token carrying the offending text.
    pub fn illegal(literal: impl Into<String>) -> Self {
        Self::new(TokenKind::Illegal, literal)
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Returns true for whitespace tokens.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Whitespace => write!(f, "Token{{kind: {}}}", self.kind),
            _ => write!(f, "Token{{kind: {}, literal: {}}}", self.kind, self.literal),
        }
    }
}
