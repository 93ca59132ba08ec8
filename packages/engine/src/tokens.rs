//! Token definitions for path-expression lexical analysis
//!
//! Tokens are produced by the tokenizer, consumed immediately by the parsers and
//! never retained in the AST.

/// Classified lexeme
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Structural tokens
    /// Root identifier (`$`)
    Root,
    /// Current node identifier (`@`)
    Current,
    /// Child shorthand (`.`)
    Dot,
    /// Descendant shorthand (`..`)
    DoubleDot,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `?`
    Question,
    /// Wildcard (`*`)
    Star,

    // Literals
    /// Quoted string with escapes already decoded
    String(String),
    /// Integer literal that fits an `i64`
    Integer(i64),
    /// Decimal, exponent, negative-zero or oversized integer literal
    Number(f64),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // Operators
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    Not,

    /// Member-name shorthand or function name
    Identifier(String),

    /// End of input
    Eof,
}

/// Token plus the character range it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
}

impl Token {
    #[inline]
    #[must_use]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

impl TokenKind {
    /// Check if token is a comparison operator
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Equal
                | TokenKind::NotEqual
                | TokenKind::Less
                | TokenKind::LessEq
                | TokenKind::Greater
                | TokenKind::GreaterEq
        )
    }

    /// Short description used in diagnostics
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Root => "'$'",
            TokenKind::Current => "'@'",
            TokenKind::Dot => "'.'",
            TokenKind::DoubleDot => "'..'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Question => "'?'",
            TokenKind::Star => "'*'",
            TokenKind::String(_) => "string literal",
            TokenKind::Integer(_) => "integer literal",
            TokenKind::Number(_) => "number literal",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Null => "'null'",
            TokenKind::Equal => "'=='",
            TokenKind::NotEqual => "'!='",
            TokenKind::Less => "'<'",
            TokenKind::LessEq => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEq => "'>='",
            TokenKind::LogicalAnd => "'&&'",
            TokenKind::LogicalOr => "'||'",
            TokenKind::Not => "'!'",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Eof => "end of input",
        }
    }
}
