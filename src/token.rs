/// Lexeme substituted when an identifier index is missing from the identifier table.
pub const UNKNOWN_IDENTIFIER: &str = "UNKNOWN_ID";
/// Lexeme substituted when a keyword index is missing from the keyword table.
pub const UNKNOWN_KEYWORD: &str = "UNKNOWN_KW";
/// Lexeme substituted when a number index is missing from the literal table.
pub const UNKNOWN_LITERAL: &str = "UNKNOWN_LIT";
/// Lexeme given to tokens whose category the loader does not recognise.
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CAT";

/// Index carried by punctuation, operators and the EOF sentinel.
pub const NO_INDEX: i64 = -1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Keyword,
    Number,

    // Punctuation and operators; the lexeme doubles as the category
    Symbol,

    // Anything else the lexer classified, e.g. `<4,string>`
    Other(String),

    EOF,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub index: i64,
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(index: i64, kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            index,
            kind,
            lexeme: lexeme.into(),
        }
    }

    pub fn symbol(lexeme: impl Into<String>) -> Self {
        Self::new(NO_INDEX, TokenKind::Symbol, lexeme)
    }

    pub fn eof() -> Self {
        Self::new(NO_INDEX, TokenKind::EOF, "EOF")
    }

    /// Category tag as written in the token stream.
    pub fn category(&self) -> &str {
        match &self.kind {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Number => "number",
            TokenKind::Symbol => &self.lexeme,
            TokenKind::Other(category) => category,
            TokenKind::EOF => "EOF",
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EOF)
    }

    /// True when `expected` names either this token's category or its lexeme.
    pub fn matches(&self, expected: &str) -> bool {
        self.category() == expected || self.lexeme == expected
    }

    /// Lexeme fit for display, or `None` when it is empty or a lookup sentinel.
    pub fn display_lexeme(&self) -> Option<&str> {
        match self.lexeme.as_str() {
            "" | UNKNOWN_IDENTIFIER | UNKNOWN_KEYWORD | UNKNOWN_LITERAL => None,
            lexeme => Some(lexeme),
        }
    }
}
