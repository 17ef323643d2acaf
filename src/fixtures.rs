//! Token streams written as plain words for unit tests.

use crate::token::{Token, TokenKind};

const KEYWORDS: [&str; 9] = [
    "Adadi", "Ashriyal", "Harf", "Math", "Mantiqi", "Agar", "Wagarna", "for", "while",
];

/// Classifies whitespace-separated words the way the lexer would: keywords by
/// name, digit runs as numbers, other words as identifiers, the rest as symbols.
pub fn tokens(source: &str) -> Vec<Token> {
    let mut identifiers: Vec<&str> = Vec::new();
    let mut tokens: Vec<Token> = source
        .split_whitespace()
        .map(|word| {
            if let Some(slot) = KEYWORDS.iter().position(|keyword| *keyword == word) {
                Token::new(slot as i64 + 1, TokenKind::Keyword, word)
            } else if word.chars().all(|c| c.is_ascii_digit()) {
                Token::new(-1, TokenKind::Number, word)
            } else if word.starts_with(|c: char| c.is_alphabetic() || c == '_') {
                let slot = identifiers
                    .iter()
                    .position(|name| *name == word)
                    .unwrap_or_else(|| {
                        identifiers.push(word);
                        identifiers.len() - 1
                    });
                Token::new(slot as i64 + 1, TokenKind::Identifier, word)
            } else {
                Token::symbol(word)
            }
        })
        .collect();
    tokens.push(Token::eof());
    tokens
}
