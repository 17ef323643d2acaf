//! Reader for the token stream written by the lexical analyzer.
//!
//! Tokens are whitespace separated and always bracketed: `<index,category>`
//! refers into one of the symbol tables, anything else between the brackets is
//! a literal symbol such as `<::>` or `<:=>`.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::symbols::{SymbolTable, SymbolTables};
use crate::token::{
    Token, TokenKind, UNKNOWN_CATEGORY, UNKNOWN_IDENTIFIER, UNKNOWN_KEYWORD, UNKNOWN_LITERAL,
};

mod error;

pub use error::{TokenStreamError, TokenStreamResult};

/// Splits `source` into tokens and appends the EOF sentinel.
pub fn tokenize(source: &str, tables: &SymbolTables) -> TokenStreamResult<Vec<Token>> {
    let mut tokens = Vec::new();
    for raw in source.split_whitespace() {
        let position = tokens.len();
        tokens.push(classify(raw, position, tables)?);
    }
    tokens.push(Token::eof());
    Ok(tokens)
}

pub fn load(path: &Path, tables: &SymbolTables) -> TokenStreamResult<Vec<Token>> {
    let source = fs::read_to_string(path).map_err(|source| TokenStreamError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = tokenize(&source, tables)?;
    debug!(path = %path.display(), count = tokens.len(), "loaded token stream");
    Ok(tokens)
}

fn classify(raw: &str, position: usize, tables: &SymbolTables) -> TokenStreamResult<Token> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .filter(|inner| !inner.is_empty())
        .ok_or_else(|| TokenStreamError::MalformedToken {
            token: raw.to_string(),
            position,
        })?;

    let Some((index, category)) = inner
        .split_once(',')
        .filter(|(index, category)| !index.is_empty() && !category.is_empty())
    else {
        return Ok(Token::symbol(inner));
    };

    let index: i64 = index.parse().map_err(|_| TokenStreamError::InvalidIndex {
        token: raw.to_string(),
        position,
    })?;

    let token = match category {
        "identifier" => resolve(
            index,
            TokenKind::Identifier,
            &tables.identifiers,
            UNKNOWN_IDENTIFIER,
        ),
        "keyword" => resolve(index, TokenKind::Keyword, &tables.keywords, UNKNOWN_KEYWORD),
        "number" => resolve(index, TokenKind::Number, &tables.literals, UNKNOWN_LITERAL),
        other => {
            warn!(position, category = other, "unrecognised token category");
            Token::new(index, TokenKind::Other(other.to_string()), UNKNOWN_CATEGORY)
        }
    };
    Ok(token)
}

fn resolve(index: i64, kind: TokenKind, table: &SymbolTable, sentinel: &str) -> Token {
    match table.get(index) {
        Some(lexeme) => Token::new(index, kind, lexeme),
        None => {
            warn!(index, ?kind, "symbol table lookup missed, substituting {sentinel}");
            Token::new(index, kind, sentinel)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> SymbolTables {
        SymbolTables {
            identifiers: ["x", "y"].into_iter().collect(),
            keywords: ["Adadi", "Agar"].into_iter().collect(),
            literals: ["3", "4"].into_iter().collect(),
        }
    }

    #[test]
    fn resolves_indexed_tokens_through_tables() {
        let tokens = tokenize("<1,keyword> <2,identifier>\n<1,number>", &tables()).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(1, TokenKind::Keyword, "Adadi"),
                Token::new(2, TokenKind::Identifier, "y"),
                Token::new(1, TokenKind::Number, "3"),
                Token::eof(),
            ]
        );
    }

    #[test]
    fn bracketed_symbols_are_their_own_category() {
        let tokens = tokenize("<{> <::> <:=> <<>> <<=> <,> <}>", &tables()).unwrap();
        let lexemes: Vec<_> = tokens.iter().map(|token| token.category()).collect();
        assert_eq!(lexemes, ["{", "::", ":=", "<>", "<=", ",", "}", "EOF"]);
        assert!(tokens[..7].iter().all(|token| token.kind == TokenKind::Symbol));
    }

    #[test]
    fn lookup_misses_use_sentinels() {
        let tokens =
            tokenize("<9,identifier> <9,keyword> <9,number> <2,string>", &tables()).unwrap();
        assert_eq!(tokens[0].lexeme, UNKNOWN_IDENTIFIER);
        assert_eq!(tokens[1].lexeme, UNKNOWN_KEYWORD);
        assert_eq!(tokens[2].lexeme, UNKNOWN_LITERAL);
        assert_eq!(tokens[3].lexeme, UNKNOWN_CATEGORY);
        assert_eq!(tokens[3].category(), "string");
    }

    #[test]
    fn empty_stream_is_just_eof() {
        let tokens = tokenize("  \n\n", &tables()).unwrap();
        assert_eq!(tokens, vec![Token::eof()]);
    }

    #[test]
    fn rejects_unbracketed_text() {
        let err = tokenize("<{> x", &tables()).unwrap_err();
        assert_eq!(err.to_string(), "Malformed token 'x' at position 1");
    }

    #[test]
    fn rejects_non_numeric_index() {
        let err = tokenize("<a,identifier>", &tables()).unwrap_err();
        assert!(matches!(err, TokenStreamError::InvalidIndex { position: 0, .. }));
    }
}
