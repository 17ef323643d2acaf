use crate::token::Token;

/// Sequential view over a classified token list with one token of lookahead.
///
/// Reading past the end yields an EOF sentinel instead of failing, and the
/// cursor never moves beyond the last token.
#[derive(Debug, Clone)]
pub struct TokenSource {
    tokens: Vec<Token>,
    position: usize,
    eof: Token,
}

impl TokenSource {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
            eof: Token::eof(),
        }
    }

    pub fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Looks `offset` tokens past the current one without consuming anything.
    pub fn peek_nth(&self, offset: usize) -> &Token {
        self.tokens.get(self.position + offset).unwrap_or(&self.eof)
    }

    pub fn advance(&mut self) -> Token {
        match self.tokens.get(self.position) {
            Some(token) => {
                self.position += 1;
                token.clone()
            }
            None => self.eof.clone(),
        }
    }

    /// Consumes the current token when its category or lexeme equals `expected`.
    pub fn match_token(&mut self, expected: &str) -> bool {
        if self.peek().matches(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.position);
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn source() -> TokenSource {
        TokenSource::new(vec![
            Token::new(1, TokenKind::Identifier, "x"),
            Token::symbol(":="),
        ])
    }

    #[test]
    fn advance_stops_at_the_end() {
        let mut source = source();
        assert_eq!(source.advance().lexeme, "x");
        assert_eq!(source.advance().lexeme, ":=");
        assert!(source.advance().is_eof());
        assert!(source.advance().is_eof());
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn match_token_leaves_position_on_failure() {
        let mut source = source();
        assert!(!source.match_token("::"));
        assert_eq!(source.position(), 0);
        assert!(source.match_token("identifier"));
        assert!(source.match_token(":="));
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn peek_nth_sees_past_the_current_token() {
        let source = source();
        assert_eq!(source.peek_nth(1).lexeme, ":=");
        assert!(source.peek_nth(2).is_eof());
    }
}
