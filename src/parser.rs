//! Recursive-descent parser producing a concrete parse tree.
//!
//! Every non-terminal is one method returning the node it built. The grammar
//! separates fully paired conditionals (`Match`) from possibly unpaired ones
//! (`Open`, `OpenPrime`) so that a `Wagarna` always binds to the nearest
//! unpaired `Agar`.

use thiserror::Error;
use tracing::trace;

use crate::token::Token;
use crate::tree::{NodeKind, ParseTreeNode};

mod cursor;

pub use cursor::TokenSource;

const TYPE_NAMES: [&str; 5] = ["Adadi", "Ashriyal", "Harf", "Math", "Mantiqi"];
const RELATIONAL_OPERATORS: [&str; 7] = ["==", "<", ">", "<=", ">=", "!=", "<>"];
const ADDITIVE_OPERATORS: [&str; 2] = ["+", "-"];
const MULTIPLICATIVE_OPERATORS: [&str; 2] = ["*", "/"];

const IF_KEYWORD: &str = "Agar";
const ELSE_KEYWORD: &str = "Wagarna";
const FOR_KEYWORD: &str = "for";
const WHILE_KEYWORD: &str = "while";
const SEPARATOR: &str = "::";
const ASSIGN: &str = ":=";
const COMMA: &str = ",";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Parse error at token {position}: {message}")]
pub struct ParseError {
    pub position: usize,
    pub message: String,
}

impl ParseError {
    fn new(position: usize, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    source: TokenSource,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            source: TokenSource::new(tokens),
        }
    }

    /// Parses `Function*` until EOF under a synthetic `Program` root.
    pub fn parse_program(mut self) -> ParseResult<ParseTreeNode> {
        let mut program = ParseTreeNode::new(NodeKind::Program);
        while !self.source.peek().is_eof() {
            program.push(self.function()?);
        }
        Ok(program)
    }

    fn function(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Function);
        node.push(self.type_name()?);
        node.push(self.terminal(
            "identifier",
            NodeKind::FunctionName,
            "Expected identifier after type in function",
        )?);
        node.push(self.terminal("(", NodeKind::OpenParen, "Expected '(' in function")?);
        node.push(self.arg_list()?);
        node.push(self.terminal(")", NodeKind::CloseParen, "Expected ')'")?);
        node.push(self.comp_stmt()?);
        Ok(node)
    }

    fn type_name(&mut self) -> ParseResult<ParseTreeNode> {
        if TYPE_NAMES.contains(&self.source.peek().lexeme.as_str()) {
            Ok(self.take(NodeKind::Type))
        } else {
            Err(self.error("Expected a Type"))
        }
    }

    fn ident_list(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::IdentList);
        node.push(self.terminal(
            "identifier",
            NodeKind::Identifier,
            "Expected identifier in IdentList",
        )?);
        while self.source.peek().lexeme == COMMA {
            node.push(self.take(NodeKind::Comma));
            node.push(self.terminal(
                "identifier",
                NodeKind::Identifier,
                "Expected identifier after ','",
            )?);
        }
        Ok(node)
    }

    fn declaration(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Declaration);
        node.push(self.type_name()?);
        node.push(self.ident_list()?);
        self.expect(SEPARATOR, "Expected '::' at end of declaration")?;
        Ok(node)
    }

    fn arg(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Arg);
        node.push(self.type_name()?);
        node.push(self.terminal(
            "identifier",
            NodeKind::Identifier,
            "Expected identifier in argument",
        )?);
        Ok(node)
    }

    fn arg_list(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::ArgList);
        if self.source.peek().lexeme != ")" {
            node.push(self.arg()?);
            node.push(self.arg_list_prime()?);
        }
        Ok(node)
    }

    fn arg_list_prime(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::ArgListPrime);
        while self.source.peek().lexeme == COMMA {
            node.push(self.take(NodeKind::Comma));
            node.push(self.arg()?);
        }
        Ok(node)
    }

    fn comp_stmt(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::CompStmt);
        node.push(self.terminal("{", NodeKind::OpenBrace, "Expected '{'")?);
        node.push(self.stmt_list()?);
        node.push(self.terminal("}", NodeKind::CloseBrace, "Expected '}'")?);
        Ok(node)
    }

    fn stmt_list(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::StmtList);
        while !self.source.peek().is_eof() && self.source.peek().lexeme != "}" {
            node.push(self.stmt()?);
        }
        Ok(node)
    }

    fn for_stmt(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::ForStmt);
        node.push(self.terminal(FOR_KEYWORD, NodeKind::Keyword, "Expected 'for'")?);
        node.push(self.terminal("(", NodeKind::OpenParen, "Expected '('")?);
        node.push(self.expr()?);
        node.push(self.terminal(SEPARATOR, NodeKind::Separator, "Expected '::'")?);
        node.push(self.expr()?);
        node.push(self.terminal(SEPARATOR, NodeKind::Separator, "Expected '::'")?);
        node.push(self.expr()?);
        node.push(self.terminal(")", NodeKind::CloseParen, "Expected ')'")?);
        node.push(self.stmt()?);
        Ok(node)
    }

    fn while_stmt(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::WhileStmt);
        node.push(self.terminal(WHILE_KEYWORD, NodeKind::Keyword, "Expected 'while'")?);
        node.push(self.terminal("(", NodeKind::OpenParen, "Expected '('")?);
        node.push(self.expr()?);
        node.push(self.terminal(")", NodeKind::CloseParen, "Expected ')'")?);
        node.push(self.stmt()?);
        Ok(node)
    }

    fn stmt(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Stmt);
        let lexeme = self.source.peek().lexeme.clone();
        let starts_expression = self.source.peek().matches("identifier");
        match lexeme.as_str() {
            FOR_KEYWORD => node.push(self.for_stmt()?),
            WHILE_KEYWORD => node.push(self.while_stmt()?),
            SEPARATOR => node.push(self.take(NodeKind::Separator)),
            _ if starts_expression => {
                node.push(self.expr()?);
                node.push(self.terminal(
                    SEPARATOR,
                    NodeKind::Separator,
                    "Expected '::' after expression",
                )?);
            }
            IF_KEYWORD => {
                self.condition(&mut node, "Expected '(' after Agar")?;
                node.push(self.stmt_prime()?);
            }
            "{" => node.push(self.comp_stmt()?),
            _ => node.push(self.declaration()?),
        }
        Ok(node)
    }

    /// `'Agar' '(' Expr ')'`, appended to `node`.
    fn condition(&mut self, node: &mut ParseTreeNode, paren_message: &str) -> ParseResult<()> {
        node.push(self.terminal(IF_KEYWORD, NodeKind::Keyword, "Expected 'Agar'")?);
        node.push(self.terminal("(", NodeKind::OpenParen, paren_message)?);
        node.push(self.expr()?);
        node.push(self.terminal(")", NodeKind::CloseParen, "Expected ')'")?);
        Ok(())
    }

    fn stmt_prime(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::StmtPrime);
        let paired = self.speculate(|parser| {
            let (branch, keyword) = parser.matched_else()?;
            Ok((branch, keyword, parser.matched()?))
        });
        if let Some((branch, keyword, otherwise)) = paired {
            node.push(branch);
            node.push(keyword);
            node.push(otherwise);
        } else {
            node.push(self.open_prime()?);
        }
        Ok(node)
    }

    fn matched(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Match);
        if self.source.peek().lexeme == IF_KEYWORD {
            self.condition(&mut node, "Expected '('")?;
            node.push(self.matched()?);
            node.push(self.terminal(ELSE_KEYWORD, NodeKind::Keyword, "Expected 'Wagarna'")?);
            node.push(self.matched()?);
        } else if self.source.peek().is_eof() {
            return Err(self.error("Unexpected end of input in conditional"));
        } else {
            node.push(self.take(NodeKind::Token));
        }
        Ok(node)
    }

    fn open(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Open);
        self.condition(&mut node, "Expected '('")?;
        node.push(self.open_prime()?);
        Ok(node)
    }

    fn open_prime(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::OpenPrime);
        // `Open` always starts with `Agar`, so the chain continues only when one follows.
        let chained = self.speculate(|parser| {
            let parts = parser.matched_else()?;
            if parser.source.peek().lexeme == IF_KEYWORD {
                Ok(parts)
            } else {
                Err(parser.error("Expected 'Agar' after 'Wagarna'"))
            }
        });
        if let Some((branch, keyword)) = chained {
            node.push(branch);
            node.push(keyword);
            node.push(self.open()?);
        } else {
            node.push(self.stmt()?);
        }
        Ok(node)
    }

    /// `Match 'Wagarna'`.
    fn matched_else(&mut self) -> ParseResult<(ParseTreeNode, ParseTreeNode)> {
        let branch = self.matched()?;
        let keyword = self.terminal(ELSE_KEYWORD, NodeKind::Keyword, "Expected 'Wagarna'")?;
        Ok((branch, keyword))
    }

    /// Runs `attempt`, rewinding the cursor and discarding the error when it fails.
    fn speculate<T>(
        &mut self,
        attempt: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> Option<T> {
        let start = self.source.position();
        match attempt(self) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                trace!(start, %err, "alternative does not apply, rewinding");
                self.source.rewind(start);
                None
            }
        }
    }

    fn expr(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Expr);
        if self.source.peek().matches("identifier") && self.source.peek_nth(1).lexeme == ASSIGN {
            node.push(self.take(NodeKind::Identifier));
            node.push(self.take(NodeKind::Operator));
            node.push(self.expr()?);
        } else {
            node.push(self.rvalue()?);
        }
        Ok(node)
    }

    fn rvalue(&mut self) -> ParseResult<ParseTreeNode> {
        self.operator_chain(NodeKind::Rvalue, &RELATIONAL_OPERATORS, Self::mag)
    }

    fn mag(&mut self) -> ParseResult<ParseTreeNode> {
        self.operator_chain(NodeKind::Mag, &ADDITIVE_OPERATORS, Self::term)
    }

    fn term(&mut self) -> ParseResult<ParseTreeNode> {
        self.operator_chain(NodeKind::Term, &MULTIPLICATIVE_OPERATORS, Self::factor)
    }

    /// `operand (op operand)*` flattened into one node of `kind`.
    fn operator_chain(
        &mut self,
        kind: NodeKind,
        operators: &[&str],
        operand: fn(&mut Self) -> ParseResult<ParseTreeNode>,
    ) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(kind);
        node.push(operand(self)?);
        while operators.contains(&self.source.peek().lexeme.as_str()) {
            node.push(self.take(NodeKind::Operator));
            node.push(operand(self)?);
        }
        Ok(node)
    }

    fn factor(&mut self) -> ParseResult<ParseTreeNode> {
        let mut node = ParseTreeNode::new(NodeKind::Factor);
        let next = self.source.peek();
        if next.matches("(") {
            node.push(self.take(NodeKind::OpenParen));
            node.push(self.expr()?);
            node.push(self.terminal(")", NodeKind::CloseParen, "Expected ')'")?);
        } else if next.matches("identifier") {
            node.push(self.take(NodeKind::Identifier));
        } else if next.matches("number") {
            node.push(self.take(NodeKind::Number));
        } else {
            return Err(self.error("Expected Factor"));
        }
        Ok(node)
    }

    /// Consumes the current token unconditionally as a terminal node.
    fn take(&mut self, kind: NodeKind) -> ParseTreeNode {
        ParseTreeNode::terminal(kind, self.source.advance())
    }

    fn terminal(
        &mut self,
        expected: &str,
        kind: NodeKind,
        message: &str,
    ) -> ParseResult<ParseTreeNode> {
        let token = self.source.peek().clone();
        if self.source.match_token(expected) {
            Ok(ParseTreeNode::terminal(kind, token))
        } else {
            Err(self.error(message))
        }
    }

    fn expect(&mut self, expected: &str, message: &str) -> ParseResult<()> {
        if self.source.match_token(expected) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError::new(self.source.position(), message)
    }
}

pub fn parse_tokens(tokens: Vec<Token>) -> ParseResult<ParseTreeNode> {
    Parser::new(tokens).parse_program()
}
