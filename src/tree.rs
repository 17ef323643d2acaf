//! Parse tree model and its box-drawing text rendering.
//!
//! The rendering is the interchange format between the parsing and generation
//! stages, so [`render`] and [`crate::tree_text::read_tree`] must stay in step:
//! one line per node, four columns per depth level, `+-- ` before a last child
//! and `|-- ` before any other child.

use std::fmt;
use std::str::FromStr;

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Function,
    FunctionName,
    Type,
    ArgList,
    ArgListPrime,
    Arg,
    CompStmt,
    OpenBrace,
    CloseBrace,
    StmtList,
    Stmt,
    ForStmt,
    WhileStmt,
    StmtPrime,
    Match,
    Open,
    OpenPrime,
    Declaration,
    IdentList,
    Identifier,
    Number,
    Comma,
    Keyword,
    Separator,
    OpenParen,
    CloseParen,
    Token,
    Expr,
    Rvalue,
    Mag,
    Term,
    Factor,
    Operator,
    Unknown(String),
}

impl NodeKind {
    pub fn label(&self) -> &str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Function => "Function",
            NodeKind::FunctionName => "Function Name",
            NodeKind::Type => "Type",
            NodeKind::ArgList => "ArgList",
            NodeKind::ArgListPrime => "ArgListPrime",
            NodeKind::Arg => "Arg",
            NodeKind::CompStmt => "CompStmt",
            NodeKind::OpenBrace => "Open Brace",
            NodeKind::CloseBrace => "Close Brace",
            NodeKind::StmtList => "StmtList",
            NodeKind::Stmt => "Stmt",
            NodeKind::ForStmt => "ForStmt",
            NodeKind::WhileStmt => "WhileStmt",
            NodeKind::StmtPrime => "StmtPrime",
            NodeKind::Match => "Match",
            NodeKind::Open => "Open",
            NodeKind::OpenPrime => "OpenPrime",
            NodeKind::Declaration => "Declaration",
            NodeKind::IdentList => "IdentList",
            NodeKind::Identifier => "Identifier",
            NodeKind::Number => "Number",
            NodeKind::Comma => "Comma",
            NodeKind::Keyword => "Keyword",
            NodeKind::Separator => "Separator",
            NodeKind::OpenParen => "Open Paren",
            NodeKind::CloseParen => "Close Paren",
            NodeKind::Token => "Token",
            NodeKind::Expr => "Expr",
            NodeKind::Rvalue => "Rvalue",
            NodeKind::Mag => "Mag",
            NodeKind::Term => "Term",
            NodeKind::Factor => "Factor",
            NodeKind::Operator => "Operator",
            NodeKind::Unknown(label) => label,
        }
    }
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let kind = match label {
            "Program" => NodeKind::Program,
            "Function" => NodeKind::Function,
            "Function Name" => NodeKind::FunctionName,
            "Type" => NodeKind::Type,
            "ArgList" => NodeKind::ArgList,
            "ArgListPrime" => NodeKind::ArgListPrime,
            "Arg" => NodeKind::Arg,
            "CompStmt" => NodeKind::CompStmt,
            "Open Brace" => NodeKind::OpenBrace,
            "Close Brace" => NodeKind::CloseBrace,
            "StmtList" => NodeKind::StmtList,
            "Stmt" => NodeKind::Stmt,
            "ForStmt" => NodeKind::ForStmt,
            "WhileStmt" => NodeKind::WhileStmt,
            "StmtPrime" => NodeKind::StmtPrime,
            "Match" => NodeKind::Match,
            "Open" => NodeKind::Open,
            "OpenPrime" => NodeKind::OpenPrime,
            "Declaration" => NodeKind::Declaration,
            "IdentList" => NodeKind::IdentList,
            "Identifier" => NodeKind::Identifier,
            "Number" => NodeKind::Number,
            "Comma" => NodeKind::Comma,
            "Keyword" => NodeKind::Keyword,
            "Separator" => NodeKind::Separator,
            "Open Paren" => NodeKind::OpenParen,
            "Close Paren" => NodeKind::CloseParen,
            "Token" => NodeKind::Token,
            "Expr" => NodeKind::Expr,
            "Rvalue" => NodeKind::Rvalue,
            "Mag" => NodeKind::Mag,
            "Term" => NodeKind::Term,
            "Factor" => NodeKind::Factor,
            "Operator" => NodeKind::Operator,
            other => NodeKind::Unknown(other.to_string()),
        };
        Ok(kind)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything that can be drawn as one line of tree text.
pub trait TreeNode: Sized {
    fn kind(&self) -> &NodeKind;
    fn value(&self) -> Option<&str>;
    fn children(&self) -> &[Self];

    fn label(&self) -> String {
        match self.value() {
            Some(value) => format!("{} ({value})", self.kind()),
            None => self.kind().to_string(),
        }
    }
}

/// A node built by the parser. Terminal nodes keep the token they were made from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTreeNode {
    pub kind: NodeKind,
    pub token: Option<Token>,
    pub children: Vec<ParseTreeNode>,
}

impl ParseTreeNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            token: None,
            children: Vec::new(),
        }
    }

    pub fn terminal(kind: NodeKind, token: Token) -> Self {
        Self {
            kind,
            token: Some(token),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: ParseTreeNode) {
        self.children.push(child);
    }
}

impl TreeNode for ParseTreeNode {
    fn kind(&self) -> &NodeKind {
        &self.kind
    }

    fn value(&self) -> Option<&str> {
        self.token.as_ref().and_then(Token::display_lexeme)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

/// Renders `root` and its descendants depth first, one node per line.
pub fn render<N: TreeNode>(root: &N) -> String {
    let mut output = String::new();
    render_node(root, "", true, &mut output);
    output
}

fn render_node<N: TreeNode>(node: &N, prefix: &str, is_last: bool, output: &mut String) {
    output.push_str(prefix);
    if !prefix.is_empty() {
        output.push_str(if is_last { "+-- " } else { "|-- " });
    }
    output.push_str(&node.label());
    output.push('\n');

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "|   " });
    let children = node.children();
    for (index, child) in children.iter().enumerate() {
        render_node(child, &child_prefix, index + 1 == children.len(), output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{TokenKind, UNKNOWN_IDENTIFIER};
    use indoc::indoc;

    fn leaf(kind: NodeKind, lexeme: &str) -> ParseTreeNode {
        ParseTreeNode::terminal(kind, Token::symbol(lexeme))
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for label in ["Function Name", "Open Paren", "Close Brace", "ArgListPrime", "Mag"] {
            let kind: NodeKind = label.parse().unwrap();
            assert!(!matches!(kind, NodeKind::Unknown(_)), "{label}");
            assert_eq!(kind.label(), label);
        }
        let unknown: NodeKind = "Elsewhere".parse().unwrap();
        assert_eq!(unknown, NodeKind::Unknown("Elsewhere".into()));
        assert_eq!(unknown.label(), "Elsewhere");
    }

    #[test]
    fn terminal_labels_show_the_lexeme() {
        let paren = leaf(NodeKind::CloseParen, ")");
        assert_eq!(paren.label(), "Close Paren ())");

        let missing = ParseTreeNode::terminal(
            NodeKind::Identifier,
            Token::new(4, TokenKind::Identifier, UNKNOWN_IDENTIFIER),
        );
        assert_eq!(missing.label(), "Identifier");
    }

    #[test]
    fn renders_connectors_by_last_child_status() {
        let mut inner = ParseTreeNode::new(NodeKind::Term);
        inner.push(leaf(NodeKind::Operator, "*"));
        let mut middle = ParseTreeNode::new(NodeKind::Mag);
        middle.push(inner);
        middle.push(leaf(NodeKind::Operator, "+"));
        let mut root = ParseTreeNode::new(NodeKind::Program);
        root.push(middle);
        root.push(leaf(NodeKind::Separator, "::"));

        let expected = indoc! {"
            Program
                |-- Mag
                |   |-- Term
                |   |   +-- Operator (*)
                |   +-- Operator (+)
                +-- Separator (::)
        "};
        assert_eq!(render(&root), expected);
    }
}
