//! Three-address code generation over a tree rebuilt from tree text.
//!
//! Only assignments and operator expressions produce instructions; loops and
//! conditionals are walked for nothing but the expressions directly under the
//! statement node. Translation is limited to the body of the first function.

use tracing::{debug, warn};

use crate::tree::NodeKind;
use crate::tree_text::SyntaxNode;

const ASSIGN_OPERATOR: &str = ":=";

/// One generation run: an instruction buffer and a temporary counter that is
/// never reset while the run lasts.
#[derive(Debug, Default)]
pub struct TacGenerator {
    code: Vec<String>,
    next_temp: usize,
}

impl TacGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates the compound statement of the first `Function` under `root`.
    pub fn generate(mut self, root: &SyntaxNode) -> Vec<String> {
        let mut functions = root
            .children
            .iter()
            .filter(|child| child.kind == NodeKind::Function);

        match functions.next() {
            Some(function) => {
                if let Some(body) = function
                    .children
                    .iter()
                    .find(|child| child.kind == NodeKind::CompStmt)
                {
                    self.process(body);
                }
                let skipped = functions.count();
                if skipped > 0 {
                    warn!(skipped, "only the first function is translated");
                }
            }
            None => debug!("tree has no function to translate"),
        }

        self.code
    }

    fn new_temp(&mut self) -> String {
        let temp = format!("t{}", self.next_temp);
        self.next_temp += 1;
        temp
    }

    fn emit(&mut self, instruction: String) {
        debug!(%instruction, "emit");
        self.code.push(instruction);
    }

    /// Returns the place holding the node's result, empty when it has none.
    fn process(&mut self, node: &SyntaxNode) -> String {
        match &node.kind {
            NodeKind::Identifier | NodeKind::Number | NodeKind::Operator => node.place(),
            NodeKind::Expr => self.expr(node),
            NodeKind::Rvalue | NodeKind::Mag | NodeKind::Term => self.operator_chain(node),
            NodeKind::Factor => self.factor(node),
            NodeKind::StmtList | NodeKind::Stmt | NodeKind::CompStmt => {
                for child in &node.children {
                    self.process(child);
                }
                String::new()
            }
            NodeKind::Program
            | NodeKind::Function
            | NodeKind::FunctionName
            | NodeKind::Type
            | NodeKind::ArgList
            | NodeKind::ArgListPrime
            | NodeKind::Arg
            | NodeKind::OpenBrace
            | NodeKind::CloseBrace
            | NodeKind::ForStmt
            | NodeKind::WhileStmt
            | NodeKind::StmtPrime
            | NodeKind::Match
            | NodeKind::Open
            | NodeKind::OpenPrime
            | NodeKind::Declaration
            | NodeKind::IdentList
            | NodeKind::Comma
            | NodeKind::Keyword
            | NodeKind::Separator
            | NodeKind::OpenParen
            | NodeKind::CloseParen
            | NodeKind::Token
            | NodeKind::Unknown(_) => String::new(),
        }
    }

    fn expr(&mut self, node: &SyntaxNode) -> String {
        match node.children.as_slice() {
            [left, operator, right] if operator.kind == NodeKind::Operator => {
                let op = operator.place();
                let left = self.process(left);
                let right = self.process(right);
                if op == ASSIGN_OPERATOR {
                    self.emit(format!("{left} := {right}"));
                    left
                } else {
                    self.binary(&left, &op, &right)
                }
            }
            [first, ..] => self.process(first),
            [] => String::new(),
        }
    }

    /// Folds `operand (Operator operand)*` left to right, one temporary per operator.
    fn operator_chain(&mut self, node: &SyntaxNode) -> String {
        let Some((first, rest)) = node.children.split_first() else {
            return String::new();
        };
        let mut place = self.process(first);
        for pair in rest.chunks_exact(2) {
            let (operator, operand) = (&pair[0], &pair[1]);
            let right = self.process(operand);
            place = self.binary(&place, &operator.place(), &right);
        }
        place
    }

    fn factor(&mut self, node: &SyntaxNode) -> String {
        match node.children.as_slice() {
            [open, inner, _] if open.kind == NodeKind::OpenParen => self.process(inner),
            [first, ..] => self.process(first),
            [] => String::new(),
        }
    }

    fn binary(&mut self, left: &str, op: &str, right: &str) -> String {
        let temp = self.new_temp();
        self.emit(format!("{temp} := {left} {op} {right}"));
        temp
    }
}

pub fn generate(root: &SyntaxNode) -> Vec<String> {
    TacGenerator::new().generate(root)
}
