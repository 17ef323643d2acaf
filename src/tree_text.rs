//! Rebuilds a tree from the text produced by [`crate::tree::render`].
//!
//! Indentation is the only structural signal: a line becomes a child of the
//! closest preceding line that is indented less than it is. Token indices and
//! categories are not part of the text, so only kinds, values and shape survive.

use thiserror::Error;

use crate::tree::{NodeKind, TreeNode};

mod line;

pub use line::{TreeLine, parse_line};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeTextError {
    #[error("Tree text contains no nodes")]
    Empty,
    #[error("Line {line} starts a second root node")]
    MultipleRoots { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, value: Option<String>) -> Self {
        Self {
            kind,
            value,
            children: Vec::new(),
        }
    }

    /// Value of a leaf, or an empty place for anything without one.
    pub fn place(&self) -> String {
        self.value.clone().unwrap_or_default()
    }
}

impl From<TreeLine<'_>> for SyntaxNode {
    fn from(line: TreeLine<'_>) -> Self {
        let Ok(kind) = line.kind.parse::<NodeKind>();
        Self::new(kind, line.value.map(str::to_string))
    }
}

impl TreeNode for SyntaxNode {
    fn kind(&self) -> &NodeKind {
        &self.kind
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

pub fn read_tree(text: &str) -> Result<SyntaxNode, TreeTextError> {
    // Open nodes paired with their indentation; a node is attached to its
    // parent once a line at the same or a shallower indentation closes it.
    let mut open: Vec<(SyntaxNode, usize)> = Vec::new();

    for (number, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let line = parse_line(raw);

        while let Some((_, indent)) = open.last()
            && *indent >= line.indent
        {
            let Some((node, _)) = open.pop() else { break };
            match open.last_mut() {
                Some((parent, _)) => parent.children.push(node),
                None => return Err(TreeTextError::MultipleRoots { line: number + 1 }),
            }
        }
        open.push((SyntaxNode::from(line), line.indent));
    }

    let mut root = None;
    while let Some((node, _)) = open.pop() {
        match open.last_mut() {
            Some((parent, _)) => parent.children.push(node),
            None => root = Some(node),
        }
    }
    root.ok_or(TreeTextError::Empty)
}
