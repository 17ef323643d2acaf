//! The two stages of the pipeline and the file I/O at their boundaries.
//!
//! The parse stage ends by producing tree text and the generate stage starts
//! from a tree file; nothing else passes between them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::StagePaths;
use crate::symbols::{SymbolTable, SymbolTables};
use crate::{parser, tac, token_stream, tree, tree_text};

pub fn load_symbol_tables(paths: &StagePaths) -> SymbolTables {
    SymbolTables {
        identifiers: SymbolTable::load(&paths.identifiers),
        keywords: SymbolTable::load(&paths.keywords),
        literals: SymbolTable::load(&paths.literals),
    }
}

/// Parses the token stream and returns the rendered parse tree.
pub fn parse_stage(paths: &StagePaths) -> Result<String> {
    let tables = load_symbol_tables(paths);
    let tokens = token_stream::load(&paths.tokens, &tables)?;
    let program = parser::parse_tokens(tokens)?;
    debug!(functions = program.children.len(), "parsed program");
    Ok(tree::render(&program))
}

/// Rebuilds the tree stored at `paths.tree` and translates it.
pub fn generate_stage(paths: &StagePaths) -> Result<Vec<String>> {
    let text = fs::read_to_string(&paths.tree)
        .with_context(|| format!("Failed to build parse tree from {}", paths.tree.display()))?;
    let root = tree_text::read_tree(&text).context("Failed to build parse tree")?;
    let code = tac::generate(&root);
    debug!(instructions = code.len(), "generated three-address code");
    Ok(code)
}

/// One instruction per line.
pub fn tac_text(code: &[String]) -> String {
    code.iter().map(|line| format!("{line}\n")).collect()
}

pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .with_context(|| format!("Unable to open file for writing: {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
