//! Symbol tables handed over by the lexical analyzer.
//!
//! Each table is a plain text file with one entry per line; the 1-based line
//! number of a non-empty line is the index used by `<index,category>` tokens.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: HashMap<i64, String>,
}

impl SymbolTable {
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.is_empty())
            .zip(1..)
            .map(|(line, index)| (index, line.to_string()))
            .collect();
        Self { entries }
    }

    /// Loads a table, falling back to an empty one when the file is unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                let table = Self::parse(&text);
                debug!(path = %path.display(), entries = table.len(), "loaded symbol table");
                table
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "symbol table unavailable, using empty table");
                Self::default()
            }
        }
    }

    pub fn get(&self, index: i64) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .zip(1..)
            .map(|(entry, index)| (index, entry.into()))
            .collect();
        Self { entries }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    pub identifiers: SymbolTable,
    pub keywords: SymbolTable,
    pub literals: SymbolTable,
}
