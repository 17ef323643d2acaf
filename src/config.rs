//! Locations of the files exchanged at each stage boundary.

use std::path::{Path, PathBuf};

pub const IDENTIFIERS_FILE: &str = "identifiers.txt";
pub const KEYWORDS_FILE: &str = "keywords.txt";
pub const LITERALS_FILE: &str = "literals.txt";
pub const TOKENS_FILE: &str = "tokens.txt";
pub const TREE_FILE: &str = "tree.txt";
pub const TAC_FILE: &str = "result.tac";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePaths {
    pub identifiers: PathBuf,
    pub keywords: PathBuf,
    pub literals: PathBuf,
    pub tokens: PathBuf,
    pub tree: PathBuf,
    pub tac: PathBuf,
}

impl StagePaths {
    /// Default file names resolved against `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            identifiers: dir.join(IDENTIFIERS_FILE),
            keywords: dir.join(KEYWORDS_FILE),
            literals: dir.join(LITERALS_FILE),
            tokens: dir.join(TOKENS_FILE),
            tree: dir.join(TREE_FILE),
            tac: dir.join(TAC_FILE),
        }
    }
}

impl Default for StagePaths {
    fn default() -> Self {
        Self::in_dir(Path::new(""))
    }
}
