use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenStreamError {
    #[error("Malformed token '{token}' at position {position}")]
    MalformedToken { token: String, position: usize },
    #[error("Invalid symbol table index in token '{token}' at position {position}")]
    InvalidIndex { token: String, position: usize },
    #[error("Error opening token file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type TokenStreamResult<T> = Result<T, TokenStreamError>;
