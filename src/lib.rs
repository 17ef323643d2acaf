pub mod config;
pub mod parser;
pub mod stages;
pub mod symbols;
pub mod tac;
pub mod token;
pub mod token_stream;
pub mod tree;
pub mod tree_text;

#[cfg(test)]
mod fixtures;
