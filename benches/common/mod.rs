#![allow(dead_code)]
use std::fs;
use std::path::Path;

use tacparse::config::StagePaths;
use tacparse::parser;
use tacparse::stages;
use tacparse::token::Token;
use tacparse::token_stream;
use tacparse::tree::{ParseTreeNode, render};
use test_support::load_cases;

/// Bench-enabled cases under `tests/programs`, as `(name, stage paths)`.
pub fn workloads() -> Vec<(String, StagePaths)> {
    load_cases(Path::new("tests/programs"))
        .unwrap_or_else(|err| panic!("load cases: {err}"))
        .into_iter()
        .filter(|case| case.spec.bench.enabled)
        .map(|case| (case.name, StagePaths::in_dir(&case.dir)))
        .collect()
}

pub fn load_source(paths: &StagePaths) -> String {
    fs::read_to_string(&paths.tokens)
        .unwrap_or_else(|err| panic!("read {}: {err}", paths.tokens.display()))
}

pub fn load_tokens(paths: &StagePaths) -> Vec<Token> {
    let tables = stages::load_symbol_tables(paths);
    token_stream::load(&paths.tokens, &tables)
        .unwrap_or_else(|err| panic!("tokenize {}: {err}", paths.tokens.display()))
}

pub fn load_program(paths: &StagePaths) -> ParseTreeNode {
    parser::parse_tokens(load_tokens(paths))
        .unwrap_or_else(|err| panic!("parse {}: {err}", paths.tokens.display()))
}

pub fn load_tree_text(paths: &StagePaths) -> String {
    render(&load_program(paths))
}
