use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use tacparse::config::{self, StagePaths};
use tacparse::stages;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    paths: PathArgs,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Parse the token stream and write the parse tree
    Parse,
    /// Generate three-address code from a parse tree file
    Generate,
    /// Run both stages, passing the parse tree through its file
    Run,
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Directory the stage files are resolved against
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,
    #[arg(long, global = true, default_value = config::IDENTIFIERS_FILE)]
    identifiers: PathBuf,
    #[arg(long, global = true, default_value = config::KEYWORDS_FILE)]
    keywords: PathBuf,
    #[arg(long, global = true, default_value = config::LITERALS_FILE)]
    literals: PathBuf,
    #[arg(long, global = true, default_value = config::TOKENS_FILE)]
    tokens: PathBuf,
    #[arg(long, global = true, default_value = config::TREE_FILE)]
    tree: PathBuf,
    #[arg(long, global = true, default_value = config::TAC_FILE)]
    tac: PathBuf,
}

impl PathArgs {
    fn resolve(self) -> StagePaths {
        StagePaths {
            identifiers: self.dir.join(self.identifiers),
            keywords: self.dir.join(self.keywords),
            literals: self.dir.join(self.literals),
            tokens: self.dir.join(self.tokens),
            tree: self.dir.join(self.tree),
            tac: self.dir.join(self.tac),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = cli.paths.resolve();

    match cli.command {
        Command::Parse => parse(&paths),
        Command::Generate => generate(&paths),
        Command::Run => {
            parse(&paths)?;
            generate(&paths)
        }
    }
}

fn parse(paths: &StagePaths) -> Result<()> {
    let tree = stages::parse_stage(paths)?;

    println!("Parsing successful!");
    print!("{tree}");
    match stages::write_artifact(&paths.tree, &tree) {
        Ok(()) => println!("Parse tree saved to {}", paths.tree.display()),
        Err(err) => error!("{err:#}"),
    }
    Ok(())
}

fn generate(paths: &StagePaths) -> Result<()> {
    let code = stages::generate_stage(paths)?;

    println!("Generated Three Address Code:");
    for line in &code {
        println!("{line}");
    }
    match stages::write_artifact(&paths.tac, &stages::tac_text(&code)) {
        Ok(()) => println!("TAC saved to {}", paths.tac.display()),
        Err(err) => error!("{err:#}"),
    }
    Ok(())
}
