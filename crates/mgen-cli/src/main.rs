use std::error::Error;
use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};
use commands::{
    catalog::{self, CatalogArgs},
    closure::{self, ClosureArgs},
    parse::{self, ParseArgs},
    search::{self, SearchArgs},
    sections::{self, SectionsArgs},
    subsets::{self, SubsetsArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};

mod commands;
mod groups;

#[derive(Parser, Debug)]
#[command(name = "mgen", about = "Generator verification for maximal subgroups of the Monster")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse words and print them in canonical form.
    Parse(ParseArgs),
    /// List or validate the literal word catalogue.
    Catalog(CatalogArgs),
    /// Enumerate the subgroup generated by elements of a group file.
    Closure(ClosureArgs),
    /// Run the exhaustive subset-independence check.
    Subsets(SubsetsArgs),
    /// Look for words of given orders in the generators of a group file.
    Search(SearchArgs),
    /// Check a certificate or catalogue section against a group file.
    Verify(VerifyArgs),
    /// List the catalogue sections and their claims.
    Sections(SectionsArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.log.as_str()),
    )
    .init();
    match cli.command {
        Command::Parse(args) => parse::run(&args),
        Command::Catalog(args) => catalog::run(&args),
        Command::Closure(args) => closure::run(&args),
        Command::Subsets(args) => subsets::run(&args),
        Command::Search(args) => search::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Sections(args) => sections::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

/// Writes `json` to `out` when given, otherwise to stdout.
pub(crate) fn emit(out: Option<&Path>, json: &str) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
