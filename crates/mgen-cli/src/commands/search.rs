use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mgen_closure::{random_word_search, SearchOpts, SearchReport};
use mgen_core::GroupElement;
use mgen_groups::NamedElements;

use crate::emit;
use crate::groups::{load_group, pick, with_named};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// JSON group file.
    #[arg(long)]
    pub group: PathBuf,
    /// Letters of the random words; the declared generators by default.
    #[arg(long, value_delimiter = ',')]
    pub generators: Vec<String>,
    /// Element orders to find.
    #[arg(long, value_delimiter = ',', required = true)]
    pub orders: Vec<u64>,
    /// Master seed of the search.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Number of random words to try.
    #[arg(long)]
    pub attempts: Option<usize>,
    /// Longest word tried.
    #[arg(long)]
    pub max_length: Option<usize>,
    /// Skip elements whose order exceeds this.
    #[arg(long)]
    pub order_limit: Option<u64>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
    let input = load_group(&args.group)?;
    let defaults = SearchOpts::default();
    let opts = SearchOpts {
        seed: args.seed,
        max_length: args.max_length.unwrap_or(defaults.max_length),
        attempts: args.attempts.unwrap_or(defaults.attempts),
        order_limit: args.order_limit.unwrap_or(defaults.order_limit),
    };
    let report = with_named!(&input.loaded, named => search(named, args, &opts)?);
    if !report.missing.is_empty() {
        log::warn!(
            "no word found for orders {:?} after {} attempts",
            report.missing,
            report.attempts
        );
    }
    emit(args.out.as_deref(), &serde_json::to_string_pretty(&report)?)
}

fn search<E: GroupElement>(
    named: &NamedElements<E>,
    args: &SearchArgs,
    opts: &SearchOpts,
) -> Result<SearchReport, Box<dyn Error>> {
    let generators = pick(named, &args.generators)?;
    Ok(random_word_search(&generators, &args.orders, opts)?)
}
