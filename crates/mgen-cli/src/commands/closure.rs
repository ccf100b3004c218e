use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use mgen_closure::serde_io::closure_report_to_json;
use mgen_closure::{enumerate_with, ClosureOpts, ClosureReport};
use mgen_core::{GroupElement, RunProvenance};
use mgen_groups::NamedElements;

use crate::emit;
use crate::groups::{load_group, pick, with_named};

#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// JSON group file.
    #[arg(long)]
    pub group: PathBuf,
    /// Elements generating the subgroup; the declared generators by default.
    #[arg(long, value_delimiter = ',')]
    pub generators: Vec<String>,
    /// Orders to look for among the elements.
    #[arg(long = "find-orders", value_delimiter = ',')]
    pub find_orders: Vec<u64>,
    /// Abort once the subgroup grows beyond this many elements.
    #[arg(long)]
    pub max_elements: Option<usize>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &ClosureArgs) -> Result<(), Box<dyn Error>> {
    let input = load_group(&args.group)?;
    let provenance = RunProvenance::for_input(
        input.hash.clone(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );
    let report = with_named!(&input.loaded, named => report_for(named, args, provenance)?);
    emit(args.out.as_deref(), &closure_report_to_json(&report)?)
}

fn report_for<E: GroupElement>(
    named: &NamedElements<E>,
    args: &ClosureArgs,
    provenance: RunProvenance,
) -> Result<ClosureReport, Box<dyn Error>> {
    let generators: Vec<E> = pick(named, &args.generators)?
        .into_iter()
        .map(|(_, element)| element)
        .collect();
    let opts = ClosureOpts {
        max_elements: args.max_elements,
        ..ClosureOpts::default()
    };
    let closure = enumerate_with(&generators, &opts)?;
    for (order, element) in closure.find_orders(&args.find_orders) {
        log::info!("element of order {order}: {element:?}");
    }
    Ok(ClosureReport::new(
        &closure,
        generators.len(),
        &args.find_orders,
        provenance,
    )?)
}
