use std::error::Error;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Args;
use log::{info, warn};
use mgen_closure::serde_io::{
    checkpoint_from_json, checkpoint_to_json, read_json, subset_outcome_to_json, write_json,
};
use mgen_closure::{run_subsets, SubsetControl, SubsetOpts, SubsetOutcome, SubsetProgress};
use mgen_core::GroupElement;
use mgen_groups::NamedElements;

use crate::groups::{load_group, pick, with_named};

#[derive(Args, Debug)]
pub struct SubsetsArgs {
    /// JSON group file.
    #[arg(long)]
    pub group: PathBuf,
    /// Elements to test, in product order.
    #[arg(long, value_delimiter = ',', required = true)]
    pub elements: Vec<String>,
    /// Central element a subset product may also equal the inverse of.
    #[arg(long)]
    pub central: Option<String>,
    /// Resume from this checkpoint file, and save to it when the budget runs
    /// out or Ctrl-C is pressed.
    #[arg(long)]
    pub checkpoint: Option<PathBuf>,
    /// Maximum number of subsets to test in this invocation.
    #[arg(long)]
    pub budget: Option<u64>,
    /// Log progress every this many subsets.
    #[arg(long, default_value_t = 1 << 20)]
    pub progress_every: u64,
}

pub fn run(args: &SubsetsArgs) -> Result<(), Box<dyn Error>> {
    let input = load_group(&args.group)?;
    let outcome = with_named!(&input.loaded, named => check(named, args)?);
    println!("{}", subset_outcome_to_json(&outcome)?);
    match outcome {
        SubsetOutcome::Independent => Ok(()),
        SubsetOutcome::Interrupted(checkpoint) => {
            if let Some(path) = &args.checkpoint {
                write_json(path, &checkpoint_to_json(&checkpoint)?)?;
                info!("checkpoint saved to {}", path.display());
            }
            Ok(())
        }
        SubsetOutcome::Dependent { indices, .. } => {
            let names: Vec<&str> = indices
                .iter()
                .map(|index| args.elements[*index].as_str())
                .collect();
            Err(format!("subset {{{}}} is dependent", names.join(", ")).into())
        }
    }
}

fn check<E: GroupElement>(
    named: &NamedElements<E>,
    args: &SubsetsArgs,
) -> Result<SubsetOutcome, Box<dyn Error>> {
    let elements: Vec<E> = pick(named, &args.elements)?
        .into_iter()
        .map(|(_, element)| element)
        .collect();
    let central = args
        .central
        .as_deref()
        .map(|name| named.get(name).cloned())
        .transpose()?;
    let resume = match &args.checkpoint {
        Some(path) if path.exists() => {
            let checkpoint = checkpoint_from_json(&read_json(path)?)?;
            info!(
                "resuming at subset {}/{}",
                checkpoint.checked, checkpoint.total
            );
            Some(checkpoint)
        }
        _ => None,
    };
    let opts = SubsetOpts {
        budget: args.budget,
        progress_every: args.progress_every,
    };
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        warn!("Ctrl-C will not save a checkpoint: {err}");
    }
    let mut control = SubsetControl {
        cancel: Some(interrupted.as_ref()),
        on_progress: Some(Box::new(|progress: SubsetProgress| {
            info!("{}/{} subsets checked", progress.checked, progress.total)
        })),
    };
    Ok(run_subsets(
        &elements,
        central.as_ref(),
        resume.as_ref(),
        &opts,
        &mut control,
    )?)
}
