use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use log::{info, warn};
use mgen_core::GroupElement;
use mgen_groups::NamedElements;
use mgen_verify::serde_io::{load_certificate, load_policy, report_to_json};
use mgen_verify::{section, Bindings, Certificate, ClassOracle, VerificationReport, VerifyPolicy};

use crate::emit;
use crate::groups::{load_group, tag_table, with_named, OracleFile};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// JSON group file providing the named elements.
    #[arg(long)]
    pub group: PathBuf,
    /// YAML certificate whose names refer to elements of the group file.
    #[arg(long, conflicts_with = "section", required_unless_present = "section")]
    pub certificate: Option<PathBuf>,
    /// Catalogue section to verify; elements named after word tags
    /// (`d`, `p`, `x`, `y`, `l`, `t`) evaluate its words.
    #[arg(long)]
    pub section: Option<String>,
    /// YAML verification policy; defaults apply when omitted.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// YAML description of a finite class oracle over the group file.
    #[arg(long)]
    pub oracle: Option<PathBuf>,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

enum Target {
    Certificate(Certificate),
    Section(mgen_verify::Section),
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let input = load_group(&args.group)?;
    let policy = match &args.policy {
        Some(path) => load_policy(path)?,
        None => VerifyPolicy::default(),
    };
    let oracle = args.oracle.as_deref().map(OracleFile::load).transpose()?;
    let target = match (&args.certificate, &args.section) {
        (Some(path), _) => Target::Certificate(load_certificate(path)?),
        (None, Some(id)) => Target::Section(section(id)?),
        (None, None) => return Err("pass --certificate or --section".into()),
    };
    let report = with_named!(&input.loaded, named => {
        evaluate(named, &target, oracle.as_ref(), &policy)?
    });
    emit(args.out.as_deref(), &report_to_json(&report)?)?;

    let failed = report.failures().count();
    if failed > 0 {
        for check in report.failures() {
            warn!("{} failed: {} (observed {})", check.name, check.statement, check.observed);
        }
        return Err(format!(
            "{failed} of {} checks failed for {}",
            report.checks.len(),
            report.certificate
        )
        .into());
    }
    info!("{} checks passed for {}", report.checks.len(), report.certificate);
    Ok(())
}

fn evaluate<E: GroupElement>(
    named: &NamedElements<E>,
    target: &Target,
    oracle: Option<&OracleFile>,
    policy: &VerifyPolicy,
) -> Result<VerificationReport, Box<dyn Error>> {
    let classes = oracle.map(|file| file.build(named)).transpose()?;
    let classes = classes.as_ref().map(|oracle| oracle as &dyn ClassOracle<E>);
    let report = match target {
        Target::Certificate(certificate) => {
            let mut bindings = Bindings::new(named.identity().clone());
            for (name, element) in named.elements() {
                bindings.insert(name.clone(), element.clone());
            }
            certificate.evaluate(&bindings, classes, policy)?
        }
        Target::Section(section) => section.verify(&tag_table(named), classes, policy)?,
    };
    Ok(report)
}
