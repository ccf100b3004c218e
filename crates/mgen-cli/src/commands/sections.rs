use std::error::Error;

use clap::Args;
use mgen_verify::{all_sections, section};

#[derive(Args, Debug)]
pub struct SectionsArgs {
    /// Print one section in full as JSON.
    #[arg(long)]
    pub id: Option<String>,
}

pub fn run(args: &SectionsArgs) -> Result<(), Box<dyn Error>> {
    if let Some(id) = &args.id {
        println!("{}", serde_json::to_string_pretty(&section(id)?)?);
        return Ok(());
    }
    for section in all_sections()? {
        println!(
            "{:<22} {:<28} {:>2} bindings {:>3} claims",
            section.id,
            section.title,
            section.bindings.len(),
            section.certificate.claims.len()
        );
        for named in &section.certificate.claims {
            println!("    {:<32} {}", named.name, named.claim.describe());
        }
    }
    Ok(())
}
