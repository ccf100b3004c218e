use std::error::Error;

use clap::Args;
use mgen_word::catalog;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Restrict the listing to one construction, e.g. `3fi24`.
    #[arg(long)]
    pub section: Option<String>,
    /// Parse every literal and report only the count.
    #[arg(long)]
    pub validate: bool,
}

#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    section: &'a str,
    name: &'a str,
    word: String,
}

pub fn run(args: &CatalogArgs) -> Result<(), Box<dyn Error>> {
    if args.validate {
        let parsed = catalog::parse_all()?;
        println!("{} catalogue literals parse", parsed.len());
        return Ok(());
    }
    let sections = match &args.section {
        Some(section) if !catalog::sections().iter().any(|known| *known == section.as_str()) => {
            return Err(format!(
                "unknown catalogue section `{section}`; known: {}",
                catalog::sections().join(", ")
            )
            .into());
        }
        Some(section) => vec![section.as_str()],
        None => catalog::sections(),
    };
    let mut rows = Vec::new();
    for section in sections {
        for entry in catalog::section_entries(section) {
            rows.push(EntryRow {
                section: entry.section,
                name: entry.name,
                word: entry.word()?.to_string(),
            });
        }
    }
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
