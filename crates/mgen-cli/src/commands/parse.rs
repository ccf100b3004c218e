use std::error::Error;

use clap::Args;
use mgen_word::Word;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Words such as `M<y_4d1h*x_0b7h*d_d7h>` or `M<1>`.
    #[arg(required = true)]
    pub words: Vec<String>,
    /// Print the atoms of each word as JSON instead of the canonical text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ParseArgs) -> Result<(), Box<dyn Error>> {
    for text in &args.words {
        let word = Word::parse(text)?;
        if args.json {
            println!("{}", serde_json::to_string(word.atoms())?);
        } else {
            println!("{word}");
        }
    }
    Ok(())
}
