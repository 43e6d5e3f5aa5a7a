//! Speech command - filler-word analysis of a spoken transcript

use std::path::Path;

use anyhow::Result;

use crate::config::load_config;
use crate::reporters::{self, OutputFormat};
use crate::speech::SpeechAnalyzer;

pub fn run(
    config_path: Option<&Path>,
    text: Option<&str>,
    file: Option<&Path>,
    highlight: bool,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let config = load_config(config_path)?;
    let analyzer = SpeechAnalyzer::with_extra_words(&config.lexicon.extra_filler_words);

    let input = super::read_input(text, file)?;
    let report = analyzer.analyze(&input)?;
    let rendered = reporters::speech(&report, format)?;
    println!("{rendered}");

    if highlight {
        if format == OutputFormat::Json {
            eprintln!("--highlight is ignored with --format json");
        } else {
            println!("\n{}", analyzer.highlight(input.trim()));
        }
    }
    Ok(())
}
