//! Validate command - structural checks with a CI-friendly exit code

use std::path::Path;

use anyhow::Result;

use crate::config::load_config;
use crate::engine::ReasoningEngine;
use crate::reporters::{self, OutputFormat};

pub fn run(
    config_path: Option<&Path>,
    text: Option<&str>,
    file: Option<&Path>,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let config = load_config(config_path)?;
    let engine = ReasoningEngine::with_config(&config);

    let input = super::read_input(text, file)?;
    let report = engine.validate(&input)?;
    let rendered = reporters::validation(&report, format)?;
    println!("{rendered}");

    if !report.is_structurally_valid {
        eprintln!(
            "Structure check failed: {} invalidating issue(s)",
            report.invalidating_issues().count()
        );
        std::process::exit(1);
    }
    Ok(())
}
