//! Coach command - counterpoints and Socratic questions

use std::path::Path;

use anyhow::Result;

use crate::coach::Coach;
use crate::config::{load_config, CoachConfig};
use crate::engine::ReasoningEngine;
use crate::reporters::{self, OutputFormat};

pub fn run(
    config_path: Option<&Path>,
    text: Option<&str>,
    file: Option<&Path>,
    count: Option<usize>,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let config = load_config(config_path)?;
    let engine = ReasoningEngine::with_config(&config);

    let input = super::read_input(text, file)?;
    let report = engine.analyze(&input)?;
    let coaching = Coach::with_config(&coach_config(&config.coach, count)).coach(&report);
    let rendered = reporters::coaching(&coaching, format)?;
    println!("{rendered}");
    Ok(())
}

/// --count overrides both configured counts at once.
fn coach_config(base: &CoachConfig, count: Option<usize>) -> CoachConfig {
    match count {
        Some(n) => CoachConfig {
            counterpoints: n,
            questions: n,
        },
        None => base.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_overrides_both_config_values() {
        let base = CoachConfig {
            counterpoints: 2,
            questions: 5,
        };
        let merged = coach_config(&base, Some(4));
        assert_eq!(merged.counterpoints, 4);
        assert_eq!(merged.questions, 4);
    }

    #[test]
    fn test_config_counts_survive_without_flag() {
        let base = CoachConfig {
            counterpoints: 2,
            questions: 5,
        };
        let merged = coach_config(&base, None);
        assert_eq!(merged.counterpoints, 2);
        assert_eq!(merged.questions, 5);
    }
}
