//! Analyze command - full pipeline over one input or a batch of files
//!
//! Batch mode runs each file through its own pipeline pass on the rayon
//! pool and emits the reports in input order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::load_config;
use crate::engine::ReasoningEngine;
use crate::models::{ArgumentReport, FindingsSummary, Severity};
use crate::reporters::{self, OutputFormat};

/// One entry of a batch run, tagged with its source file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    report: ArgumentReport,
}

pub fn run(
    config_path: Option<&Path>,
    text: Option<&str>,
    files: &[PathBuf],
    format: &str,
    output: Option<&Path>,
    min_severity: Option<&str>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let min_severity = min_severity
        .map(|s| s.parse::<Severity>().map_err(anyhow::Error::msg))
        .transpose()?;

    let config = load_config(config_path)?;
    let engine = ReasoningEngine::with_config(&config);

    if files.len() > 1 {
        if text.is_some() {
            anyhow::bail!("Give either TEXT or --file, not both");
        }
        return run_batch(&engine, files, format, output, min_severity);
    }

    let input = super::read_input(text, files.first().map(PathBuf::as_path))?;
    let report = apply_min_severity(engine.analyze(&input)?, min_severity);
    let rendered = reporters::analysis(&report, format)?;
    super::emit(&rendered, output)
}

fn run_batch(
    engine: &ReasoningEngine,
    files: &[PathBuf],
    format: OutputFormat,
    output: Option<&Path>,
    min_severity: Option<Severity>,
) -> Result<()> {
    let reports = files
        .par_iter()
        .map(|path| {
            let input = super::read_file(path)?;
            let report = engine
                .analyze(&input)
                .with_context(|| format!("Failed to analyze {}", path.display()))?;
            Ok(FileReport {
                file: path.display().to_string(),
                report: apply_min_severity(report, min_severity),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)?,
        _ => {
            let mut sections = Vec::with_capacity(reports.len());
            for entry in &reports {
                let body = reporters::analysis(&entry.report, format)?;
                sections.push(format!("==> {} <==\n{body}", entry.file));
            }
            sections.join("\n")
        }
    };
    super::emit(&rendered, output)
}

/// Display-level severity filter. The score and feedback are computed from
/// the full findings list; this only trims what is shown.
fn apply_min_severity(report: ArgumentReport, min: Option<Severity>) -> ArgumentReport {
    let Some(min) = min else { return report };
    let mut filtered = report;
    filtered.findings.retain(|f| f.severity >= min);
    filtered.findings_summary = FindingsSummary::from_findings(&filtered.findings);
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;

    #[test]
    fn test_min_severity_hides_findings_but_keeps_score() {
        let report = engine::analyze("Because all politicians lie, you cannot trust any of them.")
            .unwrap();
        assert_eq!(report.findings.len(), 1);

        let filtered = apply_min_severity(report.clone(), Some(Severity::High));
        assert!(filtered.findings.is_empty());
        assert_eq!(filtered.findings_summary.total, 0);
        assert_eq!(filtered.score, report.score);
        assert_eq!(filtered.feedback, report.feedback);
    }

    #[test]
    fn test_min_severity_keeps_findings_at_threshold() {
        let report = engine::analyze("Because all politicians lie, you cannot trust any of them.")
            .unwrap();
        let filtered = apply_min_severity(report, Some(Severity::Medium));
        assert_eq!(filtered.findings.len(), 1);
        assert_eq!(filtered.findings_summary.medium, 1);
    }

    #[test]
    fn test_no_filter_passes_report_through() {
        let report = engine::analyze("Because all politicians lie, you cannot trust any of them.")
            .unwrap();
        let passed = apply_min_severity(report.clone(), None);
        assert_eq!(passed.findings.len(), report.findings.len());
    }
}
