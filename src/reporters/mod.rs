//! Output reporters for Rhetor analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown
//!
//! Each report type (analysis, validation, speech, coaching) renders in
//! all three formats through the dispatch functions here.

mod json;
mod markdown;
mod text;

use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::coach::CoachingReport;
use crate::models::{ArgumentReport, ValidationReport};
use crate::speech::SpeechReport;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

/// Render a full analysis report
pub fn analysis(report: &ArgumentReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_analysis(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render_analysis(report),
    }
}

/// Render a structural validation report
pub fn validation(report: &ValidationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_validation(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render_validation(report),
    }
}

/// Render a speech delivery report
pub fn speech(report: &SpeechReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_speech(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render_speech(report),
    }
}

/// Render a coaching report
pub fn coaching(report: &CoachingReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_coaching(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render_coaching(report),
    }
}
