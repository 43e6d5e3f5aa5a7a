//! Command-line interface for Rhetor
//!
//! Defines the argument surface with clap derive and dispatches to the
//! per-command handlers. Input text comes from a positional argument,
//! from `--file`, or from stdin when neither is given.

mod analyze;
mod coach;
mod init;
mod speech;
mod validate;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "rhetor",
    version,
    about = "Argumentation coaching from the command line",
    long_about = "Rhetor parses free-text arguments into a claim/premise/rebuttal graph, \
checks the structure, flags informal fallacies, and scores reasoning quality 0-100 \
with ordered coaching feedback."
)]
pub struct Cli {
    /// Path to a config file (default: ./rhetor.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an argument: graph, structure, fallacies, score, feedback
    #[command(after_help = "\
Examples:
  rhetor analyze \"Because X is true, Y follows.\"     Analyze text directly
  rhetor analyze --file essay.txt                     Analyze a file
  rhetor analyze --file a.txt --file b.txt            Batch mode (parallel)
  cat essay.txt | rhetor analyze                      Analyze stdin
  rhetor analyze --file essay.txt --format json       JSON output for scripting
  rhetor analyze --file essay.txt --min-severity high Hide medium/low findings")]
    Analyze {
        /// Argument text (stdin is read when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read input from a file; repeat the flag for batch mode
        #[arg(long)]
        file: Vec<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown"])]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Hide findings below this severity (score is unaffected)
        #[arg(long, value_parser = ["low", "medium", "high"])]
        min_severity: Option<String>,
    },

    /// Check argument structure only (no fallacy rules, no score)
    #[command(after_help = "\
Examples:
  rhetor validate \"Therefore we should act.\"         Bare claim: exits 1
  rhetor validate --file essay.txt --format json     Machine-readable issues
  rhetor validate --file notes.txt && publish.sh     Gate a script on structure")]
    Validate {
        /// Argument text (stdin is read when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read input from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown"])]
        format: String,
    },

    /// Generate counterpoints and Socratic questions for an argument
    #[command(after_help = "\
Examples:
  rhetor coach \"We should adopt a four-day week.\"    Coach a single claim
  rhetor coach --file debate.txt --count 5           Five counterpoints and questions
  rhetor coach --file debate.txt --format json       JSON for a practice app")]
    Coach {
        /// Argument text (stdin is read when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read input from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Number of counterpoints and questions (overrides config)
        #[arg(long, short = 'n')]
        count: Option<usize>,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown"])]
        format: String,
    },

    /// Count filler words in a transcript and score fluency
    #[command(after_help = "\
Examples:
  rhetor speech \"Um, so the plan is, like, ready.\"   Score a transcript
  rhetor speech --file talk.txt --highlight          Bold each filler in context
  rhetor speech --file talk.txt --format json        JSON fluency report")]
    Speech {
        /// Transcript text (stdin is read when neither TEXT nor --file is given)
        text: Option<String>,

        /// Read input from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print the transcript with each filler wrapped in ** markers
        #[arg(long)]
        highlight: bool,

        /// Output format
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown"])]
        format: String,
    },

    /// Write a commented rhetor.toml scaffold to the current directory
    Init,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            text,
            file,
            format,
            output,
            min_severity,
        } => analyze::run(
            cli.config.as_deref(),
            text.as_deref(),
            &file,
            &format,
            output.as_deref(),
            min_severity.as_deref(),
        ),

        Commands::Validate { text, file, format } => {
            validate::run(cli.config.as_deref(), text.as_deref(), file.as_deref(), &format)
        }

        Commands::Coach {
            text,
            file,
            count,
            format,
        } => coach::run(
            cli.config.as_deref(),
            text.as_deref(),
            file.as_deref(),
            count,
            &format,
        ),

        Commands::Speech {
            text,
            file,
            highlight,
            format,
        } => speech::run(
            cli.config.as_deref(),
            text.as_deref(),
            file.as_deref(),
            highlight,
            &format,
        ),

        Commands::Init => init::run(),
    }
}

/// Resolve input for single-input commands: positional text, then --file,
/// then stdin.
fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(_), Some(_)) => anyhow::bail!("Give either TEXT or --file, not both"),
        (Some(t), None) => Ok(t.to_string()),
        (None, Some(path)) => read_file(path),
        (None, None) => read_stdin(),
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf)
}

/// Print to stdout, or write to a file with a confirmation line.
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
