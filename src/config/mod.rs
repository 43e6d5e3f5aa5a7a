//! Configuration module for Rhetor
//!
//! Loads engine configuration from `rhetor.toml`:
//! - Scoring deduction overrides
//! - Lexicon extensions for the fallacy rules and filler detection
//! - Coaching output sizes
//!
//! # Configuration Format
//!
//! ```toml
//! # rhetor.toml
//!
//! [scoring]
//! structural_deduction = 25
//! high_deduction = 10
//! medium_deduction = 5
//! low_deduction = 2
//!
//! [lexicon]
//! extra_attack_terms = ["charlatan"]
//! extra_emotion_terms = ["soul-crushing"]
//! extra_filler_words = ["honestly"]
//!
//! [coach]
//! counterpoints = 3
//! questions = 3
//! ```
//!
//! Every key is optional. Missing keys fall back to the defaults above.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Config file name searched for in the working directory.
pub const CONFIG_FILE: &str = "rhetor.toml";

/// Engine configuration loaded from rhetor.toml
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// Scoring deduction weights
    #[serde(default)]
    pub scoring: ScoringWeights,

    /// Extra lexicon terms merged into the built-in lists
    #[serde(default)]
    pub lexicon: LexiconConfig,

    /// Coaching output sizes
    #[serde(default)]
    pub coach: CoachConfig,
}

/// Per-severity score deductions.
///
/// The score starts at 100 and each structural issue or finding
/// subtracts its weight, floored at 0.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringWeights {
    /// Deduction per invalidating structural issue (default: 25)
    #[serde(default = "default_structural_deduction")]
    pub structural_deduction: u32,

    /// Deduction per high severity finding (default: 10)
    #[serde(default = "default_high_deduction")]
    pub high_deduction: u32,

    /// Deduction per medium severity finding (default: 5)
    #[serde(default = "default_medium_deduction")]
    pub medium_deduction: u32,

    /// Deduction per low severity finding (default: 2)
    #[serde(default = "default_low_deduction")]
    pub low_deduction: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            structural_deduction: default_structural_deduction(),
            high_deduction: default_high_deduction(),
            medium_deduction: default_medium_deduction(),
            low_deduction: default_low_deduction(),
        }
    }
}

fn default_structural_deduction() -> u32 {
    25
}
fn default_high_deduction() -> u32 {
    10
}
fn default_medium_deduction() -> u32 {
    5
}
fn default_low_deduction() -> u32 {
    2
}

/// User-supplied terms merged into the built-in lexicons
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LexiconConfig {
    /// Extra personal-attack terms for the ad hominem rule
    #[serde(default)]
    pub extra_attack_terms: Vec<String>,

    /// Extra loaded terms for the appeal to emotion rule
    #[serde(default)]
    pub extra_emotion_terms: Vec<String>,

    /// Extra filler words for speech analysis
    #[serde(default)]
    pub extra_filler_words: Vec<String>,
}

/// How much coaching output to generate
#[derive(Debug, Clone, Deserialize)]
pub struct CoachConfig {
    /// Counterpoints per claim (default: 3)
    #[serde(default = "default_counterpoints")]
    pub counterpoints: usize,

    /// Socratic questions per analysis (default: 3)
    #[serde(default = "default_questions")]
    pub questions: usize,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            counterpoints: default_counterpoints(),
            questions: default_questions(),
        }
    }
}

fn default_counterpoints() -> usize {
    3
}
fn default_questions() -> usize {
    3
}

/// Load engine configuration.
///
/// An explicit `path` must exist and parse; any problem is an error.
/// With no explicit path, `rhetor.toml` in the working directory is
/// tried, and a missing or broken file falls back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    if let Some(path) = path {
        let config = load_toml_config(path)?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let default_path = Path::new(CONFIG_FILE);
    if default_path.exists() {
        match load_toml_config(default_path) {
            Ok(config) => {
                debug!("Loaded config from {}", default_path.display());
                return Ok(config);
            }
            Err(e) => {
                warn!("Failed to load {}: {}", default_path.display(), e);
            }
        }
    }

    debug!("No config file found, using defaults");
    Ok(EngineConfig::default())
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> Result<EngineConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: EngineConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Starter configuration written by `rhetor init`.
///
/// Every value matches the built-in default, so the scaffold changes
/// nothing until the user edits it.
pub const CONFIG_TEMPLATE: &str = "\
# rhetor.toml
#
# Every key is optional; the values below are the built-in defaults.

[scoring]
# Points removed per invalidating structural issue
# (NO_CLAIM, UNSUPPORTED_CLAIM, CIRCULAR_SUPPORT).
structural_deduction = 25
# Points removed per fallacy finding, by severity.
high_deduction = 10
medium_deduction = 5
low_deduction = 2

[lexicon]
# Extra terms merged into the built-in lexicons.
extra_attack_terms = []
extra_emotion_terms = []
extra_filler_words = []

[coach]
# Counterpoints generated per claim.
counterpoints = 3
# Socratic questions generated per analysis.
questions = 3
";
