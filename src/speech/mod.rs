//! Speech delivery analysis
//!
//! Counts filler words in a transcript and scores delivery fluency.
//! Runs beside the reasoning core: it reads the transcript only and
//! never touches the argument graph.
//!
//! # Fluency Formula
//!
//! ```text
//! density = fillers / max(1, words)
//! fluency = round(100 - min(80, density * 400))
//! ```
//!
//! The penalty cap keeps fluency at 20 or above even for filler-heavy
//! transcripts, so the score stays comparable across inputs.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::detectors::lexicon::term_regex_with_extras;
use crate::error::{EngineError, EngineResult};

/// Fixed filler lexicon. "so" is excluded: it doubles as a claim
/// marker and would flag argumentative transcripts.
pub const FILLER_WORDS: &[&str] = &[
    "um",
    "uh",
    "er",
    "ah",
    "like",
    "you know",
    "sort of",
    "kind of",
    "basically",
    "literally",
    "actually",
    "well",
    "i mean",
];

/// Density at which delivery counts as noticeably filler-heavy.
const NOTICEABLE_DENSITY: f64 = 0.05;
/// Density at which delivery counts as heavy.
const HEAVY_DENSITY: f64 = 0.10;
/// Repetition threshold for per-filler suggestions.
const REPEAT_THRESHOLD: usize = 3;

/// Occurrences of one filler term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillerCount {
    pub term: String,
    pub count: usize,
}

/// Delivery report for one transcript.
#[derive(Debug, Clone, Serialize)]
pub struct SpeechReport {
    pub word_count: usize,
    pub filler_count: usize,
    pub filler_density: f64,
    /// 0-100, higher is cleaner delivery.
    pub fluency_score: u8,
    /// Per-filler counts, most frequent first, ties alphabetical.
    pub fillers: Vec<FillerCount>,
    pub suggestions: Vec<String>,
}

/// Filler detection over transcripts.
pub struct SpeechAnalyzer {
    pattern: Regex,
}

impl SpeechAnalyzer {
    /// Analyzer over the built-in filler lexicon.
    pub fn new() -> Self {
        Self::with_extra_words(&[])
    }

    /// Analyzer with config-supplied extra filler words appended.
    pub fn with_extra_words(extra: &[String]) -> Self {
        Self {
            pattern: term_regex_with_extras(FILLER_WORDS, extra),
        }
    }

    /// Analyze one transcript.
    ///
    /// Returns [`EngineError::EmptyInput`] for blank input.
    pub fn analyze(&self, transcript: &str) -> EngineResult<SpeechReport> {
        if transcript.trim().is_empty() {
            return Err(EngineError::EmptyInput);
        }

        let word_count = transcript.split_whitespace().count();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for m in self.pattern.find_iter(transcript) {
            *counts.entry(normalize_term(m.as_str())).or_insert(0) += 1;
        }
        let filler_count: usize = counts.values().sum();

        let mut fillers: Vec<FillerCount> = counts
            .into_iter()
            .map(|(term, count)| FillerCount { term, count })
            .collect();
        fillers.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));

        let filler_density = filler_count as f64 / word_count.max(1) as f64;
        let penalty = (filler_density * 400.0).min(80.0);
        let fluency_score = (100.0 - penalty).round().max(10.0) as u8;

        let suggestions = build_suggestions(filler_density, &fillers);

        debug!(
            "speech analysis: {} words, {} fillers, fluency {}",
            word_count, filler_count, fluency_score
        );
        Ok(SpeechReport {
            word_count,
            filler_count,
            filler_density,
            fluency_score,
            fillers,
            suggestions,
        })
    }

    /// Wrap every filler occurrence in `**` for display.
    pub fn highlight(&self, transcript: &str) -> String {
        self.pattern.replace_all(transcript, "**$0**").into_owned()
    }
}

impl Default for SpeechAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase and collapse whitespace so "You   Know" counts as
/// "you know".
fn normalize_term(matched: &str) -> String {
    matched
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_suggestions(density: f64, fillers: &[FillerCount]) -> Vec<String> {
    if fillers.is_empty() {
        return vec!["Clean delivery: no filler words detected.".to_string()];
    }

    let mut suggestions = Vec::new();
    if density >= HEAVY_DENSITY {
        suggestions.push("Heavy filler use: pause silently instead of filling gaps.".to_string());
    } else if density >= NOTICEABLE_DENSITY {
        suggestions.push("Noticeable filler use: slow down between thoughts.".to_string());
    }
    for filler in fillers {
        if filler.count >= REPEAT_THRESHOLD {
            suggestions.push(format!(
                "Watch for \"{}\": it appeared {} times.",
                filler.term, filler.count
            ));
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transcript_is_an_error() {
        let analyzer = SpeechAnalyzer::new();
        assert!(matches!(analyzer.analyze("  \n "), Err(EngineError::EmptyInput)));
    }

    #[test]
    fn test_clean_transcript_scores_100() {
        let analyzer = SpeechAnalyzer::new();
        let report = analyzer
            .analyze("We should invest in public transit.")
            .unwrap();
        assert_eq!(report.filler_count, 0);
        assert_eq!(report.fluency_score, 100);
        assert_eq!(
            report.suggestions,
            vec!["Clean delivery: no filler words detected.".to_string()]
        );
    }

    #[test]
    fn test_fluency_formula() {
        let analyzer = SpeechAnalyzer::new();
        // 1 filler in 10 words: density 0.1, penalty 40.
        let report = analyzer
            .analyze("um one two three four five six seven eight nine")
            .unwrap();
        assert_eq!(report.word_count, 10);
        assert_eq!(report.filler_count, 1);
        assert_eq!(report.fluency_score, 60);
    }

    #[test]
    fn test_penalty_is_capped() {
        let analyzer = SpeechAnalyzer::new();
        let report = analyzer.analyze("um uh er ah um").unwrap();
        assert_eq!(report.filler_count, 5);
        assert_eq!(report.fluency_score, 20);
    }

    #[test]
    fn test_multi_word_fillers_count() {
        let analyzer = SpeechAnalyzer::new();
        let report = analyzer
            .analyze("You know, it was, you know, sort of fine.")
            .unwrap();
        assert_eq!(report.filler_count, 3);
        assert_eq!(report.fillers[0].term, "you know");
        assert_eq!(report.fillers[0].count, 2);
        assert_eq!(report.fillers[1].term, "sort of");
    }

    #[test]
    fn test_counts_order_desc_then_alphabetical() {
        let analyzer = SpeechAnalyzer::new();
        let report = analyzer.analyze("uh um uh um").unwrap();
        assert_eq!(report.fillers.len(), 2);
        assert_eq!(report.fillers[0].term, "uh");
        assert_eq!(report.fillers[1].term, "um");
    }

    #[test]
    fn test_repeated_filler_gets_a_suggestion() {
        let analyzer = SpeechAnalyzer::new();
        let report = analyzer
            .analyze("um the plan um is um ready for review today with everyone present and longer")
            .unwrap();
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("\"um\": it appeared 3 times")));
    }

    #[test]
    fn test_highlight_wraps_fillers() {
        let analyzer = SpeechAnalyzer::new();
        let highlighted = analyzer.highlight("Um, that is fine.");
        assert_eq!(highlighted, "**Um**, that is fine.");
    }

    #[test]
    fn test_extra_words_extend_lexicon() {
        let analyzer = SpeechAnalyzer::with_extra_words(&["honestly".to_string()]);
        let report = analyzer.analyze("Honestly the plan works.").unwrap();
        assert_eq!(report.filler_count, 1);
        assert_eq!(report.fillers[0].term, "honestly");
    }

    #[test]
    fn test_word_boundary_prevents_substring_hits() {
        let analyzer = SpeechAnalyzer::new();
        // "ah" must not match inside "ahead".
        let report = analyzer.analyze("Go ahead with the plan.").unwrap();
        assert_eq!(report.filler_count, 0);
    }
}
