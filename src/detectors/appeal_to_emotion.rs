//! Appeal to emotion rule
//!
//! Emotionally loaded premises are fine when they ride on evidence; the
//! rule fires only when a premise crosses the emotion-lexicon threshold
//! (at least one term) and carries no evidentiary marker at all.

use regex::Regex;

use crate::detectors::base::FallacyRule;
use crate::detectors::lexicon::{
    emotion_pattern, evidence_pattern, first_match, term_regex_with_extras, EMOTION_TERMS,
};
use crate::graph::{ArgumentGraph, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

/// Flags premises that substitute emotional language for evidence.
pub struct AppealToEmotionRule {
    /// Present only when config extended the emotion lexicon.
    custom_pattern: Option<Regex>,
}

impl AppealToEmotionRule {
    pub fn new() -> Self {
        Self {
            custom_pattern: None,
        }
    }

    /// Extend the built-in emotion lexicon with extra terms.
    pub fn with_extra_terms(extras: &[String]) -> Self {
        if extras.is_empty() {
            return Self::new();
        }
        Self {
            custom_pattern: Some(term_regex_with_extras(EMOTION_TERMS, extras)),
        }
    }

    fn pattern(&self) -> &Regex {
        self.custom_pattern.as_ref().unwrap_or_else(|| emotion_pattern())
    }
}

impl Default for AppealToEmotionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FallacyRule for AppealToEmotionRule {
    fn name(&self) -> &'static str {
        "appeal-to-emotion"
    }

    fn description(&self) -> &'static str {
        "Flags premises that lean on loaded language without evidentiary markers"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        let mut findings = Vec::new();
        for prop in graph.propositions() {
            if prop.role != Role::Premise {
                continue;
            }
            if evidence_pattern().is_match(&prop.text) {
                continue;
            }
            let Some(term) = first_match(self.pattern(), &prop.text) else {
                continue;
            };

            let explanation = format!(
                "Premise {} (\"{}\") leans on emotional language (\"{}\") without citing evidence.",
                prop.id,
                excerpt(&prop.text),
                term
            );
            findings.push(FallacyFinding::new(
                FallacyKind::AppealToEmotion,
                self.name(),
                vec![prop.id],
                explanation,
            ));
        }
        findings
    }
}
