//! Ad hominem rule
//!
//! Fires when a rebuttal leans on personal-attack vocabulary instead of
//! addressing the content of the claim it argues against. The attacked
//! claims are implicated alongside the rebuttal so coaching output can
//! point at both sides.

use regex::Regex;

use crate::detectors::base::FallacyRule;
use crate::detectors::lexicon::{attack_pattern, first_match, term_regex_with_extras, ATTACK_TERMS};
use crate::graph::{ArgumentGraph, PropositionId, RelationKind, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

/// Flags rebuttals that attack the speaker rather than the argument.
pub struct AdHominemRule {
    /// Present only when config extended the attack lexicon.
    custom_pattern: Option<Regex>,
}

impl AdHominemRule {
    pub fn new() -> Self {
        Self {
            custom_pattern: None,
        }
    }

    /// Extend the built-in attack lexicon with extra terms.
    pub fn with_extra_terms(extras: &[String]) -> Self {
        if extras.is_empty() {
            return Self::new();
        }
        Self {
            custom_pattern: Some(term_regex_with_extras(ATTACK_TERMS, extras)),
        }
    }

    fn pattern(&self) -> &Regex {
        self.custom_pattern.as_ref().unwrap_or_else(|| attack_pattern())
    }
}

impl Default for AdHominemRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FallacyRule for AdHominemRule {
    fn name(&self) -> &'static str {
        "ad-hominem"
    }

    fn description(&self) -> &'static str {
        "Flags rebuttals built on personal attacks instead of counter-evidence"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        let mut findings = Vec::new();
        for prop in graph.propositions() {
            if prop.role != Role::Rebuttal {
                continue;
            }
            let Some(term) = first_match(self.pattern(), &prop.text) else {
                continue;
            };

            let mut implicated: Vec<PropositionId> = vec![prop.id];
            implicated.extend(
                graph
                    .relations()
                    .iter()
                    .filter(|r| r.source == prop.id && r.kind == RelationKind::Attacks)
                    .map(|r| r.target),
            );

            let explanation = format!(
                "Rebuttal {} (\"{}\") attacks the speaker (\"{}\") instead of the argument.",
                prop.id,
                excerpt(&prop.text),
                term
            );
            findings.push(FallacyFinding::new(
                FallacyKind::AdHominem,
                self.name(),
                implicated,
                explanation,
            ));
        }
        findings
    }
}
