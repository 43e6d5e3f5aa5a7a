//! Appeal to authority rule
//!
//! Citing an expert is weak support, not fallacious per se, so this
//! rule carries the lowest severity in the standard set. It fires when
//! a premise names an authority figure and offers no evidentiary marker
//! to go with it.

use crate::detectors::base::FallacyRule;
use crate::detectors::lexicon::{authority_pattern, evidence_pattern, first_match};
use crate::graph::{ArgumentGraph, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

/// Flags premises that cite authority in place of evidence.
#[derive(Debug, Default)]
pub struct AppealToAuthorityRule;

impl AppealToAuthorityRule {
    pub fn new() -> Self {
        Self
    }
}

impl FallacyRule for AppealToAuthorityRule {
    fn name(&self) -> &'static str {
        "appeal-to-authority"
    }

    fn description(&self) -> &'static str {
        "Flags premises that cite an authority figure without supporting evidence"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        graph
            .propositions()
            .iter()
            .filter(|p| p.role == Role::Premise)
            .filter(|p| !evidence_pattern().is_match(&p.text))
            .filter_map(|p| {
                let term = first_match(authority_pattern(), &p.text)?;
                let explanation = format!(
                    "Premise {} (\"{}\") cites an authority (\"{}\") but no verifiable evidence.",
                    p.id,
                    excerpt(&p.text),
                    term
                );
                Some(FallacyFinding::new(
                    FallacyKind::AppealToAuthority,
                    self.name(),
                    vec![p.id],
                    explanation,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Proposition, PropositionId, Span};

    fn prop(id: u32, text: &str, role: Role) -> Proposition {
        Proposition::new(PropositionId(id), text, Span::new(0, 0), role, 0.9)
    }

    #[test]
    fn test_bare_authority_citation_fires() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "Because a famous professor endorses the diet",
            Role::Premise,
        )])
        .unwrap();
        let findings = AppealToAuthorityRule::new().detect(&graph);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, crate::models::Severity::Low);
        assert!(findings[0].explanation.contains("professor"));
    }

    #[test]
    fn test_authority_with_evidence_does_not_fire() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "Because the professor's study tracked 5000 patients",
            Role::Premise,
        )])
        .unwrap();
        assert!(AppealToAuthorityRule::new().detect(&graph).is_empty());
    }

    #[test]
    fn test_authority_in_claim_is_ignored() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "the experts are on our side",
            Role::Claim,
        )])
        .unwrap();
        assert!(AppealToAuthorityRule::new().detect(&graph).is_empty());
    }
}
