//! False dichotomy rule
//!
//! A premise that frames the debate as "either X or Y" while the graph
//! contains no rebuttal at all is presenting two options as if they were
//! the only ones. The presence of any rebuttal is taken as the argument
//! acknowledging other positions, so the rule stays quiet then.

use regex::Regex;
use std::sync::OnceLock;

use crate::detectors::base::FallacyRule;
use crate::graph::{ArgumentGraph, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

static EITHER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn either_pattern() -> &'static Regex {
    EITHER_PATTERN.get_or_init(|| Regex::new(r"(?i)\beither\b").unwrap())
}

static OR_PATTERN: OnceLock<Regex> = OnceLock::new();

fn or_pattern() -> &'static Regex {
    OR_PATTERN.get_or_init(|| Regex::new(r"(?i)\bor\b").unwrap())
}

/// Flags either/or premises in rebuttal-free arguments.
#[derive(Debug, Default)]
pub struct FalseDichotomyRule;

impl FalseDichotomyRule {
    pub fn new() -> Self {
        Self
    }
}

impl FallacyRule for FalseDichotomyRule {
    fn name(&self) -> &'static str {
        "false-dichotomy"
    }

    fn description(&self) -> &'static str {
        "Flags premises that present exactly two options as the only ones"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        let has_rebuttal = graph.propositions().iter().any(|p| p.role == Role::Rebuttal);
        if has_rebuttal {
            return vec![];
        }

        graph
            .propositions()
            .iter()
            .filter(|p| p.role == Role::Premise)
            .filter(|p| either_pattern().is_match(&p.text) && or_pattern().is_match(&p.text))
            .map(|p| {
                let explanation = format!(
                    "Premise {} (\"{}\") offers only two options and nothing in the argument considers a third.",
                    p.id,
                    excerpt(&p.text)
                );
                FallacyFinding::new(
                    FallacyKind::FalseDichotomy,
                    self.name(),
                    vec![p.id],
                    explanation,
                )
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
    fn test_either_or_premise_fires() {
        let graph = ArgumentGraph::new(vec![
            prop(0, "Because we either act now or lose everything", Role::Premise),
            prop(1, "we must act now", Role::Claim),
        ])
        .unwrap();
        let findings = FalseDichotomyRule::new().detect(&graph);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].propositions, vec![PropositionId(0)]);
    }

    #[test]
    fn test_either_without_or_does_not_fire() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "Because either option needs funding",
            Role::Premise,
        )])
        .unwrap();
        assert!(FalseDichotomyRule::new().detect(&graph).is_empty());
    }

    #[test]
    fn test_rebuttal_in_graph_suppresses() {
        let graph = ArgumentGraph::new(vec![
            prop(0, "Because we either act now or lose everything", Role::Premise),
            prop(1, "we must act now", Role::Claim),
            prop(2, "However a phased approach also works", Role::Rebuttal),
        ])
        .unwrap();
        assert!(FalseDichotomyRule::new().detect(&graph).is_empty());
    }

    #[test]
    fn test_either_or_in_claim_does_not_fire() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "we must either adapt or retire the system",
            Role::Claim,
        )])
        .unwrap();
        assert!(FalseDichotomyRule::new().detect(&graph).is_empty());
    }
}
