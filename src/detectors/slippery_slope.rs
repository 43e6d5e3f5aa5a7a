//! Slippery slope rule
//!
//! Fires when a premise chains toward an extreme outcome: a consequence
//! marker ("leads to", "before you know it", ...) combined with an
//! extremity term ("everything", "collapse", "ruin", ...). Either signal
//! alone is ordinary causal talk and stays unflagged.

use crate::detectors::base::FallacyRule;
use crate::detectors::lexicon::{consequence_pattern, extremity_pattern, first_match};
use crate::graph::{ArgumentGraph, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

/// Flags premises that escalate a first step into an extreme outcome.
#[derive(Debug, Default)]
pub struct SlipperySlopeRule;

impl SlipperySlopeRule {
    pub fn new() -> Self {
        Self
    }
}

impl FallacyRule for SlipperySlopeRule {
    fn name(&self) -> &'static str {
        "slippery-slope"
    }

    fn description(&self) -> &'static str {
        "Flags premises that chain a modest step to an extreme, unsupported outcome"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        graph
            .propositions()
            .iter()
            .filter(|p| p.role == Role::Premise)
            .filter_map(|p| {
                let chain = first_match(consequence_pattern(), &p.text)?;
                first_match(extremity_pattern(), &p.text)?;
                let explanation = format!(
                    "Premise {} (\"{}\") rides a chain of consequences (\"{}\") to an extreme outcome without support.",
                    p.id,
                    excerpt(&p.text),
                    chain
                );
                Some(FallacyFinding::new(
                    FallacyKind::SlipperySlope,
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
    fn test_chained_extreme_premise_fires() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "Because one exception leads to the collapse of the whole system",
            Role::Premise,
        )])
        .unwrap();
        let findings = SlipperySlopeRule::new().detect(&graph);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].explanation.contains("leads to"));
    }

    #[test]
    fn test_consequence_without_extremity_does_not_fire() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "Because the tax change leads to modest savings",
            Role::Premise,
        )])
        .unwrap();
        assert!(SlipperySlopeRule::new().detect(&graph).is_empty());
    }

    #[test]
    fn test_extremity_without_chain_does_not_fire() {
        let graph = ArgumentGraph::new(vec![prop(
            0,
            "Because the old bridge could collapse",
            Role::Premise,
        )])
        .unwrap();
        assert!(SlipperySlopeRule::new().detect(&graph).is_empty());
    }
}
