//! Hasty generalization rule
//!
//! A claim resting on exactly one premise whose text sweeps with a
//! universal quantifier ("all", "every", "always", ...) is generalizing
//! from too little. Claims with two or more premises are left alone even
//! when a quantifier appears: breadth of support is the point.

use crate::detectors::base::FallacyRule;
use crate::detectors::lexicon::{first_match, quantifier_pattern};
use crate::graph::{ArgumentGraph, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

/// Flags single-premise claims built on a universal quantifier.
#[derive(Debug, Default)]
pub struct HastyGeneralizationRule;

impl HastyGeneralizationRule {
    pub fn new() -> Self {
        Self
    }
}

impl FallacyRule for HastyGeneralizationRule {
    fn name(&self) -> &'static str {
        "hasty-generalization"
    }

    fn description(&self) -> &'static str {
        "Flags claims whose only premise generalizes with a universal quantifier"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        let mut findings = Vec::new();
        for claim in graph.claims() {
            let premises: Vec<_> = graph
                .supporters_of(claim.id)
                .into_iter()
                .filter(|p| p.role == Role::Premise)
                .collect();
            let [premise] = premises.as_slice() else {
                continue;
            };
            let Some(term) = first_match(quantifier_pattern(), &premise.text) else {
                continue;
            };

            let explanation = format!(
                "Claim {} rests on a single premise (\"{}\") that generalizes with \"{}\".",
                claim.id,
                excerpt(&premise.text),
                term
            );
            findings.push(FallacyFinding::new(
                FallacyKind::HastyGeneralization,
                self.name(),
                vec![premise.id, claim.id],
                explanation,
            ));
        }
        findings
    }
}
