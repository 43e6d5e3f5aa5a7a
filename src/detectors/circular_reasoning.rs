//! Circular reasoning rule
//!
//! Reuses the graph's support-cycle detection, so this rule and the
//! validator's CIRCULAR_SUPPORT issue always co-occur. A cycle means
//! some proposition is both source and sink of a supports path: the
//! argument assumes what it set out to prove.

use crate::detectors::base::FallacyRule;
use crate::graph::ArgumentGraph;
use crate::models::{FallacyFinding, FallacyKind};

/// Flags cycles in the supports subgraph.
#[derive(Debug, Default)]
pub struct CircularReasoningRule;

impl CircularReasoningRule {
    pub fn new() -> Self {
        Self
    }
}

impl FallacyRule for CircularReasoningRule {
    fn name(&self) -> &'static str {
        "circular-reasoning"
    }

    fn description(&self) -> &'static str {
        "Flags support cycles where a claim ultimately rests on itself"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        graph
            .support_cycles()
            .into_iter()
            .map(|cycle| {
                let mut path: Vec<String> = cycle.iter().map(|id| id.to_string()).collect();
                path.push(cycle[0].to_string());
                let explanation = format!(
                    "Propositions {} support each other in a circle; the conclusion assumes itself.",
                    path.join(" -> ")
                );
                FallacyFinding::new(FallacyKind::CircularReasoning, self.name(), cycle, explanation)
            })
            .collect()
    }
}
