//! Straw man rule
//!
//! Fires on rebuttals that quarrel with a restated position rather than
//! the stated one, recognized by misrepresentation phrasing like
//! "that's not what I said" or "you're exaggerating".

use crate::detectors::base::FallacyRule;
use crate::detectors::lexicon::{first_match, misrepresentation_pattern};
use crate::graph::{ArgumentGraph, Role};
use crate::models::{excerpt, FallacyFinding, FallacyKind};

/// Flags rebuttals that argue against a misrepresented position.
#[derive(Debug, Default)]
pub struct StrawManRule;

impl StrawManRule {
    pub fn new() -> Self {
        Self
    }
}

impl FallacyRule for StrawManRule {
    fn name(&self) -> &'static str {
        "straw-man"
    }

    fn description(&self) -> &'static str {
        "Flags rebuttals directed at a distorted restatement of the other side"
    }

    fn detect(&self, graph: &ArgumentGraph) -> Vec<FallacyFinding> {
        graph
            .propositions()
            .iter()
            .filter(|p| p.role == Role::Rebuttal)
            .filter_map(|p| {
                let term = first_match(misrepresentation_pattern(), &p.text)?;
                let explanation = format!(
                    "Rebuttal {} (\"{}\") disputes a restated position (\"{}\") rather than the argument made.",
                    p.id,
                    excerpt(&p.text),
                    term
                );
                Some(FallacyFinding::new(
                    FallacyKind::StrawMan,
                    self.name(),
                    vec![p.id],
                    explanation,
                ))
            })
            .collect()
    }
}
