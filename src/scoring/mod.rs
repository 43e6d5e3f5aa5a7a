//! Quality scoring for analyzed arguments
//!
//! Aggregates structural issues and fallacy findings into one score in
//! [0, 100] plus ordered coaching feedback.
//!
//! # Scoring Formula
//!
//! ```text
//! Score = 100
//!   - 25 per invalidating structural issue
//!     (NO_CLAIM, UNSUPPORTED_CLAIM, CIRCULAR_SUPPORT; orphans are free)
//!   - 10 per high severity finding
//!   -  5 per medium severity finding
//!   -  2 per low severity finding
//! floored at 0
//! ```
//!
//! All deductions are configurable through `[scoring]` in rhetor.toml,
//! and the defaults above are the contract the scenario tests pin.
//!
//! # Feedback Order
//!
//! One line per issue/finding: structural issues first in validator
//! order (advisory orphans included), then findings in detector order.
//! Downstream consumers rely on this order, so it is part of the API.

use tracing::debug;

use crate::config::ScoringWeights;
use crate::graph::{ArgumentGraph, PropositionId};
use crate::models::{
    excerpt, FallacyFinding, IssueKind, Severity, StructuralIssue, ValidationReport,
};

/// Turns validation output and findings into a score plus feedback.
pub struct QualityScorer {
    weights: ScoringWeights,
}

impl QualityScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Compute the score and ordered feedback for one analysis.
    pub fn score(
        &self,
        graph: &ArgumentGraph,
        validation: &ValidationReport,
        findings: &[FallacyFinding],
    ) -> (u8, Vec<String>) {
        let mut deduction: u32 = 0;
        for _ in validation.invalidating_issues() {
            deduction += self.weights.structural_deduction;
        }
        for finding in findings {
            deduction += match finding.severity {
                Severity::High => self.weights.high_deduction,
                Severity::Medium => self.weights.medium_deduction,
                Severity::Low => self.weights.low_deduction,
            };
        }
        let score = 100u32.saturating_sub(deduction) as u8;

        let mut feedback: Vec<String> =
            Vec::with_capacity(validation.issues.len() + findings.len());
        for issue in &validation.issues {
            feedback.push(self.issue_feedback(graph, issue));
        }
        for finding in findings {
            feedback.push(finding.explanation.clone());
        }

        debug!(
            "scored {} ({} structural, {} findings, {} feedback lines)",
            score,
            validation.issues.len(),
            findings.len(),
            feedback.len()
        );
        (score, feedback)
    }

    /// Coaching template per issue kind. Distinct from the validator's
    /// diagnostic message: this tells the user what to do about it.
    fn issue_feedback(&self, graph: &ArgumentGraph, issue: &StructuralIssue) -> String {
        match issue.kind {
            IssueKind::NoClaim => {
                "State a clear position: no claim was found to anchor the argument.".to_string()
            }
            IssueKind::UnsupportedClaim => {
                let id = issue.propositions.first().copied();
                format!(
                    "Add at least one premise backing claim {} (\"{}\").",
                    id.map(|i| i.to_string()).unwrap_or_else(|| "?".to_string()),
                    id.map(|i| quoted(graph, i)).unwrap_or_default()
                )
            }
            IssueKind::OrphanProposition => {
                let id = issue.propositions.first().copied();
                format!(
                    "Connect {} (\"{}\") to the rest of the argument or drop it.",
                    id.map(|i| i.to_string()).unwrap_or_else(|| "?".to_string()),
                    id.map(|i| quoted(graph, i)).unwrap_or_default()
                )
            }
            IssueKind::CircularSupport => {
                let path: Vec<String> =
                    issue.propositions.iter().map(|id| id.to_string()).collect();
                format!(
                    "Break the support cycle involving {} by grounding one proposition in outside evidence.",
                    path.join(", ")
                )
            }
        }
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

fn quoted(graph: &ArgumentGraph, id: PropositionId) -> String {
    graph
        .proposition(id)
        .map(|p| excerpt(&p.text))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Proposition, Role, Span};
    use crate::models::FallacyKind;

    fn graph_with_claim() -> ArgumentGraph {
        ArgumentGraph::new(vec![Proposition::new(
            PropositionId(0),
            "we should ban it",
            Span::new(0, 0),
            Role::Claim,
            0.9,
        )])
        .unwrap()
    }

    fn issue(kind: IssueKind) -> StructuralIssue {
        StructuralIssue {
            kind,
            propositions: vec![PropositionId(0)],
            message: "diagnostic".to_string(),
        }
    }

    fn finding(severity_kind: FallacyKind, text: &str) -> FallacyFinding {
        FallacyFinding::new(
            severity_kind,
            "test-rule",
            vec![PropositionId(0)],
            text.to_string(),
        )
    }

    #[test]
    fn test_deduction_formula() {
        let scorer = QualityScorer::default();
        let graph = graph_with_claim();
        let validation =
            ValidationReport::from_issues(vec![issue(IssueKind::UnsupportedClaim)]);
        let findings = vec![
            finding(FallacyKind::AdHominem, "high"),
            finding(FallacyKind::HastyGeneralization, "medium"),
            finding(FallacyKind::AppealToAuthority, "low"),
        ];
        let (score, feedback) = scorer.score(&graph, &validation, &findings);
        assert_eq!(score, 100 - 25 - 10 - 5 - 2);
        assert_eq!(feedback.len(), 4);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let scorer = QualityScorer::default();
        let graph = graph_with_claim();
        let validation = ValidationReport::from_issues(vec![
            issue(IssueKind::UnsupportedClaim),
            issue(IssueKind::CircularSupport),
            issue(IssueKind::NoClaim),
            issue(IssueKind::UnsupportedClaim),
            issue(IssueKind::CircularSupport),
        ]);
        let (score, _) = scorer.score(&graph, &validation, &[]);
        assert_eq!(score, 0);
    }

    #[test]
    fn test_orphans_cost_nothing_but_still_get_feedback() {
        let scorer = QualityScorer::default();
        let graph = graph_with_claim();
        let validation =
            ValidationReport::from_issues(vec![issue(IssueKind::OrphanProposition)]);
        let (score, feedback) = scorer.score(&graph, &validation, &[]);
        assert_eq!(score, 100);
        assert_eq!(feedback.len(), 1);
        assert!(feedback[0].starts_with("Connect P0"));
    }

    #[test]
    fn test_feedback_order_is_issues_then_findings() {
        let scorer = QualityScorer::default();
        let graph = graph_with_claim();
        let validation = ValidationReport::from_issues(vec![
            issue(IssueKind::UnsupportedClaim),
            issue(IssueKind::OrphanProposition),
        ]);
        let findings = vec![
            finding(FallacyKind::AppealToEmotion, "first finding"),
            finding(FallacyKind::SlipperySlope, "second finding"),
        ];
        let (_, feedback) = scorer.score(&graph, &validation, &findings);
        assert_eq!(feedback.len(), 4);
        assert!(feedback[0].starts_with("Add at least one premise"));
        assert!(feedback[1].starts_with("Connect P0"));
        assert_eq!(feedback[2], "first finding");
        assert_eq!(feedback[3], "second finding");
    }

    #[test]
    fn test_custom_weights_are_honored() {
        let weights = ScoringWeights {
            structural_deduction: 50,
            high_deduction: 1,
            medium_deduction: 1,
            low_deduction: 1,
        };
        let scorer = QualityScorer::new(weights);
        let graph = graph_with_claim();
        let validation =
            ValidationReport::from_issues(vec![issue(IssueKind::UnsupportedClaim)]);
        let findings = vec![finding(FallacyKind::AdHominem, "x")];
        let (score, _) = scorer.score(&graph, &validation, &findings);
        assert_eq!(score, 49);
    }

    #[test]
    fn test_perfect_argument_scores_100() {
        let scorer = QualityScorer::default();
        let graph = graph_with_claim();
        let validation = ValidationReport::from_issues(vec![]);
        let (score, feedback) = scorer.score(&graph, &validation, &[]);
        assert_eq!(score, 100);
        assert!(feedback.is_empty());
    }
}
